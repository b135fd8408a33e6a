//! Client side of the flash backend (`/api/esp32/...`).
//!
//! [`DeviceApi`] is the seam between the operation controller and the
//! backend. [`HttpDeviceApi`] is the real implementation; tests substitute
//! spies.

pub mod http;

pub use http::HttpDeviceApi;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix the backend puts on chip info fields it could not read.
pub const ERROR_MARKER: &str = "Error:";

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct PortInfo {
    pub port: String,
    #[serde(default)]
    pub description: String,
}

impl PortInfo {
    pub fn label(&self) -> String {
        format!("{} - {}", self.port, self.description)
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct ChipInfo {
    pub chip_type: Option<String>,
    pub chip_description: Option<String>,
    pub mac_address: Option<String>,
    pub flash_manufacturer: Option<String>,
    pub flash_device: Option<String>,
    pub raw_output: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct BackupReport {
    pub file_size: u64,
    pub file_path: String,
}

/// Image picked by the user for a restore.
#[derive(Clone, Debug, PartialEq)]
pub struct RestoreFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RestoreRequest {
    pub port: String,
    pub baud_rate: u32,
    pub address: String,
    pub file: RestoreFile,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// Non-2xx response. The body is not inspected.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// `{"success": false, "error": ...}`
    #[error("{message}")]
    Rejected {
        message: String,
        stderr: Option<String>,
    },

    #[error("{0}")]
    Transport(String),

    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the backend answered and said no, as opposed to the request
    /// never producing a usable answer.
    pub fn is_server_side(&self) -> bool {
        matches!(self, ApiError::Status(_) | ApiError::Rejected { .. })
    }
}

/// The device operations the backend exposes.
#[allow(async_fn_in_trait)]
pub trait DeviceApi {
    async fn list_ports(&self) -> Result<Vec<PortInfo>, ApiError>;

    /// `Ok(None)` when the backend reports success without a `chip_info` body.
    async fn chip_info(&self, port: &str, baud_rate: u32) -> Result<Option<ChipInfo>, ApiError>;

    async fn backup(&self, port: &str, baud_rate: u32) -> Result<BackupReport, ApiError>;

    async fn restore(&self, request: RestoreRequest) -> Result<(), ApiError>;

    async fn erase(&self, port: &str, baud_rate: u32) -> Result<(), ApiError>;

    fn download_url(&self, file_path: &str) -> String;
}

#[derive(Serialize)]
pub(crate) struct PortRequest<'a> {
    pub port: &'a str,
    pub baud_rate: u32,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    error: Option<String>,
    stderr: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct PortsBody {
    #[serde(default)]
    pub ports: Vec<PortInfo>,
}

#[derive(Deserialize)]
pub(crate) struct ChipInfoBody {
    pub chip_info: Option<ChipInfo>,
}

/// Turn a status code and body into either the payload or an [`ApiError`].
///
/// Status is checked first, then the `success` flag, then the payload shape.
pub(crate) fn parse_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status(status));
    }

    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !envelope.success {
        return Err(ApiError::Rejected {
            message: envelope.error.unwrap_or_else(|| "unknown error".to_string()),
            stderr: envelope.stderr,
        });
    }

    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::IgnoredAny;

    #[test]
    fn non_2xx_wins_over_body() {
        let err = parse_response::<IgnoredAny>(500, r#"{"success": false, "error": "Backup failed"}"#)
            .unwrap_err();
        assert_eq!(err, ApiError::Status(500));
        assert_eq!(err.to_string(), "HTTP error! status: 500");
        assert!(err.is_server_side());
    }

    #[test]
    fn success_false_carries_server_message() {
        let err = parse_response::<IgnoredAny>(
            200,
            r#"{"success": false, "error": "Erase failed", "stderr": "A fatal error occurred"}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                message: "Erase failed".to_string(),
                stderr: Some("A fatal error occurred".to_string()),
            }
        );
        assert_eq!(err.to_string(), "Erase failed");
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = parse_response::<IgnoredAny>(200, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(!err.is_server_side());
    }

    #[test]
    fn ports_body_parses() {
        let body: PortsBody = parse_response(
            200,
            r#"{"success": true, "ports": [{"port": "COM3", "description": "X"}]}"#,
        )
        .unwrap();
        assert_eq!(body.ports.len(), 1);
        assert_eq!(body.ports[0].label(), "COM3 - X");
    }

    #[test]
    fn backup_body_ignores_extra_fields() {
        let report: BackupReport = parse_response(
            200,
            r#"{"success": true, "message": "Backup completed successfully",
                "file_path": "tmp/tmpx.bin", "file_size": 4194304, "stdout": "..."}"#,
        )
        .unwrap();
        assert_eq!(report.file_size, 4_194_304);
        assert_eq!(report.file_path, "tmp/tmpx.bin");
    }

    #[test]
    fn chip_info_fields_are_optional() {
        let body: ChipInfoBody = parse_response(
            200,
            r#"{"success": true, "chip_info": {"chip_type": "ESP32", "mac_address": "Error"}}"#,
        )
        .unwrap();
        let info = body.chip_info.unwrap();
        assert_eq!(info.chip_type.as_deref(), Some("ESP32"));
        assert_eq!(info.flash_device, None);

        let empty: ChipInfoBody = parse_response(200, r#"{"success": true}"#).unwrap();
        assert!(empty.chip_info.is_none());
    }
}
