use dioxus_logger::tracing::{debug, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};

use super::{
    parse_response, ApiError, BackupReport, ChipInfo, ChipInfoBody, DeviceApi, PortInfo,
    PortRequest, PortsBody, RestoreRequest,
};
use crate::config::AppConfig;

/// Multipart field carrying the image bytes.
const RESTORE_FILE_FIELD: &str = "file";

/// Text fields of a restore upload, in the order they are sent.
fn restore_text_fields(request: &RestoreRequest) -> [(&'static str, String); 3] {
    [
        ("port", request.port.clone()),
        ("baud_rate", request.baud_rate.to_string()),
        ("address", request.address.clone()),
    ]
}

fn restore_form(request: RestoreRequest) -> Result<Form, ApiError> {
    let form = restore_text_fields(&request)
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value));
    let file = Part::bytes(request.file.bytes)
        .file_name(request.file.name)
        .mime_str("application/octet-stream")
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    Ok(form.part(RESTORE_FILE_FIELD, file))
}

/// [`DeviceApi`] over HTTP. One attempt per call: no retries, no timeout.
#[derive(Clone)]
pub struct HttpDeviceApi {
    client: Client,
    config: AppConfig,
}

impl HttpDeviceApi {
    pub fn new(config: AppConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|e| {
            warn!("Device API request failed: {}", e);
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        debug!("Device API answered {} ({} bytes)", status, body.len());

        parse_response(status, &body)
    }

    async fn post_port<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        port: &str,
        baud_rate: u32,
    ) -> Result<T, ApiError> {
        let url = self.config.api_url(endpoint);
        debug!("POST {} (port: {}, baud: {})", url, port, baud_rate);
        self.send(
            self.client
                .post(url)
                .json(&PortRequest { port, baud_rate }),
        )
        .await
    }
}

impl DeviceApi for HttpDeviceApi {
    async fn list_ports(&self) -> Result<Vec<PortInfo>, ApiError> {
        let url = self.config.api_url("/ports");
        debug!("GET {}", url);
        let body: PortsBody = self.send(self.client.get(url)).await?;
        Ok(body.ports)
    }

    async fn chip_info(&self, port: &str, baud_rate: u32) -> Result<Option<ChipInfo>, ApiError> {
        let body: ChipInfoBody = self.post_port("/chip_info", port, baud_rate).await?;
        Ok(body.chip_info)
    }

    async fn backup(&self, port: &str, baud_rate: u32) -> Result<BackupReport, ApiError> {
        self.post_port("/backup", port, baud_rate).await
    }

    async fn restore(&self, request: RestoreRequest) -> Result<(), ApiError> {
        let url = self.config.api_url("/restore");
        debug!(
            "POST {} (port: {}, file: {}, {} bytes @ {})",
            url,
            request.port,
            request.file.name,
            request.file.bytes.len(),
            request.address
        );

        let form = restore_form(request)?;
        let _: IgnoredAny = self.send(self.client.post(url).multipart(form)).await?;
        Ok(())
    }

    async fn erase(&self, port: &str, baud_rate: u32) -> Result<(), ApiError> {
        let _: IgnoredAny = self.post_port("/erase", port, baud_rate).await?;
        Ok(())
    }

    fn download_url(&self, file_path: &str) -> String {
        self.config.download_url(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RestoreFile;

    fn request() -> RestoreRequest {
        RestoreRequest {
            port: "/dev/ttyUSB0".to_string(),
            baud_rate: 921600,
            address: "0x1000".to_string(),
            file: RestoreFile {
                name: "bootloader.bin".to_string(),
                bytes: vec![0xE9, 0x02],
            },
        }
    }

    #[test]
    fn restore_upload_names_every_field() {
        let fields = restore_text_fields(&request());
        assert_eq!(
            fields,
            [
                ("port", "/dev/ttyUSB0".to_string()),
                ("baud_rate", "921600".to_string()),
                ("address", "0x1000".to_string()),
            ]
        );
        assert_eq!(RESTORE_FILE_FIELD, "file");
    }

    #[test]
    fn restore_form_builds_with_binary_part() {
        let form = restore_form(request()).unwrap();
        assert!(!form.boundary().is_empty());
    }
}
