use serde::Deserialize;

/// Front-end settings for talking to the flash backend.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Scheme and host the page was served from, e.g. `http://localhost:5000`.
    pub origin: String,
    /// Path prefix of the device endpoints.
    pub api_base: String,
    pub baud_rates: Vec<u32>,
    pub default_baud_rate: u32,
    pub default_restore_address: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:5000".to_string(),
            api_base: "/api/esp32".to_string(),
            baud_rates: vec![115200, 230400, 460800, 921600],
            default_baud_rate: 115200,
            default_restore_address: "0x0".to_string(),
        }
    }
}

impl AppConfig {
    /// Config for the page's own origin. reqwest needs an absolute URL in the
    /// browser, so relative API paths are resolved against `window.location`.
    pub fn from_window() -> Self {
        let mut config = Self::default();
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            config.origin = origin;
        }
        config
    }

    pub fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}{}{}",
            self.origin.trim_end_matches('/'),
            self.api_base,
            endpoint
        )
    }

    /// Link for fetching a finished backup. The server hands out paths with
    /// the leading slash stripped.
    pub fn download_url(&self, file_path: &str) -> String {
        self.api_url(&format!("/download/{}", file_path.trim_start_matches('/')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_origin_and_base() {
        let config = AppConfig {
            origin: "http://127.0.0.1:5000/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.api_url("/ports"), "http://127.0.0.1:5000/api/esp32/ports");
    }

    #[test]
    fn download_url_tolerates_leading_slash() {
        let config = AppConfig::default();
        assert_eq!(
            config.download_url("tmp/tmpab12.bin"),
            "http://localhost:5000/api/esp32/download/tmp/tmpab12.bin"
        );
        assert_eq!(
            config.download_url("/tmp/tmpab12.bin"),
            config.download_url("tmp/tmpab12.bin")
        );
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "default_baud_rate": 460800 }"#).unwrap();
        assert_eq!(config.default_baud_rate, 460800);
        assert_eq!(config.api_base, "/api/esp32");
        assert_eq!(config.default_restore_address, "0x0");
    }
}
