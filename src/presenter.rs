//! What the controller can ask the UI to show.
//!
//! [`Presenter`] is the rendering seam; [`ViewState`] is the plain model the
//! page draws from. The Dioxus presenter writes a `ViewState` held in a
//! signal, the test presenter writes one held in a `RefCell`.

use std::collections::HashMap;

use crate::api::{ChipInfo, PortInfo, ERROR_MARKER};
use crate::operation::OperationKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn class(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub message: String,
    pub severity: Severity,
}

impl LogEntry {
    pub fn now(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            message: message.into(),
            severity,
        }
    }
}

/// Operations that own a progress bar and a result panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultSlot {
    Backup,
    Restore,
    Erase,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PortOption {
    pub value: String,
    pub label: String,
}

impl From<&PortInfo> for PortOption {
    fn from(info: &PortInfo) -> Self {
        Self {
            value: info.port.clone(),
            label: info.label(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChipInfoRow {
    pub label: &'static str,
    pub value: String,
    pub is_error: bool,
}

impl ChipInfoRow {
    fn new(label: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Self {
                label,
                value: v.to_string(),
                is_error: v.starts_with(ERROR_MARKER),
            },
            _ => Self {
                label,
                value: "N/A".to_string(),
                is_error: false,
            },
        }
    }

    pub fn class(&self) -> &'static str {
        if self.is_error {
            "chip-info-value error"
        } else {
            "chip-info-value"
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChipInfoView {
    pub rows: Vec<ChipInfoRow>,
    pub raw_output: Option<String>,
}

impl ChipInfoView {
    pub fn from_info(info: Option<&ChipInfo>) -> Self {
        let Some(info) = info else {
            return Self {
                rows: vec![ChipInfoRow {
                    label: "Chip Info",
                    value: "Error: Received no chip info from server.".to_string(),
                    is_error: true,
                }],
                raw_output: None,
            };
        };

        Self {
            rows: vec![
                ChipInfoRow::new("Chip Type", info.chip_type.as_deref()),
                ChipInfoRow::new("Chip Description", info.chip_description.as_deref()),
                ChipInfoRow::new("MAC Address", info.mac_address.as_deref()),
                ChipInfoRow::new("Flash Manufacturer", info.flash_manufacturer.as_deref()),
                ChipInfoRow::new("Flash Device", info.flash_device.as_deref()),
            ],
            raw_output: info.raw_output.clone().filter(|raw| !raw.is_empty()),
        }
    }

    pub fn row(&self, label: &str) -> Option<&ChipInfoRow> {
        self.rows.iter().find(|row| row.label == label)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DownloadLink {
    pub url: String,
    pub file_name: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub severity: Severity,
    pub title: String,
    pub detail: Option<String>,
    pub download: Option<DownloadLink>,
}

impl ResultView {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            title: title.into(),
            detail: None,
            download: None,
        }
    }

    pub fn error(prefix: &str, message: &str) -> Self {
        Self {
            severity: Severity::Error,
            title: prefix.to_string(),
            detail: Some(message.to_string()),
            download: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

/// Enabled flag and optional label override for an operation's trigger.
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerView {
    pub enabled: bool,
    pub label: Option<String>,
}

/// Rendering capabilities the controller relies on.
#[allow(async_fn_in_trait)]
pub trait Presenter {
    /// Replace the selectable ports.
    fn render_port_list(&self, ports: &[PortInfo]);

    fn render_chip_info(&self, view: ChipInfoView);

    fn render_result(&self, slot: ResultSlot, view: ResultView);

    fn hide_result(&self, slot: ResultSlot);

    /// `Some(label)` shows the indeterminate bar, `None` hides it.
    fn render_progress(&self, slot: ResultSlot, label: Option<&str>);

    fn append_log(&self, entry: LogEntry);

    fn clear_log(&self);

    /// Ask the user; resolves to `true` only on explicit confirmation.
    async fn confirm(&self, request: ConfirmRequest) -> bool;

    fn set_trigger(&self, kind: OperationKind, enabled: bool, label: Option<&str>);
}

/// Everything the flash tool page renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub ports: Vec<PortOption>,
    pub chip_info: Option<ChipInfoView>,
    pub results: HashMap<ResultSlot, ResultView>,
    pub progress: HashMap<ResultSlot, String>,
    pub log: Vec<LogEntry>,
    pub triggers: HashMap<OperationKind, TriggerView>,
    pub confirm: Option<ConfirmRequest>,
}

impl ViewState {
    pub fn set_ports(&mut self, ports: &[PortInfo]) {
        self.ports = ports.iter().map(PortOption::from).collect();
    }

    pub fn set_result(&mut self, slot: ResultSlot, view: ResultView) {
        self.results.insert(slot, view);
    }

    pub fn hide_result(&mut self, slot: ResultSlot) {
        self.results.remove(&slot);
    }

    pub fn result(&self, slot: ResultSlot) -> Option<&ResultView> {
        self.results.get(&slot)
    }

    pub fn set_progress(&mut self, slot: ResultSlot, label: Option<&str>) {
        match label {
            Some(label) => {
                self.progress.insert(slot, label.to_string());
            }
            None => {
                self.progress.remove(&slot);
            }
        }
    }

    pub fn progress(&self, slot: ResultSlot) -> Option<&str> {
        self.progress.get(&slot).map(String::as_str)
    }

    pub fn set_trigger(&mut self, kind: OperationKind, enabled: bool, label: Option<&str>) {
        let trigger = self.triggers.entry(kind).or_insert(TriggerView {
            enabled: true,
            label: None,
        });
        trigger.enabled = enabled;
        trigger.label = label.map(str::to_string);
    }

    pub fn trigger_enabled(&self, kind: OperationKind) -> bool {
        self.triggers.get(&kind).map_or(true, |t| t.enabled)
    }

    /// Current label for a trigger, or `default` if none was set.
    pub fn trigger_label<'a>(&'a self, kind: OperationKind, default: &'a str) -> &'a str {
        self.triggers
            .get(&kind)
            .and_then(|t| t.label.as_deref())
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_chip_fields_render_as_na() {
        let info = ChipInfo {
            chip_type: Some("ESP32-D0WD-V3".to_string()),
            chip_description: Some(String::new()),
            ..ChipInfo::default()
        };
        let view = ChipInfoView::from_info(Some(&info));

        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.row("Chip Type").unwrap().value, "ESP32-D0WD-V3");
        for label in ["Chip Description", "MAC Address", "Flash Device"] {
            let row = view.row(label).unwrap();
            assert_eq!(row.value, "N/A");
            assert!(!row.is_error);
        }
        assert_eq!(view.raw_output, None);
    }

    #[test]
    fn error_tagged_chip_fields_are_flagged() {
        let info = ChipInfo {
            chip_type: Some("Error: serial port busy".to_string()),
            chip_description: Some("Error".to_string()),
            flash_manufacturer: Some("Error: timed out".to_string()),
            raw_output: Some("--- chip_id ---".to_string()),
            ..ChipInfo::default()
        };
        let view = ChipInfoView::from_info(Some(&info));

        let chip_type = view.row("Chip Type").unwrap();
        assert!(chip_type.is_error);
        assert_eq!(chip_type.class(), "chip-info-value error");
        assert!(view.row("Flash Manufacturer").unwrap().is_error);
        // Only the "Error:" prefix counts.
        assert!(!view.row("Chip Description").unwrap().is_error);
        assert_eq!(view.raw_output.as_deref(), Some("--- chip_id ---"));
    }

    #[test]
    fn missing_chip_info_is_a_single_error_row() {
        let view = ChipInfoView::from_info(None);
        assert_eq!(view.rows.len(), 1);
        assert!(view.rows[0].is_error);
    }

    #[test]
    fn port_options_use_port_and_description() {
        let mut state = ViewState::default();
        state.set_ports(&[PortInfo {
            port: "COM3".to_string(),
            description: "X".to_string(),
        }]);
        assert_eq!(
            state.ports,
            vec![PortOption {
                value: "COM3".to_string(),
                label: "COM3 - X".to_string(),
            }]
        );
    }

    #[test]
    fn trigger_label_falls_back_when_cleared() {
        let mut state = ViewState::default();
        assert!(state.trigger_enabled(OperationKind::Backup));
        assert_eq!(state.trigger_label(OperationKind::Backup, "Start"), "Start");

        state.set_trigger(OperationKind::Backup, false, Some("Backing up..."));
        assert!(!state.trigger_enabled(OperationKind::Backup));
        assert_eq!(
            state.trigger_label(OperationKind::Backup, "Start"),
            "Backing up..."
        );

        state.set_trigger(OperationKind::Backup, true, None);
        assert!(state.trigger_enabled(OperationKind::Backup));
        assert_eq!(state.trigger_label(OperationKind::Backup, "Start"), "Start");
    }

    #[test]
    fn progress_shows_and_hides() {
        let mut state = ViewState::default();
        state.set_progress(ResultSlot::Erase, Some("Erasing flash..."));
        assert_eq!(state.progress(ResultSlot::Erase), Some("Erasing flash..."));
        state.set_progress(ResultSlot::Erase, None);
        assert_eq!(state.progress(ResultSlot::Erase), None);
    }
}
