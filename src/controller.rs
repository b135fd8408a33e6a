//! Drives device operations from user intent to rendered outcome.
//!
//! Every operation follows the same shape: validate input (warning, no
//! request), claim the operation slot, disable the trigger, make exactly one
//! Device API call, render the outcome, and release the slot through a drop
//! guard so the trigger always comes back.

use std::cell::Cell;

use dioxus_logger::tracing::{debug, info, warn};

use crate::api::{ApiError, BackupReport, DeviceApi, RestoreFile, RestoreRequest};
use crate::error::{OperationError, ValidationError};
use crate::estimate::format_megabytes;
use crate::i18n::{get_dict, Dict, Language};
use crate::operation::{OperationKind, OperationStatus, OperationTracker};
use crate::presenter::{
    ChipInfoView, ConfirmRequest, DownloadLink, LogEntry, Presenter, ResultSlot, ResultView,
    Severity,
};

/// Name offered to the browser for a downloaded backup.
pub const BACKUP_DOWNLOAD_NAME: &str = "esp32_backup.bin";

/// Restore address used when the field is left blank.
pub const DEFAULT_RESTORE_ADDRESS: &str = "0x0";

pub struct OperationController<A, P> {
    api: A,
    presenter: P,
    tracker: OperationTracker,
    language: Cell<Language>,
}

/// Holds an operation's slot while its request is pending.
struct Running<'a, P: Presenter> {
    tracker: &'a OperationTracker,
    presenter: &'a P,
    kind: OperationKind,
    progress: Option<ResultSlot>,
    succeeded: bool,
}

impl<P: Presenter> Running<'_, P> {
    fn succeed(&mut self) {
        self.succeeded = true;
    }
}

impl<P: Presenter> Drop for Running<'_, P> {
    fn drop(&mut self) {
        self.tracker.finish(self.kind, self.succeeded);
        self.presenter.set_trigger(self.kind, true, None);
        if let Some(slot) = self.progress {
            self.presenter.render_progress(slot, None);
        }
        debug!("{} finished (succeeded: {})", self.kind, self.succeeded);
    }
}

impl<A: DeviceApi, P: Presenter> OperationController<A, P> {
    pub fn new(api: A, presenter: P, language: Language) -> Self {
        Self {
            api,
            presenter,
            tracker: OperationTracker::new(),
            language: Cell::new(language),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn status(&self, kind: OperationKind) -> OperationStatus {
        self.tracker.status(kind)
    }

    pub fn set_language(&self, language: Language) {
        self.language.set(language);
    }

    fn dict(&self) -> Dict {
        get_dict(self.language.get())
    }

    fn log(&self, severity: Severity, message: impl Into<String>) {
        self.presenter.append_log(LogEntry::now(message, severity));
    }

    /// Load the port list, then log the startup line.
    pub async fn start(&self) {
        let _ = self.list_ports().await;
        info!("Flash tool controller started");
        self.log(Severity::Info, self.dict().app_started);
    }

    /// Empty the log feed, leaving a single entry that says so.
    pub fn clear_log(&self) {
        self.presenter.clear_log();
        self.log(Severity::Info, self.dict().log_cleared);
    }

    fn require_port(&self, port: &str) -> Result<(), OperationError> {
        if port.trim().is_empty() {
            self.log(Severity::Warning, self.dict().select_port);
            return Err(ValidationError::MissingPort.into());
        }
        Ok(())
    }

    /// Fail fast if `kind` could not start right now.
    fn ensure_available(&self, kind: OperationKind) -> Result<(), OperationError> {
        let blocker = if self.tracker.is_running(kind) {
            Some(kind)
        } else if kind.uses_device() {
            self.tracker.running_device_operation()
        } else {
            None
        };

        match blocker {
            Some(blocker) => Err(self.reject_busy(kind, blocker)),
            None => Ok(()),
        }
    }

    fn reject_busy(&self, kind: OperationKind, blocker: OperationKind) -> OperationError {
        warn!("Rejected {} while {} is running", kind, blocker);
        self.log(Severity::Warning, self.dict().operation_busy);
        OperationError::Busy(blocker)
    }

    fn begin(
        &self,
        kind: OperationKind,
        busy_label: Option<&str>,
        progress: Option<(ResultSlot, &str)>,
    ) -> Result<Running<'_, P>, OperationError> {
        self.tracker
            .try_begin(kind)
            .map_err(|blocker| self.reject_busy(kind, blocker))?;

        self.presenter.set_trigger(kind, false, busy_label);
        if let Some((slot, label)) = progress {
            self.presenter.render_progress(slot, Some(label));
            self.presenter.hide_result(slot);
        }

        Ok(Running {
            tracker: &self.tracker,
            presenter: &self.presenter,
            kind,
            progress: progress.map(|(slot, _)| slot),
            succeeded: false,
        })
    }

    /// Log and render a failed call. `{success: false}` answers are reported
    /// with the server's message; everything else is reported as a failed API
    /// call followed by the operation's generic error line.
    fn report_failure(
        &self,
        err: ApiError,
        slot: Option<ResultSlot>,
        failed: fn(&str) -> String,
        exception: &str,
    ) -> OperationError {
        let d = self.dict();
        let message = err.to_string();

        if let Some(slot) = slot {
            self.presenter
                .render_result(slot, ResultView::error(d.error_prefix, &message));
        }

        match &err {
            ApiError::Rejected { stderr, .. } => {
                if let Some(stderr) = stderr {
                    debug!("backend stderr: {}", stderr);
                }
                self.log(Severity::Error, failed(&message));
            }
            _ => {
                self.log(Severity::Error, (d.api_error)(&message));
                self.log(Severity::Error, exception);
            }
        }

        err.into()
    }

    /// Refresh the selectable ports. On failure the previous list stays.
    pub async fn list_ports(&self) -> Result<usize, OperationError> {
        let d = self.dict();
        let mut run = self.begin(OperationKind::ListPorts, None, None)?;
        self.log(Severity::Info, d.searching_ports);

        match self.api.list_ports().await {
            Ok(ports) => {
                self.presenter.render_port_list(&ports);
                if ports.is_empty() {
                    self.log(Severity::Warning, d.no_ports);
                } else {
                    self.log(Severity::Success, (d.ports_found)(ports.len()));
                }
                run.succeed();
                Ok(ports.len())
            }
            Err(err) => {
                let message = err.to_string();
                self.log(Severity::Error, (d.api_error)(&message));
                self.log(Severity::Error, d.ports_failed);
                Err(err.into())
            }
        }
    }

    pub async fn fetch_chip_info(&self, port: &str, baud_rate: u32) -> Result<(), OperationError> {
        let d = self.dict();
        self.require_port(port)?;
        let mut run = self.begin(OperationKind::GetChipInfo, Some(d.chip_info_busy), None)?;
        self.log(Severity::Info, (d.chip_info_loading)(port));

        match self.api.chip_info(port, baud_rate).await {
            Ok(info) => {
                self.presenter
                    .render_chip_info(ChipInfoView::from_info(info.as_ref()));
                self.log(Severity::Success, d.chip_info_loaded);
                run.succeed();
                Ok(())
            }
            Err(err) => Err(self.report_failure(
                err,
                None,
                d.chip_info_failed,
                d.chip_info_exception,
            )),
        }
    }

    pub async fn backup(&self, port: &str, baud_rate: u32) -> Result<BackupReport, OperationError> {
        let d = self.dict();
        self.require_port(port)?;
        let mut run = self.begin(
            OperationKind::Backup,
            Some(d.backup_busy),
            Some((ResultSlot::Backup, d.backup_progress)),
        )?;
        self.log(Severity::Info, (d.backup_started)(port));

        match self.api.backup(port, baud_rate).await {
            Ok(report) => {
                let size = format_megabytes(report.file_size);
                self.presenter.render_result(
                    ResultSlot::Backup,
                    ResultView {
                        severity: Severity::Success,
                        title: d.backup_done.to_string(),
                        detail: Some(format!("{}: {}", d.file_size_label, size)),
                        download: Some(DownloadLink {
                            url: self.api.download_url(&report.file_path),
                            file_name: BACKUP_DOWNLOAD_NAME.to_string(),
                            label: d.download.to_string(),
                        }),
                    },
                );
                self.log(Severity::Success, (d.backup_completed)(&size));
                run.succeed();
                Ok(report)
            }
            Err(err) => Err(self.report_failure(
                err,
                Some(ResultSlot::Backup),
                d.backup_failed,
                d.backup_exception,
            )),
        }
    }

    /// Write `file` to flash at `address` (hex string, blank means `0x0`).
    pub async fn restore(
        &self,
        port: &str,
        baud_rate: u32,
        file: Option<RestoreFile>,
        address: &str,
    ) -> Result<(), OperationError> {
        let d = self.dict();
        self.require_port(port)?;
        let Some(file) = file else {
            self.log(Severity::Warning, d.select_restore_file);
            return Err(ValidationError::MissingFile.into());
        };

        let mut run = self.begin(
            OperationKind::Restore,
            Some(d.restore_busy),
            Some((ResultSlot::Restore, d.restore_progress)),
        )?;
        self.log(Severity::Info, (d.restore_started)(port, &file.name));

        let address = match address.trim() {
            "" => DEFAULT_RESTORE_ADDRESS,
            trimmed => trimmed,
        };
        let request = RestoreRequest {
            port: port.to_string(),
            baud_rate,
            address: address.to_string(),
            file,
        };

        match self.api.restore(request).await {
            Ok(()) => {
                self.presenter
                    .render_result(ResultSlot::Restore, ResultView::success(d.restore_done));
                self.log(Severity::Success, d.restore_completed);
                run.succeed();
                Ok(())
            }
            Err(err) => Err(self.report_failure(
                err,
                Some(ResultSlot::Restore),
                d.restore_failed,
                d.restore_exception,
            )),
        }
    }

    /// Erase the whole flash after the user confirms. Returns `Ok(false)` if
    /// the user backed out.
    pub async fn erase(&self, port: &str, baud_rate: u32) -> Result<bool, OperationError> {
        let d = self.dict();
        self.require_port(port)?;
        self.ensure_available(OperationKind::Erase)?;

        let confirmed = self
            .presenter
            .confirm(ConfirmRequest {
                title: d.erase_confirm_title.to_string(),
                message: d.erase_confirm_message.to_string(),
                confirm_label: d.confirm.to_string(),
                cancel_label: d.cancel.to_string(),
            })
            .await;
        if !confirmed {
            debug!("Flash erase cancelled by user");
            return Ok(false);
        }

        // The dialog may have been open while something else started.
        let mut run = self.begin(
            OperationKind::Erase,
            Some(d.erase_busy),
            Some((ResultSlot::Erase, d.erase_progress)),
        )?;
        self.log(Severity::Info, (d.erase_started)(port));

        match self.api.erase(port, baud_rate).await {
            Ok(()) => {
                self.presenter
                    .render_result(ResultSlot::Erase, ResultView::success(d.erase_done));
                self.log(Severity::Success, d.erase_completed);
                run.succeed();
                Ok(true)
            }
            Err(err) => Err(self.report_failure(
                err,
                Some(ResultSlot::Erase),
                d.erase_failed,
                d.erase_exception,
            )),
        }
    }
}
