//! Fakes for controller tests.

use std::cell::{Cell, Ref, RefCell};

use futures::channel::oneshot;

use crate::api::{ApiError, BackupReport, ChipInfo, DeviceApi, PortInfo, RestoreRequest};
use crate::operation::OperationKind;
use crate::presenter::{
    ChipInfoView, ConfirmRequest, LogEntry, Presenter, ResultSlot, ResultView, Severity,
    ViewState,
};

/// Device API that records calls and answers with canned results.
pub struct SpyDeviceApi {
    calls: RefCell<Vec<OperationKind>>,
    restores: RefCell<Vec<RestoreRequest>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
    pub ports: RefCell<Result<Vec<PortInfo>, ApiError>>,
    pub chip_info: RefCell<Result<Option<ChipInfo>, ApiError>>,
    pub backup: RefCell<Result<BackupReport, ApiError>>,
    pub restore: RefCell<Result<(), ApiError>>,
    pub erase: RefCell<Result<(), ApiError>>,
}

impl Default for SpyDeviceApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            restores: RefCell::new(Vec::new()),
            gate: RefCell::new(None),
            ports: RefCell::new(Ok(Vec::new())),
            chip_info: RefCell::new(Ok(Some(ChipInfo::default()))),
            backup: RefCell::new(Ok(BackupReport {
                file_size: 4_194_304,
                file_path: "tmp/esp32_flash.bin".to_string(),
            })),
            restore: RefCell::new(Ok(())),
            erase: RefCell::new(Ok(())),
        }
    }
}

impl SpyDeviceApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold the next call open until the returned sender fires.
    pub fn gate_next_call(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn calls(&self) -> Vec<OperationKind> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self, kind: OperationKind) -> usize {
        self.calls.borrow().iter().filter(|k| **k == kind).count()
    }

    pub fn restores(&self) -> Vec<RestoreRequest> {
        self.restores.borrow().clone()
    }

    async fn record(&self, kind: OperationKind) {
        self.calls.borrow_mut().push(kind);
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }
}

impl DeviceApi for SpyDeviceApi {
    async fn list_ports(&self) -> Result<Vec<PortInfo>, ApiError> {
        self.record(OperationKind::ListPorts).await;
        self.ports.borrow().clone()
    }

    async fn chip_info(&self, _port: &str, _baud_rate: u32) -> Result<Option<ChipInfo>, ApiError> {
        self.record(OperationKind::GetChipInfo).await;
        self.chip_info.borrow().clone()
    }

    async fn backup(&self, _port: &str, _baud_rate: u32) -> Result<BackupReport, ApiError> {
        self.record(OperationKind::Backup).await;
        self.backup.borrow().clone()
    }

    async fn restore(&self, request: RestoreRequest) -> Result<(), ApiError> {
        self.restores.borrow_mut().push(request);
        self.record(OperationKind::Restore).await;
        self.restore.borrow().clone()
    }

    async fn erase(&self, _port: &str, _baud_rate: u32) -> Result<(), ApiError> {
        self.record(OperationKind::Erase).await;
        self.erase.borrow().clone()
    }

    fn download_url(&self, file_path: &str) -> String {
        format!("/api/esp32/download/{}", file_path)
    }
}

/// Presenter that keeps the view model in memory and answers confirms with a
/// preset value.
#[derive(Default)]
pub struct RecordingPresenter {
    state: RefCell<ViewState>,
    confirm_answer: Cell<bool>,
    confirm_gate: RefCell<Option<oneshot::Receiver<bool>>>,
    confirm_requests: RefCell<Vec<ConfirmRequest>>,
    trigger_history: RefCell<Vec<(OperationKind, bool)>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer_confirm(&self, answer: bool) {
        self.confirm_answer.set(answer);
    }

    /// Keep the next confirm open until the returned sender answers it.
    pub fn hold_next_confirm(&self) -> oneshot::Sender<bool> {
        let (tx, rx) = oneshot::channel();
        *self.confirm_gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn view(&self) -> Ref<'_, ViewState> {
        self.state.borrow()
    }

    pub fn confirm_requests(&self) -> Vec<ConfirmRequest> {
        self.confirm_requests.borrow().clone()
    }

    pub fn trigger_history(&self) -> Vec<(OperationKind, bool)> {
        self.trigger_history.borrow().clone()
    }

    pub fn severities(&self) -> Vec<Severity> {
        self.state.borrow().log.iter().map(|e| e.severity).collect()
    }

    pub fn last_log(&self) -> Option<LogEntry> {
        self.state.borrow().log.last().cloned()
    }
}

impl Presenter for RecordingPresenter {
    fn render_port_list(&self, ports: &[PortInfo]) {
        self.state.borrow_mut().set_ports(ports);
    }

    fn render_chip_info(&self, view: ChipInfoView) {
        self.state.borrow_mut().chip_info = Some(view);
    }

    fn render_result(&self, slot: ResultSlot, view: ResultView) {
        self.state.borrow_mut().set_result(slot, view);
    }

    fn hide_result(&self, slot: ResultSlot) {
        self.state.borrow_mut().hide_result(slot);
    }

    fn render_progress(&self, slot: ResultSlot, label: Option<&str>) {
        self.state.borrow_mut().set_progress(slot, label);
    }

    fn append_log(&self, entry: LogEntry) {
        self.state.borrow_mut().log.push(entry);
    }

    fn clear_log(&self) {
        self.state.borrow_mut().log.clear();
    }

    async fn confirm(&self, request: ConfirmRequest) -> bool {
        self.confirm_requests.borrow_mut().push(request);
        let gate = self.confirm_gate.borrow_mut().take();
        match gate {
            Some(gate) => gate.await.unwrap_or(false),
            None => self.confirm_answer.get(),
        }
    }

    fn set_trigger(&self, kind: OperationKind, enabled: bool, label: Option<&str>) {
        self.trigger_history.borrow_mut().push((kind, enabled));
        self.state.borrow_mut().set_trigger(kind, enabled, label);
    }
}
