use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};
use futures::channel::oneshot;

use crate::api::http::HttpDeviceApi;
use crate::api::{PortInfo, RestoreFile};
use crate::components::{
    Button, Card, ChipInfoTable, ConfirmDialog, LogFeed, PortSelect, ProgressBar, ResultPanel,
};
use crate::config::AppConfig;
use crate::controller::OperationController;
use crate::estimate::estimate_from_input;
use crate::i18n::{get_dict, Language};
use crate::operation::OperationKind;
use crate::presenter::{
    ChipInfoView, ConfirmRequest, LogEntry, Presenter, ResultSlot, ResultView, ViewState,
};

/// [`Presenter`] that writes into signals the page renders from.
#[derive(Clone, Copy)]
pub struct SignalPresenter {
    view: Signal<ViewState>,
    pending_confirm: Signal<Option<oneshot::Sender<bool>>>,
}

impl SignalPresenter {
    /// Resolve the open confirm dialog, if any.
    pub fn answer_confirm(&self, answer: bool) {
        let mut pending = self.pending_confirm;
        let mut view = self.view;
        view.write().confirm = None;
        let tx = pending.write().take();
        if let Some(tx) = tx {
            let _ = tx.send(answer);
        }
    }
}

impl Presenter for SignalPresenter {
    fn render_port_list(&self, ports: &[PortInfo]) {
        let mut view = self.view;
        view.write().set_ports(ports);
    }

    fn render_chip_info(&self, chip_info: ChipInfoView) {
        let mut view = self.view;
        view.write().chip_info = Some(chip_info);
    }

    fn render_result(&self, slot: ResultSlot, result: ResultView) {
        let mut view = self.view;
        view.write().set_result(slot, result);
    }

    fn hide_result(&self, slot: ResultSlot) {
        let mut view = self.view;
        view.write().hide_result(slot);
    }

    fn render_progress(&self, slot: ResultSlot, label: Option<&str>) {
        let mut view = self.view;
        view.write().set_progress(slot, label);
    }

    fn append_log(&self, entry: LogEntry) {
        let mut view = self.view;
        view.write().log.push(entry);
    }

    fn clear_log(&self) {
        let mut view = self.view;
        view.write().log.clear();
    }

    async fn confirm(&self, request: ConfirmRequest) -> bool {
        let (tx, rx) = oneshot::channel();
        let mut pending = self.pending_confirm;
        // A dialog left open by an earlier request counts as cancelled.
        if let Some(stale) = pending.write().replace(tx) {
            let _ = stale.send(false);
        }
        let mut view = self.view;
        view.write().confirm = Some(request);
        rx.await.unwrap_or(false)
    }

    fn set_trigger(&self, kind: OperationKind, enabled: bool, label: Option<&str>) {
        let mut view = self.view;
        view.write().set_trigger(kind, enabled, label);
    }
}

type PageController = OperationController<HttpDeviceApi, SignalPresenter>;

#[component]
pub fn FlashTool() -> Element {
    let lang = use_context::<Signal<Language>>();
    let dict = get_dict(*lang.read());
    let config = use_hook(AppConfig::from_window);

    let view = use_signal(ViewState::default);
    let pending_confirm = use_signal(|| None::<oneshot::Sender<bool>>);
    let presenter = SignalPresenter {
        view,
        pending_confirm,
    };
    let controller: Rc<PageController> = use_hook(|| {
        Rc::new(OperationController::new(
            HttpDeviceApi::new(config.clone()),
            presenter,
            *lang.peek(),
        ))
    });
    controller.set_language(*lang.read());

    let mut selected_port = use_signal(String::new);
    let mut baud_rate = use_signal(|| config.default_baud_rate.to_string());
    let mut restore_file = use_signal(|| None::<RestoreFile>);
    let mut restore_address = use_signal(|| config.default_restore_address.clone());

    // Load ports once on mount
    let startup = controller.clone();
    use_hook(move || {
        spawn(async move {
            startup.start().await;
        });
    });

    // Drop a selection that disappeared from the refreshed list
    use_effect(move || {
        let state = view.read();
        let current = selected_port.peek().clone();
        if !current.is_empty() && !state.ports.iter().any(|p| p.value == current) {
            info!("Selected port {} is no longer available", current);
            selected_port.set(String::new());
        }
    });

    let default_baud = config.default_baud_rate;
    let read_baud = move || {
        baud_rate
            .read()
            .trim()
            .parse::<u32>()
            .unwrap_or(default_baud)
    };

    let state = view.read();
    let estimate = estimate_from_input(&baud_rate.read());
    let chip_label = state.trigger_label(OperationKind::GetChipInfo, dict.chip_info_idle);
    let backup_label = state.trigger_label(OperationKind::Backup, dict.backup_idle);
    let restore_label = state.trigger_label(OperationKind::Restore, dict.restore_idle);
    let erase_label = state.trigger_label(OperationKind::Erase, dict.erase_idle);

    let on_refresh = {
        let c = controller.clone();
        move |_| {
            let c = c.clone();
            spawn(async move {
                let _ = c.list_ports().await;
            });
        }
    };

    let on_chip_info = {
        let c = controller.clone();
        move |_| {
            let c = c.clone();
            let port = selected_port.read().clone();
            let baud = read_baud();
            spawn(async move {
                let _ = c.fetch_chip_info(&port, baud).await;
            });
        }
    };

    let on_backup = {
        let c = controller.clone();
        move |_| {
            let c = c.clone();
            let port = selected_port.read().clone();
            let baud = read_baud();
            spawn(async move {
                let _ = c.backup(&port, baud).await;
            });
        }
    };

    let on_restore = {
        let c = controller.clone();
        move |_| {
            let c = c.clone();
            let port = selected_port.read().clone();
            let baud = read_baud();
            let file = restore_file.read().clone();
            let address = restore_address.read().clone();
            spawn(async move {
                let _ = c.restore(&port, baud, file, &address).await;
            });
        }
    };

    let on_erase = {
        let c = controller.clone();
        move |_| {
            let c = c.clone();
            let port = selected_port.read().clone();
            let baud = read_baud();
            spawn(async move {
                let _ = c.erase(&port, baud).await;
            });
        }
    };

    let on_clear_log = {
        let c = controller.clone();
        move |_| c.clear_log()
    };

    let on_file = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            restore_file.set(None);
            return;
        };
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => {
                info!("Loaded restore image {} ({} bytes)", name, bytes.len());
                restore_file.set(Some(RestoreFile {
                    name,
                    bytes: bytes.to_vec(),
                }));
            }
            Err(e) => {
                warn!("Could not read {}: {}", name, e);
                restore_file.set(None);
            }
        }
    };

    rsx! {
        div {
            class: "flash-tool-container",
            style: "display: flex; flex-wrap: wrap; gap: 24px; align-items: flex-start; padding-bottom: 24px;",

            // Left column: connection and operations
            div { style: "flex: 1; min-width: 320px; display: flex; flex-direction: column; gap: 24px;",
                Card {
                    title: dict.connection_title.to_string(),
                    subtitle: dict.connection_subtitle.to_string(),
                    icon: "usb".to_string(),

                    div { class: "form-stack",
                        PortSelect {
                            ports: state.ports.clone(),
                            selected: selected_port.read().clone(),
                            label: dict.port_label.to_string(),
                            placeholder: dict.port_placeholder.to_string(),
                            refresh_label: dict.refresh_ports.to_string(),
                            refreshing: !state.trigger_enabled(OperationKind::ListPorts),
                            on_select: move |port| selected_port.set(port),
                            on_refresh: on_refresh,
                        }

                        div { class: "form-field",
                            label { r#for: "baud-rate", class: "form-label", "{dict.baud_rate_label}" }
                            select {
                                class: "md-select",
                                id: "baud-rate",
                                value: "{baud_rate}",
                                onchange: move |evt| baud_rate.set(evt.value()),
                                for rate in config.baud_rates.iter() {
                                    option {
                                        key: "{rate}",
                                        value: "{rate}",
                                        selected: baud_rate.read().as_str() == rate.to_string(),
                                        "{rate}"
                                    }
                                }
                            }
                            span { class: "form-hint", "{dict.estimated_time_label}: {estimate}" }
                        }
                    }
                }

                Card {
                    title: dict.chip_info_title.to_string(),
                    icon: "developer_board".to_string(),

                    if let Some(chip) = state.chip_info.clone() {
                        ChipInfoTable {
                            view: chip,
                            show_label: dict.show_raw_output.to_string(),
                            hide_label: dict.hide_raw_output.to_string(),
                            empty_label: dict.no_raw_output.to_string(),
                        }
                    }
                    div { class: "md-card-actions",
                        Button {
                            variant: "tonal".to_string(),
                            icon: "info".to_string(),
                            disabled: !state.trigger_enabled(OperationKind::GetChipInfo),
                            onclick: on_chip_info,
                            "{chip_label}"
                        }
                    }
                }

                Card {
                    title: dict.backup_title.to_string(),
                    subtitle: dict.backup_subtitle.to_string(),
                    icon: "save".to_string(),

                    ProgressBar { label: state.progress(ResultSlot::Backup).map(str::to_string) }
                    ResultPanel { view: state.result(ResultSlot::Backup).cloned() }
                    div { class: "md-card-actions",
                        Button {
                            icon: "download".to_string(),
                            disabled: !state.trigger_enabled(OperationKind::Backup),
                            onclick: on_backup,
                            "{backup_label}"
                        }
                    }
                }

                Card {
                    title: dict.restore_title.to_string(),
                    subtitle: dict.restore_subtitle.to_string(),
                    icon: "upload".to_string(),

                    div { class: "form-stack",
                        div { class: "form-field",
                            label { r#for: "restore-file", class: "form-label", "{dict.restore_file_label}" }
                            input {
                                r#type: "file",
                                id: "restore-file",
                                accept: ".bin",
                                class: "md-input",
                                onchange: on_file,
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "restore-address", class: "form-label", "{dict.restore_address_label}" }
                            input {
                                r#type: "text",
                                id: "restore-address",
                                class: "md-input",
                                value: "{restore_address}",
                                placeholder: "0x0",
                                oninput: move |evt| restore_address.set(evt.value()),
                            }
                        }
                    }
                    ProgressBar { label: state.progress(ResultSlot::Restore).map(str::to_string) }
                    ResultPanel { view: state.result(ResultSlot::Restore).cloned() }
                    div { class: "md-card-actions",
                        Button {
                            icon: "upload".to_string(),
                            disabled: !state.trigger_enabled(OperationKind::Restore),
                            onclick: on_restore,
                            "{restore_label}"
                        }
                    }
                }

                Card {
                    title: dict.erase_title.to_string(),
                    subtitle: dict.erase_subtitle.to_string(),
                    icon: "delete_forever".to_string(),
                    danger: true,

                    ProgressBar { label: state.progress(ResultSlot::Erase).map(str::to_string) }
                    ResultPanel { view: state.result(ResultSlot::Erase).cloned() }
                    div { class: "md-card-actions",
                        Button {
                            variant: "danger".to_string(),
                            icon: "delete_forever".to_string(),
                            disabled: !state.trigger_enabled(OperationKind::Erase),
                            onclick: on_erase,
                            "{erase_label}"
                        }
                    }
                }
            }

            // Right column: log
            div { style: "flex: 1; min-width: 320px;",
                Card {
                    title: dict.log_title.to_string(),
                    icon: "terminal".to_string(),

                    LogFeed {
                        entries: state.log.clone(),
                        placeholder: dict.log_placeholder.to_string(),
                        clear_label: dict.clear_log.to_string(),
                        on_clear: on_clear_log,
                    }
                }
            }

            ConfirmDialog {
                request: state.confirm.clone(),
                on_answer: move |answer| presenter.answer_confirm(answer),
            }
        }
    }
}
