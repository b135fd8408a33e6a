pub mod buttons;
pub mod cards;
pub mod chip_info_table;
pub mod confirm_dialog;
pub mod layout;
pub mod log_feed;
pub mod port_select;
pub mod progress;
pub mod result_panel;
pub mod sidebar;

pub use buttons::Button;
pub use cards::Card;
pub use chip_info_table::ChipInfoTable;
pub use confirm_dialog::ConfirmDialog;
pub use layout::Layout;
pub use log_feed::LogFeed;
pub use port_select::PortSelect;
pub use progress::ProgressBar;
pub use result_panel::ResultPanel;
pub use sidebar::Sidebar;
