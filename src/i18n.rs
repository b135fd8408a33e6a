#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Language {
    En,
    Ja,
}

pub struct Dict {
    pub flash_tool_nav: &'static str,
    pub app_title: &'static str,
    pub app_subtitle: &'static str,

    // Connection card
    pub connection_title: &'static str,
    pub connection_subtitle: &'static str,
    pub port_label: &'static str,
    pub port_placeholder: &'static str,
    pub refresh_ports: &'static str,
    pub baud_rate_label: &'static str,
    pub estimated_time_label: &'static str,

    // Chip info
    pub chip_info_title: &'static str,
    pub chip_info_idle: &'static str,
    pub chip_info_busy: &'static str,
    pub show_raw_output: &'static str,
    pub hide_raw_output: &'static str,
    pub no_raw_output: &'static str,

    // Backup
    pub backup_title: &'static str,
    pub backup_subtitle: &'static str,
    pub backup_idle: &'static str,
    pub backup_busy: &'static str,
    pub backup_progress: &'static str,
    pub backup_done: &'static str,
    pub file_size_label: &'static str,
    pub download: &'static str,

    // Restore
    pub restore_title: &'static str,
    pub restore_subtitle: &'static str,
    pub restore_file_label: &'static str,
    pub restore_address_label: &'static str,
    pub restore_idle: &'static str,
    pub restore_busy: &'static str,
    pub restore_progress: &'static str,
    pub restore_done: &'static str,

    // Erase
    pub erase_title: &'static str,
    pub erase_subtitle: &'static str,
    pub erase_idle: &'static str,
    pub erase_busy: &'static str,
    pub erase_progress: &'static str,
    pub erase_done: &'static str,
    pub erase_confirm_title: &'static str,
    pub erase_confirm_message: &'static str,
    pub cancel: &'static str,
    pub confirm: &'static str,

    // Log feed
    pub log_title: &'static str,
    pub clear_log: &'static str,
    pub log_placeholder: &'static str,
    pub error_prefix: &'static str,

    // Log messages
    pub searching_ports: &'static str,
    pub ports_found: fn(usize) -> String,
    pub no_ports: &'static str,
    pub ports_failed: &'static str,
    pub select_port: &'static str,
    pub select_restore_file: &'static str,
    pub operation_busy: &'static str,
    pub api_error: fn(&str) -> String,
    pub chip_info_loading: fn(&str) -> String,
    pub chip_info_loaded: &'static str,
    pub chip_info_failed: fn(&str) -> String,
    pub chip_info_exception: &'static str,
    pub backup_started: fn(&str) -> String,
    pub backup_completed: fn(&str) -> String,
    pub backup_failed: fn(&str) -> String,
    pub backup_exception: &'static str,
    pub restore_started: fn(&str, &str) -> String,
    pub restore_completed: &'static str,
    pub restore_failed: fn(&str) -> String,
    pub restore_exception: &'static str,
    pub erase_started: fn(&str) -> String,
    pub erase_completed: &'static str,
    pub erase_failed: fn(&str) -> String,
    pub erase_exception: &'static str,
    pub log_cleared: &'static str,
    pub app_started: &'static str,
}

fn en_ports_found(count: usize) -> String {
    format!("Found {} port(s)", count)
}
fn en_api_error(message: &str) -> String {
    format!("API call error: {}", message)
}
fn en_chip_info_loading(port: &str) -> String {
    format!("Reading chip info... (port: {})", port)
}
fn en_chip_info_failed(error: &str) -> String {
    format!("Failed to read chip info: {}", error)
}
fn en_backup_started(port: &str) -> String {
    format!("Starting flash backup (port: {})", port)
}
fn en_backup_completed(size: &str) -> String {
    format!("Backup completed ({})", size)
}
fn en_backup_failed(error: &str) -> String {
    format!("Backup failed: {}", error)
}
fn en_restore_started(port: &str, file: &str) -> String {
    format!("Starting flash restore (port: {}, file: {})", port, file)
}
fn en_restore_failed(error: &str) -> String {
    format!("Restore failed: {}", error)
}
fn en_erase_started(port: &str) -> String {
    format!("Starting flash erase (port: {})", port)
}
fn en_erase_failed(error: &str) -> String {
    format!("Flash erase failed: {}", error)
}

fn ja_ports_found(count: usize) -> String {
    format!("{}個のポートが見つかりました", count)
}
fn ja_api_error(message: &str) -> String {
    format!("API呼び出しエラー: {}", message)
}
fn ja_chip_info_loading(port: &str) -> String {
    format!("チップ情報を取得中... (ポート: {})", port)
}
fn ja_chip_info_failed(error: &str) -> String {
    format!("チップ情報の取得に失敗しました: {}", error)
}
fn ja_backup_started(port: &str) -> String {
    format!("フラッシュバックアップを開始 (ポート: {})", port)
}
fn ja_backup_completed(size: &str) -> String {
    format!("バックアップが完了しました ({})", size)
}
fn ja_backup_failed(error: &str) -> String {
    format!("バックアップに失敗しました: {}", error)
}
fn ja_restore_started(port: &str, file: &str) -> String {
    format!("フラッシュリストアを開始 (ポート: {}, ファイル: {})", port, file)
}
fn ja_restore_failed(error: &str) -> String {
    format!("リストアに失敗しました: {}", error)
}
fn ja_erase_started(port: &str) -> String {
    format!("フラッシュ消去を開始 (ポート: {})", port)
}
fn ja_erase_failed(error: &str) -> String {
    format!("フラッシュの消去に失敗しました: {}", error)
}

pub const EN_DICT: Dict = Dict {
    flash_tool_nav: "Flash",
    app_title: "ESP32 Flash Tool",
    app_subtitle: "Back up, restore and erase ESP32 flash",

    connection_title: "Connection",
    connection_subtitle: "Serial port and speed",
    port_label: "Serial Port",
    port_placeholder: "Select a port",
    refresh_ports: "Refresh",
    baud_rate_label: "Baud Rate",
    estimated_time_label: "Estimated backup time",

    chip_info_title: "Chip Info",
    chip_info_idle: "Get Chip Info",
    chip_info_busy: "Reading chip info...",
    show_raw_output: "Show Raw Output",
    hide_raw_output: "Hide Raw Output",
    no_raw_output: "No raw output available.",

    backup_title: "Backup",
    backup_subtitle: "Read the whole flash into a file",
    backup_idle: "Start Backup",
    backup_busy: "Backing up...",
    backup_progress: "Backing up flash...",
    backup_done: "Backup completed!",
    file_size_label: "File size",
    download: "Download",

    restore_title: "Restore",
    restore_subtitle: "Write an image back to flash",
    restore_file_label: "Image File",
    restore_address_label: "Address",
    restore_idle: "Start Restore",
    restore_busy: "Restoring...",
    restore_progress: "Restoring flash...",
    restore_done: "Restore completed!",

    erase_title: "Erase",
    erase_subtitle: "Wipe the entire flash",
    erase_idle: "Erase Flash",
    erase_busy: "Erasing...",
    erase_progress: "Erasing flash...",
    erase_done: "Flash erased!",
    erase_confirm_title: "Confirm Flash Erase",
    erase_confirm_message:
        "The entire ESP32 flash memory will be erased. This cannot be undone. Continue?",
    cancel: "Cancel",
    confirm: "Erase",

    log_title: "Log",
    clear_log: "Clear Log",
    log_placeholder: "No log entries yet...",
    error_prefix: "Error:",

    searching_ports: "Searching for serial ports...",
    ports_found: en_ports_found,
    no_ports: "No serial ports available",
    ports_failed: "Failed to list ports",
    select_port: "Please select a port",
    select_restore_file: "Please select an image file to restore",
    operation_busy: "Another device operation is still running",
    api_error: en_api_error,
    chip_info_loading: en_chip_info_loading,
    chip_info_loaded: "Chip info received",
    chip_info_failed: en_chip_info_failed,
    chip_info_exception: "An error occurred while reading chip info",
    backup_started: en_backup_started,
    backup_completed: en_backup_completed,
    backup_failed: en_backup_failed,
    backup_exception: "An error occurred during backup",
    restore_started: en_restore_started,
    restore_completed: "Restore completed",
    restore_failed: en_restore_failed,
    restore_exception: "An error occurred during restore",
    erase_started: en_erase_started,
    erase_completed: "Flash erase completed",
    erase_failed: en_erase_failed,
    erase_exception: "An error occurred during flash erase",
    log_cleared: "Log cleared",
    app_started: "ESP32 Flash Tool started",
};

pub const JA_DICT: Dict = Dict {
    flash_tool_nav: "フラッシュ",
    app_title: "ESP32 Flash Tool",
    app_subtitle: "ESP32フラッシュのバックアップ・リストア・消去",

    connection_title: "接続",
    connection_subtitle: "シリアルポートと通信速度",
    port_label: "シリアルポート",
    port_placeholder: "ポートを選択してください",
    refresh_ports: "更新",
    baud_rate_label: "ボーレート",
    estimated_time_label: "予想バックアップ時間",

    chip_info_title: "チップ情報",
    chip_info_idle: "チップ情報を取得",
    chip_info_busy: "チップ情報取得中...",
    show_raw_output: "Show Raw Output",
    hide_raw_output: "Hide Raw Output",
    no_raw_output: "No raw output available.",

    backup_title: "バックアップ",
    backup_subtitle: "フラッシュ全体をファイルに読み出します",
    backup_idle: "バックアップ開始",
    backup_busy: "バックアップ中...",
    backup_progress: "フラッシュをバックアップ中...",
    backup_done: "バックアップが完了しました！",
    file_size_label: "ファイルサイズ",
    download: "ダウンロード",

    restore_title: "リストア",
    restore_subtitle: "イメージをフラッシュに書き込みます",
    restore_file_label: "イメージファイル",
    restore_address_label: "アドレス",
    restore_idle: "リストア開始",
    restore_busy: "リストア中...",
    restore_progress: "フラッシュをリストア中...",
    restore_done: "リストアが完了しました！",

    erase_title: "消去",
    erase_subtitle: "フラッシュ全体を消去します",
    erase_idle: "フラッシュ消去",
    erase_busy: "消去中...",
    erase_progress: "フラッシュを消去中...",
    erase_done: "フラッシュの消去が完了しました！",
    erase_confirm_title: "フラッシュ消去の確認",
    erase_confirm_message:
        "ESP32のフラッシュメモリ全体が消去されます。この操作は元に戻せません。続行しますか？",
    cancel: "キャンセル",
    confirm: "消去する",

    log_title: "ログ",
    clear_log: "ログをクリア",
    log_placeholder: "ログはまだありません...",
    error_prefix: "エラー:",

    searching_ports: "シリアルポートを検索中...",
    ports_found: ja_ports_found,
    no_ports: "利用可能なポートが見つかりませんでした",
    ports_failed: "ポートの取得に失敗しました",
    select_port: "ポートを選択してください",
    select_restore_file: "リストアファイルを選択してください",
    operation_busy: "別のデバイス操作が実行中です",
    api_error: ja_api_error,
    chip_info_loading: ja_chip_info_loading,
    chip_info_loaded: "チップ情報の取得が完了しました",
    chip_info_failed: ja_chip_info_failed,
    chip_info_exception: "チップ情報の取得中にエラーが発生しました",
    backup_started: ja_backup_started,
    backup_completed: ja_backup_completed,
    backup_failed: ja_backup_failed,
    backup_exception: "バックアップ中にエラーが発生しました",
    restore_started: ja_restore_started,
    restore_completed: "リストアが完了しました",
    restore_failed: ja_restore_failed,
    restore_exception: "リストア中にエラーが発生しました",
    erase_started: ja_erase_started,
    erase_completed: "フラッシュの消去が完了しました",
    erase_failed: ja_erase_failed,
    erase_exception: "フラッシュ消去中にエラーが発生しました",
    log_cleared: "ログがクリアされました",
    app_started: "ESP32 Flash Toolが起動しました",
};

pub fn get_dict(lang: Language) -> Dict {
    match lang {
        Language::En => EN_DICT,
        Language::Ja => JA_DICT,
    }
}
