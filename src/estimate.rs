//! Backup duration and size formatting.

/// Flash size assumed for the estimate; 4 MiB is the common ESP32 module size.
pub const ASSUMED_FLASH_BYTES: f64 = 4.0 * 1024.0 * 1024.0;

/// UART framing: start bit, eight data bits, stop bit.
pub const BITS_PER_BYTE: f64 = 10.0;

/// Expected time to read the whole flash at `baud_rate`, formatted as
/// `"M分 S秒"` (or `"S秒"` under a minute). Anything that is not a positive,
/// finite rate yields `"N/A"`.
pub fn estimate_backup_duration(baud_rate: f64) -> String {
    if !baud_rate.is_finite() || baud_rate <= 0.0 {
        return "N/A".to_string();
    }

    let estimated_seconds = ASSUMED_FLASH_BYTES * BITS_PER_BYTE / baud_rate;
    if !estimated_seconds.is_finite() {
        return "N/A".to_string();
    }

    // Round once so the seconds part never shows 60.
    let total = estimated_seconds.round() as u64;
    let minutes = total / 60;
    let seconds = total % 60;

    if minutes > 0 {
        format!("{}分 {}秒", minutes, seconds)
    } else {
        format!("{}秒", seconds)
    }
}

/// Same as [`estimate_backup_duration`] for a raw form value such as the baud
/// select's string.
pub fn estimate_from_input(raw: &str) -> String {
    estimate_backup_duration(raw.trim().parse::<f64>().unwrap_or(f64::NAN))
}

/// Byte count as megabytes with two decimals, e.g. `"4.00 MB"`.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_rates_are_not_estimated() {
        assert_eq!(estimate_backup_duration(0.0), "N/A");
        assert_eq!(estimate_backup_duration(-1.0), "N/A");
        assert_eq!(estimate_backup_duration(f64::NAN), "N/A");
        assert_eq!(estimate_backup_duration(f64::INFINITY), "N/A");
    }

    #[test]
    fn default_rate_takes_about_six_minutes() {
        assert_eq!(estimate_backup_duration(115200.0), "6分 4秒");
    }

    #[test]
    fn other_common_rates() {
        assert_eq!(estimate_backup_duration(9600.0), "72分 49秒");
        assert_eq!(estimate_backup_duration(460800.0), "1分 31秒");
        assert_eq!(estimate_backup_duration(921600.0), "46秒");
    }

    #[test]
    fn rounding_never_yields_sixty_seconds() {
        // 41943040 / 350_000 = 119.84s
        assert_eq!(estimate_backup_duration(350_000.0), "2分 0秒");
    }

    #[test]
    fn input_strings_are_parsed() {
        assert_eq!(estimate_from_input("115200"), "6分 4秒");
        assert_eq!(estimate_from_input(""), "N/A");
        assert_eq!(estimate_from_input("fast"), "N/A");
    }

    #[test]
    fn megabytes_have_two_decimals() {
        assert_eq!(format_megabytes(4_194_304), "4.00 MB");
        assert_eq!(format_megabytes(1_572_864), "1.50 MB");
        assert_eq!(format_megabytes(0), "0.00 MB");
    }
}
