#[cfg(test)]
mod tests {
    use awaker::libs::formatter::{format_duration, format_run_length, parse_duration};
    use std::time::Duration;

    #[test]
    fn test_parse_bare_seconds() {
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("5").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_duration(" 12 ").unwrap(), Duration::from_secs(12));
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_duration("3s").unwrap(), Duration::from_secs(3));
        assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("2h").unwrap(), Duration::from_secs(7_200));
        assert_eq!(parse_duration("1m30s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::from_secs(5_400));
        assert_eq!(parse_duration("250us").unwrap(), Duration::from_micros(250));
        assert_eq!(parse_duration("10ns").unwrap(), Duration::from_nanos(10));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "   ", "s", "10x", "abc", "1m30", "-5s", "1..5s"] {
            assert!(parse_duration(input).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&Duration::ZERO), "0s");
        assert_eq!(format_duration(&Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(&Duration::from_secs(45)), "45s");
        assert_eq!(format_duration(&Duration::from_secs(65)), "1m5s");
        assert_eq!(format_duration(&Duration::from_secs(3_725)), "1h2m5s");
        assert_eq!(format_duration(&Duration::from_secs(7_200)), "2h0m0s");
    }

    #[test]
    fn test_format_truncates_to_seconds() {
        assert_eq!(format_duration(&Duration::from_millis(1_999)), "1s");
        assert_eq!(format_duration(&Duration::from_millis(60_500)), "1m0s");
    }

    #[test]
    fn test_format_run_length() {
        assert_eq!(format_run_length(None), "unbounded");
        assert_eq!(format_run_length(Some(Duration::from_secs(1_800))), "30m0s");
    }
}
