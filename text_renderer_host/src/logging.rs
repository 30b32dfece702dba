//! Log filter for host binaries

use tracing_subscriber::EnvFilter;

/// Directives used when none are supplied or they fail to parse
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Build the log filter from `RUST_LOG`-style directives
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_default_is_warn() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_directives_raise_level() {
        assert_eq!(
            log_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            log_filter(Some("services_calculator=trace")).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }

    #[test]
    fn test_bad_directives_fall_back() {
        assert_eq!(
            log_filter(Some("calc=loud")).max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }
}
