//! Diagnostic logging to stderr.
//!
//! The report goes to stdout; log records never mix into it.

use log::LevelFilter;

/// Map `-v` repetitions to a level filter. `RUST_LOG` still wins.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use super::level_for;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(3), LevelFilter::Trace);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }
}
