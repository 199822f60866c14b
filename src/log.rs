use ::log::LevelFilter;
use env_logger::Builder;
use std::io::Write;

/// Sets up `env_logger` for the given level. Every line is prefixed with `c`, so log output
/// mixed into a solution or instance stream is read as a comment. `RUST_LOG` may still
/// override the level. If a logger is already installed, the call has no effect.
pub fn build_logger_for_level(level: LevelFilter) {
    let _ = Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "c [{:>5} {:>8}ms] {}",
                record.level(),
                elapsed_ms(),
                record.args()
            )
        })
        .parse_default_env()
        .try_init();
}

/// Starts at `base` and increases the verbosity by one level per `verbosity`, as produced by
/// repeated `-v` flags.
pub fn build_logger_for_verbosity(base: LevelFilter, verbosity: usize) {
    build_logger_for_level(level_for_verbosity(base, verbosity));
}

fn level_for_verbosity(base: LevelFilter, verbosity: usize) -> LevelFilter {
    match base as usize + verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn elapsed_ms() -> u128 {
    use std::{sync::OnceLock, time::Instant};
    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_millis()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verbosity() {
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 17), LevelFilter::Trace);
        assert_eq!(level_for_verbosity(LevelFilter::Off, 0), LevelFilter::Off);
    }

    #[test]
    fn repeated_setup_is_harmless() {
        build_logger_for_level(LevelFilter::Info);
        build_logger_for_level(LevelFilter::Debug);
        ::log::info!("logger set up twice");
    }
}
