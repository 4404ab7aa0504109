use log::LevelFilter;

/// Initialize the logger with the specified level, then apply any `RUST_LOG`
/// overrides on top of it.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
