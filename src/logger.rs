use env_logger::Env;

/// Initialize stderr logging, honoring `RUST_LOG` and defaulting to warnings.
pub fn setup_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}
