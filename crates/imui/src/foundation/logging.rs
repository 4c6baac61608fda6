//! Logging utilities and structured logging support

/// Initialize the logging system
pub fn init() {
    env_logger::init();
}

/// Initialize logging with a default filter (e.g. `"info"`, `"imui=debug"`).
///
/// `RUST_LOG` still takes precedence when set. Safe to call more than once;
/// later calls are ignored.
pub fn init_with_level(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized, keeping existing configuration");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_with_level_twice_is_harmless() {
        init_with_level("warn");
        init_with_level("trace");
        log::debug!("still logging after a second init");
    }
}
