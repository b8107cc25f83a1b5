use log::LevelFilter;

/// Routes the crate's log output to stderr while running tests.
///
/// `RUST_LOG` overrides the default filter. Safe to call from every test.
pub(crate) fn init_logger() {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Trace)
        .is_test(true)
        .parse_default_env()
        .try_init()
        .ok();
}
