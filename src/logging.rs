/**
 * Set up the logger, `RUST_LOG` overrides the default `warn` filter
 */
pub fn init(){
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    )
    .format_timestamp(None)
    .try_init();
}
