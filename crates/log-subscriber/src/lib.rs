//! Subscriber setup for programs and tests that want to see `triversion`
//! diagnostics. Only the first call installs a global subscriber.

use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber filtered by `env` instead of `RUST_LOG`.
pub fn init_env_override(env: &str) {
  let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::new(env));

  #[cfg(debug_assertions)]
  let _ = builder.with_test_writer().try_init();

  #[cfg(not(debug_assertions))]
  let _ = builder.with_ansi(false).try_init();
}
