use tracing::Level;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Installs the global tracing subscriber. RUST_LOG still wins over the
/// defaults; the debug flag only raises this crate's own floor.
pub fn init_logging(debug_logging: bool) {
    let crate_directive = if debug_logging {
        "nedopv=debug"
    } else {
        "nedopv=info"
    };
    let env_filter = EnvFilter::from_default_env()
        .add_directive(Level::WARN.into())
        .add_directive(crate_directive.parse().expect("static directive parses"));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer());

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set up tracing subscriber");
}
