use tracing_subscriber::EnvFilter;

use crate::constants::LOG_DIRECTIVES;

/// Initialize the logging system
///
/// Output goes to stderr so the registrar's failures land there as well.
pub fn initialize_logging() {
    let filter = LOG_DIRECTIVES
        .iter()
        .fold(EnvFilter::from_default_env(), |filter, directive| {
            filter.add_directive(directive.parse().expect("valid log directive"))
        });

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
