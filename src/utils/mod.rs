pub mod build_info;

use std::sync::Once;

use tracing_subscriber::filter::Directive;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "school_admin=info";

/// Initializes the global tracing subscriber. `filter` overrides the default
/// `school_admin=info` directive; `RUST_LOG` still takes precedence for
/// everything else.
pub fn init_tracing(filter: Option<&str>) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let directive = filter
            .and_then(|raw| raw.parse::<Directive>().ok())
            .or_else(|| DEFAULT_DIRECTIVE.parse::<Directive>().ok());
        let mut env_filter = EnvFilter::from_default_env();
        if let Some(directive) = directive {
            env_filter = env_filter.add_directive(directive);
        }

        // Another subscriber may already be installed by the embedding binary or a test harness.
        let _ = fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
