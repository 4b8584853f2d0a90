use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

/// Workspace crates whose events reach the log; everything else stays at `warn`.
const CRATE_TARGETS: &[&str] = &["tell", "tell_analysis", "tell_chain"];

/// Maps the `-v` count to a level: none -> warn, -v -> info, -vv -> debug,
/// -vvv and beyond -> trace.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter directives: dependencies at `warn`, workspace crates at `level`.
fn directives(verbosity: u8) -> String {
    let level = level_for(verbosity);
    std::iter::once("warn".to_string())
        .chain(CRATE_TARGETS.iter().map(|t| format!("{t}={level}")))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing on stderr so the report on stdout stays pipeable.
///
/// `RUST_LOG` overrides the verbosity flag if set. From `-vv` on, span
/// close events are logged too, which times the analyze run.
pub fn init(verbosity: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(verbosity)));
    let span_events = if verbosity >= 2 {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_span_events(span_events)
        .with_target(verbosity >= 2)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn directives_cover_workspace() {
        assert_eq!(
            directives(1),
            "warn,tell=info,tell_analysis=info,tell_chain=info"
        );
    }

    #[test]
    fn directives_parse() {
        for v in 0..4 {
            assert!(directives(v).parse::<EnvFilter>().is_ok());
        }
    }
}
