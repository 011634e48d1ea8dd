use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Environment variable holding the log filter (`info` when unset).
pub const LOG_ENV_VAR: &str = "TAGKEEPER_LOG";

const DEFAULT_FILTER: &str = "info";

/// Logs go to stderr; stdout carries the simulated display.
pub fn init() -> anyhow::Result<()> {
    let env_filter = filter_from(std::env::var(LOG_ENV_VAR).ok().as_deref())?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}

fn filter_from(directives: Option<&str>) -> anyhow::Result<EnvFilter> {
    let directives = directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(DEFAULT_FILTER);
    Ok(EnvFilter::try_new(directives)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_filter_defaults_to_info() {
        let filter = filter_from(None).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));

        let filter = filter_from(Some("  ")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_filter_accepts_directives() {
        let filter = filter_from(Some("tagkeeper_terminal=debug,warn")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_filter_rejects_unknown_level() {
        assert!(filter_from(Some("tagkeeper=verbose")).is_err());
    }
}
