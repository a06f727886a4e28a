//! Shared logging utilities for consistent tracing across components

use chrono::{DateTime, Utc};
use tracing::info;

use crate::types::ComponentId;

/// Filter directives for a component at the given base level
pub fn filter_directives(component: ComponentId, log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    let target = component.log_target();

    match component {
        ComponentId::AbClient => format!("{target}={base_level},shared={base_level},reqwest=warn"),
    }
}

/// Initialize the stdout tracing subscriber for a component.
///
/// `RUST_LOG` wins over the component defaults when it is set. Calling this
/// more than once keeps the first subscriber.
pub fn init_tracing(component: ComponentId, log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(component, log_level)));

    let installed = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .is_ok();

    if installed {
        info!(component = %component, timestamp = format_timestamp(), "Tracing initialized");
    }
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_display() {
        assert_eq!(ComponentId::AbClient.to_string(), "ab-client");
        assert_eq!(ComponentId::AbClient.log_target(), "abtesting");
    }

    #[test]
    fn test_filter_directives() {
        assert_eq!(
            filter_directives(ComponentId::AbClient, None),
            "abtesting=info,shared=info,reqwest=warn"
        );
        assert_eq!(
            filter_directives(ComponentId::AbClient, Some("debug")),
            "abtesting=debug,shared=debug,reqwest=warn"
        );
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing(ComponentId::AbClient, Some("debug"));
        init_tracing(ComponentId::AbClient, None);
    }

    #[test]
    fn test_format_timestamp_shape() {
        let stamp = format_timestamp();
        assert_eq!(stamp.len(), "12:34:56.789".len());
        assert_eq!(stamp.matches(':').count(), 2);
    }
}
