use tracing_subscriber::fmt;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

use crate::config::Settings;

use super::StartupError;

/// Installs the global subscriber: config-supplied default filter,
/// overridable through `RUST_LOG`, with an optional stdout layer.
pub fn init_tracing(settings: &Settings) -> Result<(), StartupError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log.filter.clone()));

    let subscriber = Registry::default().with(filter);

    if settings.log.stdout {
        let fmt_layer = fmt::layer()
            .with_level(true)
            .with_target(true)
            .compact();
        tracing::subscriber::set_global_default(subscriber.with(fmt_layer))?;
    } else {
        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}
