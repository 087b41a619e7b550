use sentry::ClientInitGuard;
use sentry_tracing::EventFilter;
use std::borrow::Cow;
use thiserror::Error;
use tracing_core::{Level, LevelFilter};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use typed_builder::TypedBuilder;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(TypedBuilder, Debug)]
pub struct TracingConfig {
    // Set by the binary, otherwise the sentry release names this crate
    pub package: &'static str,
    pub version: &'static str,
    #[builder(default)]
    pub sentry_dsn: Option<String>,
    #[builder(setter(into), default = String::from("dev"))]
    pub env: String,
    #[builder(default)]
    pub format: LogFormat,
    #[builder(default = LevelFilter::INFO)]
    pub default_level: LevelFilter,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    TracingInit(#[from] tracing_subscriber::util::TryInitError),
}

/// Keeps the sentry client alive. Pending events are flushed when it is dropped.
pub struct TracingGuard {
    _sentry: Option<ClientInitGuard>,
}

pub fn setup(config: TracingConfig) -> Result<TracingGuard, Error> {
    let guard = config.sentry_dsn.clone().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: Some(Cow::Owned(format!("{}@{}", config.package, config.version))),
                environment: Some(Cow::Owned(config.env.clone())),
                ..Default::default()
            },
        ))
    });

    let sentry_layer = guard.as_ref().map(|_| {
        sentry_tracing::layer().event_filter(|md| match *md.level() {
            Level::ERROR => EventFilter::Event,
            Level::TRACE => EventFilter::Ignore,
            _ => EventFilter::Breadcrumb,
        })
    });

    let (pretty, json) = match config.format {
        LogFormat::Pretty => (Some(tracing_subscriber::fmt::layer()), None),
        LogFormat::Json => (None, Some(tracing_subscriber::fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(pretty)
        .with(json)
        .with(
            EnvFilter::builder()
                .with_default_directive(config.default_level.into())
                .from_env_lossy(),
        )
        .with(sentry_layer)
        .try_init()?;

    tracing::debug!(package = config.package, env = %config.env, "tracing initialized");
    Ok(TracingGuard { _sentry: guard })
}
