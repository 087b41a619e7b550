use std::net::IpAddr;

use clap::{Parser, Subcommand};
use kokoro_utils::tracing::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "kokoro-server", about = "Serve the kokoro journal and exercises")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long, env = "KOKORO_HOST")]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long, env = "KOKORO_PORT")]
    pub(crate) port: Option<u16>,

    #[arg(
        long,
        env = "KOKORO_ORIGINS",
        value_delimiter = ',',
        help = "Origins allowed to call the api from a browser"
    )]
    pub(crate) origins: Vec<String>,

    #[arg(long = "sentry-dsn", env = "KOKORO_SENTRY_DSN", help = "Sentry url")]
    pub(crate) sentry_dsn: Option<String>,

    #[arg(long, env = "KOKORO_ENV", default_value = "dev", help = "Set the environment reported to sentry")]
    pub(crate) env: String,

    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub(crate) log_format: LogFormat,
}
