use clap::{Parser, ValueEnum};
use minitube_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "MINITUBE_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "MINITUBE_STORAGE_BACKEND";
pub const MYSQL_DSN_ENV: &str = "MINITUBE_MYSQL_DSN";
pub const CORS_ORIGINS_ENV: &str = "MINITUBE_CORS_ORIGINS";
pub const SEED_ENV: &str = "MINITUBE_SEED";
pub const LOG_FORMAT_ENV: &str = "MINITUBE_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "mysql")]
    Mysql,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Mysql => write!(f, "mysql"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "minitube-gateway", version)]
pub struct Cli {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = MYSQL_DSN_ENV, required_if_eq("storage", "mysql"))]
    pub mysql_dsn: Option<String>,

    /// Origins allowed to call the API from a browser. Any origin when empty.
    #[arg(long = "cors-origin", env = CORS_ORIGINS_ENV, value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// Replace the stored videos with the demo catalog on startup.
    #[arg(long, env = SEED_ENV)]
    pub seed: bool,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_in_memory_storage() {
        let cli = Cli::try_parse_from(["minitube-gateway"]).unwrap();
        assert_eq!(cli.listen_addr, DEFAULT_LISTEN_ADDR.parse().unwrap());
        assert_eq!(cli.storage, StorageBackendArg::InMemory);
        assert!(cli.mysql_dsn.is_none());
        assert!(cli.cors_origins.is_empty());
        assert!(!cli.seed);
        assert_eq!(cli.log_format, LogFormatArg::Text);
    }

    #[test]
    fn mysql_requires_dsn() {
        assert!(Cli::try_parse_from(["minitube-gateway", "--storage", "mysql"]).is_err());

        let cli = Cli::try_parse_from([
            "minitube-gateway",
            "--storage",
            "mysql",
            "--mysql-dsn",
            "mysql://u:p@localhost/minitube",
        ])
        .unwrap();
        assert_eq!(cli.storage, StorageBackendArg::Mysql);
    }

    #[test]
    fn cors_origins_split_on_commas() {
        let cli = Cli::try_parse_from([
            "minitube-gateway",
            "--cors-origin",
            "http://a.test,http://b.test",
            "--seed",
        ])
        .unwrap();
        assert_eq!(cli.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert!(cli.seed);
    }
}
