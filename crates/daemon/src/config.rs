//! Daemon configuration, read once from the environment at startup
//!
//! | Variable | Default |
//! |---|---|
//! | `DESKQUEUE_RPC_HOST` | `127.0.0.1` |
//! | `DESKQUEUE_RPC_PORT` | `9530` |
//! | `DESKQUEUE_LOG_FORMAT` | `pretty` (`json` for structured output) |

use anyhow::{bail, Context, Result};
use deskqueue_api_rpc::server::{DEFAULT_RPC_HOST, DEFAULT_RPC_PORT};
use deskqueue_api_rpc::RpcServerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct DaemonConfig {
    pub rpc: RpcServerConfig,
    pub log_format: LogFormat,
}

impl DaemonConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("DESKQUEUE_RPC_HOST").unwrap_or_else(|| DEFAULT_RPC_HOST.to_string());

        let port = match lookup("DESKQUEUE_RPC_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("DESKQUEUE_RPC_PORT is not a valid port: {:?}", raw))?,
            None => DEFAULT_RPC_PORT,
        };

        let log_format = match lookup("DESKQUEUE_LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => bail!("DESKQUEUE_LOG_FORMAT must be 'pretty' or 'json', got {:?}", other),
        };

        Ok(Self {
            rpc: RpcServerConfig { host, port },
            log_format,
        })
    }
}
