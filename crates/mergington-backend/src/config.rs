//! Server configuration read from the environment at startup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use mergington::errors::{Report, WrapErr};

const DEFAULT_PORT: u16 = 3030;
/// The bundled web UI shipped next to this crate.
const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    /// Optional JSON catalog replacing the built-in activities.
    pub activities_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, Report> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, so tests don't touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Report> {
        let host = match lookup("MERGINGTON_HOST") {
            Some(host) => host
                .parse::<IpAddr>()
                .wrap_err_with(|| format!("Invalid MERGINGTON_HOST {host:?}"))?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match lookup("MERGINGTON_PORT") {
            Some(port) => port
                .parse::<u16>()
                .wrap_err_with(|| format!("Invalid MERGINGTON_PORT {port:?}"))?,
            None => DEFAULT_PORT,
        };

        let static_dir = lookup("MERGINGTON_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let activities_file = lookup("MERGINGTON_ACTIVITIES_FILE")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            addr: SocketAddr::new(host, port),
            static_dir,
            activities_file,
        })
    }
}
