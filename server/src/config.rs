//! Server configuration
//!
//! Command-line flags with environment fallbacks.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "grocery-server")]
#[command(about = "Development backend for the grocery list")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "GROCERY_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port for the HTTP API
    #[arg(short, long, env = "GROCERY_PORT", default_value_t = 3000)]
    pub port: u16,

    /// SQLite database file (`:memory:` for a throwaway store)
    #[arg(long, env = "GROCERY_DB", default_value = "grocery.db")]
    pub db: PathBuf,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_parse_from(["grocery-server"]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.db, PathBuf::from("grocery.db"));
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_flags() {
        let config = ServerConfig::try_parse_from([
            "grocery-server", "--port", "8080", "--host", "0.0.0.0", "--db", ":memory:",
        ])
        .unwrap();
        assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(config.db, PathBuf::from(":memory:"));
    }

    #[test]
    fn test_bad_host() {
        let config = ServerConfig::try_parse_from(["grocery-server", "--host", "not a host"]).unwrap();
        assert!(config.bind_addr().is_err());
    }
}
