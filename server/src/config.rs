//! Command-line and environment configuration for `todo-server`.

use clap::Parser;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PAGE_SIZE: u64 = 10;

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", about = "Serve a todo store over HTTP")]
pub struct Config {
    /// Interface to bind.
    #[arg(long, env = "TODO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Page size used when a read omits `page_size`.
    #[arg(long, env = "TODO_DEFAULT_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub default_page_size: u64,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, env = "TODO_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            default_page_size: DEFAULT_PAGE_SIZE,
            log_level: "info".to_string(),
        }
    }
}
