use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_WORKER_THREADS: usize = 4;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.into(), port: DEFAULT_PORT, worker_threads: Some(DEFAULT_WORKER_THREADS) }
    }
}

fn default_host() -> String { DEFAULT_HOST.to_string() }
fn default_port() -> u16 { DEFAULT_PORT }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Config used when no file is present: `SERVER_HOST`, `SERVER_PORT` and
    /// `TOKIO_WORKER_THREADS`, normalized the same way as the file.
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            std::env::var("SERVER_HOST").ok().as_deref(),
            std::env::var("SERVER_PORT").ok().as_deref(),
            std::env::var("TOKIO_WORKER_THREADS").ok().as_deref(),
        )
    }

    /// Builds and validates a config from raw string values; unset or
    /// unparsable values take their defaults.
    pub fn from_values(host: Option<&str>, port: Option<&str>, worker_threads: Option<&str>) -> Result<Self> {
        let host = host.map(str::to_string).unwrap_or_else(default_host);
        let port = port
            .and_then(|p| p.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let worker_threads = worker_threads.and_then(|v| v.trim().parse::<usize>().ok());
        let mut cfg = Self { server: ServerConfig { host, port, worker_threads } };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = DEFAULT_HOST.to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(DEFAULT_WORKER_THREADS),
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_server_section() {
        let cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000
            worker_threads = 2
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn missing_section_uses_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.server.host, DEFAULT_HOST);
        assert_eq!(cfg.server.port, DEFAULT_PORT);
    }

    #[test]
    fn normalize_fills_blank_host_and_worker_threads() {
        let mut cfg = parse(
            r#"
            [server]
            host = "  "
            port = 8081
            worker_threads = 0
            "#,
        )
        .unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.host, DEFAULT_HOST);
        assert_eq!(cfg.server.worker_threads, Some(DEFAULT_WORKER_THREADS));
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut cfg = parse("[server]\nport = 0\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn env_values_are_normalized() {
        let cfg = AppConfig::from_values(Some("  "), Some("9090"), Some("0")).unwrap();
        assert_eq!(cfg.server.host, DEFAULT_HOST);
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.worker_threads, Some(DEFAULT_WORKER_THREADS));
    }

    #[test]
    fn env_values_default_when_unset() {
        let cfg = AppConfig::from_values(None, None, None).unwrap();
        assert_eq!(cfg.server.bind_addr(), format!("{DEFAULT_HOST}:{DEFAULT_PORT}"));
        assert_eq!(cfg.server.worker_threads, Some(DEFAULT_WORKER_THREADS));
    }

    #[test]
    fn env_zero_port_is_rejected() {
        assert!(AppConfig::from_values(Some("0.0.0.0"), Some("0"), Some("2")).is_err());
    }

    #[test]
    fn out_of_range_port_fails_to_parse() {
        assert!(parse("[server]\nport = 70000\n").is_err());
    }
}
