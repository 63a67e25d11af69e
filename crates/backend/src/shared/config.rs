use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub fixtures: FixturesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FixturesConfig {
    /// Directory holding `<kind>.json` fixture files
    pub dir: String,
    /// Built frontend served as the fallback
    pub dist: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[fixtures]
dir = "assets/data"
dist = "dist"
"#;

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|path| path.parent().map(Path::to_path_buf))
}

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. The current directory
/// 3. Embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    let candidates = exe_dir()
        .into_iter()
        .chain(std::env::current_dir().ok())
        .map(|dir| dir.join("config.toml"));

    for config_path in candidates {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        }
        tracing::warn!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Absolute paths are kept. Relative paths resolve against the executable
/// directory when the target exists there, otherwise against the current
/// directory.
pub fn resolve_dir(path: &str) -> PathBuf {
    resolve_against(path, exe_dir().as_deref())
}

fn resolve_against(path: &str, exe_dir: Option<&Path>) -> PathBuf {
    let candidate = Path::new(path);
    if candidate.is_absolute() {
        return candidate.to_path_buf();
    }
    if let Some(dir) = exe_dir {
        let resolved = dir.join(candidate);
        if resolved.exists() {
            return resolved;
        }
    }
    PathBuf::from(path)
}
