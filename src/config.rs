use anyhow::Context;

pub const DEFAULT_PORT: u16 = 10000;

/// Runtime configuration, read from the environment once at startup and
/// passed into the components that need it.
#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub api_key: Option<String>,
    pub self_url: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            api_key: non_empty_var("UPTIMEROBOT_API_KEY"),
            self_url: non_empty_var("SELF_URL"),
        })
    }

    /// Target for the keep-alive ping; falls back to local loopback on the
    /// configured port when SELF_URL is unset.
    pub fn self_ping_url(&self) -> String {
        self.self_url
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}", self.port))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
