use std::{env, net::SocketAddr, path::PathBuf, time::Duration};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SEED_PATH: &str = "data/cart.json";
const DEFAULT_FADE_MS: u64 = 300;

#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub seed_path: PathBuf,
    pub fade: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            seed_path: PathBuf::from(DEFAULT_SEED_PATH),
            fade: Duration::from_millis(DEFAULT_FADE_MS),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from a key lookup; unparseable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(defaults.port);
        let seed_path = lookup("CART_SEED_PATH")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.seed_path);
        let fade = lookup("CART_FADE_MS")
            .and_then(|value| value.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.fade);

        Self {
            port,
            seed_path,
            fade,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
