use crate::modules::posts::core::id_policy::PostIdPolicy;
use thiserror::Error;

pub const HOST_VAR: &str = "BLOG_POSTS_HOST";
pub const PORT_VAR: &str = "BLOG_POSTS_PORT";
pub const ID_POLICY_VAR: &str = "BLOG_POSTS_ID_POLICY";
pub const SEED_VAR: &str = "BLOG_POSTS_SEED";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5002;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be `current-max` or `next-after-max`, got {value:?}")]
    InvalidIdPolicy { var: &'static str, value: String },

    #[error("{var} must be `true` or `false`, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub id_policy: PostIdPolicy,
    /// Start with the two fixture posts.
    pub seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            id_policy: PostIdPolicy::default(),
            seed: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup(HOST_VAR).unwrap_or(defaults.host);

        let port = match lookup(PORT_VAR) {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value,
            })?,
            None => defaults.port,
        };

        let id_policy = match lookup(ID_POLICY_VAR) {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidIdPolicy {
                var: ID_POLICY_VAR,
                value,
            })?,
            None => defaults.id_policy,
        };

        let seed = match lookup(SEED_VAR) {
            Some(value) => match value.as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => return Err(ConfigError::InvalidFlag { var: SEED_VAR, value }),
            },
            None => defaults.seed,
        };

        Ok(Self {
            host,
            port,
            id_policy,
            seed,
        })
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
