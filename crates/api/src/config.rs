//! Process configuration, read from environment variables.

use std::net::{AddrParseError, SocketAddr};

use ecom_auth::Role;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEV_JWT_SECRET: &str = "dev-secret";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// `BIND_ADDR`, default `0.0.0.0:8080`.
    pub bind_addr: SocketAddr,
    /// `JWT_SECRET`: HS256 shared secret for bearer tokens.
    pub jwt_secret: String,
    /// `JWT_ISSUER`: when set, tokens must carry this `iss`.
    pub jwt_issuer: Option<String>,
    /// `JWT_AUDIENCE`: when set, tokens must list this `aud`.
    pub jwt_audience: Option<String>,
    /// `ADMIN_ROLE`: role that unlocks catalog mutations, default `Admin`.
    pub admin_role: Role,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("ADMIN_ROLE must not be empty")]
    EmptyAdminRole,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Dev/test configuration: defaults everywhere except the secret.
    pub fn for_secret(jwt_secret: impl Into<String>) -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            jwt_secret: jwt_secret.into(),
            jwt_issuer: None,
            jwt_audience: None,
            admin_role: Role::ADMIN,
        }
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_addr.clone(),
                source,
            })?;

        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            DEV_JWT_SECRET.to_string()
        });

        let jwt_issuer = lookup("JWT_ISSUER").filter(|iss| !iss.trim().is_empty());
        let jwt_audience = lookup("JWT_AUDIENCE").filter(|aud| !aud.trim().is_empty());

        let admin_role = match lookup("ADMIN_ROLE") {
            None => Role::ADMIN,
            Some(role) if role.trim().is_empty() => return Err(ConfigError::EmptyAdminRole),
            Some(role) => Role::new(role.trim().to_string()),
        };

        Ok(Self {
            bind_addr,
            jwt_secret,
            jwt_issuer,
            jwt_audience,
            admin_role,
        })
    }
}
