use crate::domain::model::Session;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const USER_ENV: &str = "GULEROGLU_USER";
pub const PWD_ENV: &str = "GULEROGLU_PWD";

const DEFAULT_USER: &str = "guleroglu";
const DEFAULT_PWD: &str = "2025export";

/// The single accepted username/password pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

/// Optional secrets file, TOML with the upstream key names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecretsFile {
    #[serde(rename = "AUTH_USER")]
    pub auth_user: Option<String>,
    #[serde(rename = "AUTH_PWD")]
    pub auth_pwd: Option<String>,
}

impl Credentials {
    /// Resolution chain: secrets file, then environment variables, then the
    /// hard-coded defaults. Per field, first present value wins.
    pub fn resolve(secrets_path: Option<&Path>) -> Self {
        let secrets = secrets_path
            .and_then(|p| fs::read_to_string(p).ok())
            .and_then(|raw| toml::from_str::<SecretsFile>(&raw).ok())
            .unwrap_or_default();
        Self::resolve_from(secrets, std::env::var(USER_ENV).ok(), std::env::var(PWD_ENV).ok())
    }

    fn resolve_from(
        secrets: SecretsFile,
        env_user: Option<String>,
        env_pwd: Option<String>,
    ) -> Self {
        Self {
            user: secrets
                .auth_user
                .or(env_user)
                .unwrap_or_else(|| DEFAULT_USER.to_string()),
            password: secrets
                .auth_pwd
                .or(env_pwd)
                .unwrap_or_else(|| DEFAULT_PWD.to_string()),
        }
    }

    /// Explicit session variant instead of a mutable logged-in flag.
    pub fn login(&self, user: &str, password: &str) -> Session {
        if user == self.user && password == self.password {
            Session::Authenticated {
                user: user.to_string(),
            }
        } else {
            Session::Anonymous
        }
    }
}
