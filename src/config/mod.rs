use std::str::FromStr;

use tracing::Level;

pub(crate) const DEFAULT_LOGIN_PATH: &str = "/auth/login";

/// Runtime configuration injected by the host page as `window.ENV`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvConfig {
    pub log_level: Level,
    pub login_path: String,
}

impl EnvConfig {
    /// Build from a key lookup. Upper-case keys win over their lower-case
    /// spelling; anything missing or unparsable keeps the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |upper: &str, lower: &str| {
            lookup(upper)
                .or_else(|| lookup(lower))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let log_level = get("LOG_LEVEL", "log_level")
            .and_then(|v| Level::from_str(&v).ok())
            .unwrap_or(Level::INFO);

        let login_path = get("LOGIN_PATH", "login_path")
            .filter(|v| v.starts_with('/'))
            .unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_string());

        Self {
            log_level,
            login_path,
        }
    }

    pub fn from_window() -> Self {
        let env = web_sys::window()
            .and_then(|w| w.get("ENV"))
            .filter(|env| !env.is_undefined() && env.is_object());

        match env {
            Some(env) => Self::from_lookup(|key| {
                js_sys::Reflect::get(&env, &key.into())
                    .ok()
                    .and_then(|v| v.as_string())
            }),
            None => Self::default(),
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
