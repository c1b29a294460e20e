//! Evaluation environment configuration.

/// Environment variable that switches memoization for [`EnvConfig::from_env`].
pub const MEMO_ENV_VAR: &str = "LAZY_MEMO";

/// Settings an [`Env`](crate::Env) starts with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EnvConfig {
    /// Whether forcing consults and fills the memoization cache.
    pub memoize: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        EnvConfig { memoize: true }
    }
}

impl EnvConfig {
    /// Read the configuration from the process environment.
    ///
    /// `LAZY_MEMO=0`, `false` or `off` disables memoization; any other value,
    /// or the variable being unset, keeps the default.
    pub fn from_env() -> Self {
        let mut config = EnvConfig::default();
        if let Ok(raw) = std::env::var(MEMO_ENV_VAR) {
            config.memoize = parse_switch(&raw).unwrap_or(config.memoize);
        }
        config
    }

    #[must_use]
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }
}

fn parse_switch(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "0" | "false" | "off" | "no" => Some(false),
        "1" | "true" | "on" | "yes" => Some(true),
        _ => None,
    }
}
