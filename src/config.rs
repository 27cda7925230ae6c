//! Connection settings for the backing database.
//!
//! Resolved once at startup, outside the stores and the session. Precedence
//! per setting: CLI flag, then environment variable. The username and
//! password ride along because the schema's deployment convention includes
//! them; SQLite itself has no use for either.

use anyhow::{bail, Result};

/// Environment keys, one per setting.
pub const ENV_DB_URL: &str = "APP_DB_URL";
pub const ENV_DB_USER: &str = "APP_DB_USER";
pub const ENV_DB_PASS: &str = "APP_DB_PASS";
pub const ENV_DEV_MODE: &str = "DEV_MODE";

/// Resolved database settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_user: String,
    pub db_pass: String,
    /// Seed schema and sample data before starting the session.
    pub dev_mode: bool,
}

impl Config {
    /// Resolve settings from CLI flags and the environment. All three
    /// connection settings must be present somewhere; a missing one is a
    /// startup error, not a prompt.
    pub fn resolve(
        url_flag: Option<String>,
        user_flag: Option<String>,
        pass_flag: Option<String>,
        dev_flag: bool,
    ) -> Result<Self> {
        let database_url = flag_or_env(url_flag, ENV_DB_URL);
        let db_user = flag_or_env(user_flag, ENV_DB_USER);
        let db_pass = flag_or_env(pass_flag, ENV_DB_PASS);

        let (Some(database_url), Some(db_user), Some(db_pass)) =
            (database_url, db_user, db_pass)
        else {
            bail!(
                "Missing DB configuration. Provide {ENV_DB_URL}, {ENV_DB_USER}, {ENV_DB_PASS} \
                 as flags (--database, --db-user, --db-pass) or environment variables."
            );
        };

        let dev_mode = dev_flag
            || std::env::var(ENV_DEV_MODE)
                .map(|v| v.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(false);

        Ok(Self {
            database_url,
            db_user,
            db_pass,
            dev_mode,
        })
    }
}

/// Flag wins over environment; a blank flag falls through to the
/// environment, and a blank environment value counts as absent too.
fn flag_or_env(flag: Option<String>, env_key: &str) -> Option<String> {
    flag.filter(|v| !v.trim().is_empty())
        .or_else(|| std::env::var(env_key).ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_sufficient() -> Result<()> {
        let config = Config::resolve(
            Some("sqlite:missions.db".into()),
            Some("operator".into()),
            Some("secret".into()),
            false,
        )?;
        assert_eq!(config.database_url, "sqlite:missions.db");
        assert_eq!(config.db_user, "operator");
        assert!(!config.dev_mode);
        Ok(())
    }

    #[test]
    fn test_blank_flag_counts_as_absent() {
        std::env::remove_var(ENV_DB_URL);

        // Whitespace flag falls through to the (unset) environment:
        // nothing resolves, startup fails.
        let result = Config::resolve(
            Some("   ".into()),
            Some("operator".into()),
            Some("secret".into()),
            false,
        );
        let message = result.unwrap_err().to_string();
        assert!(message.contains(ENV_DB_URL));
    }

    #[test]
    fn test_dev_flag_sets_dev_mode() -> Result<()> {
        let config = Config::resolve(
            Some("sqlite:missions.db".into()),
            Some("operator".into()),
            Some("secret".into()),
            true,
        )?;
        assert!(config.dev_mode);
        Ok(())
    }
}
