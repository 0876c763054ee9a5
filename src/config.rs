use anyhow::{Context as _, Result};
use poise::serenity_prelude::{ChannelId, GuildId};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "/data/shifts.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub database_path: PathBuf,
    /// Guild to register commands in. `None` registers them globally.
    pub guild_id: Option<GuildId>,
    pub audit_channel_id: Option<ChannelId>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("DISCORD_TOKEN environment variable is required"))?;

        let database_path = lookup("DB_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        let guild_id = parse_snowflake(lookup("GUILD_ID"), "GUILD_ID")?.map(GuildId::new);
        let audit_channel_id =
            parse_snowflake(lookup("LOG_CHANNEL_ID"), "LOG_CHANNEL_ID")?.map(ChannelId::new);

        Ok(Config {
            discord_token,
            database_path,
            guild_id,
            audit_channel_id,
        })
    }
}

// Unset, blank and "0" all mean "not configured".
fn parse_snowflake(raw: Option<String>, name: &str) -> Result<Option<u64>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let id: u64 = raw
        .parse()
        .with_context(|| format!("{name} must be a numeric Discord id, got {raw:?}"))?;

    Ok((id != 0).then_some(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn token_is_required() {
        assert!(config_from(&[]).is_err());
        assert!(config_from(&[("DISCORD_TOKEN", "  ")]).is_err());
    }

    #[test]
    fn optional_values_default_to_unset() {
        let config = config_from(&[("DISCORD_TOKEN", "abc")]).unwrap();

        assert_eq!(config.discord_token, "abc");
        assert_eq!(config.database_path, PathBuf::from(DEFAULT_DB_PATH));
        assert!(config.guild_id.is_none());
        assert!(config.audit_channel_id.is_none());
    }

    #[test]
    fn zero_guild_means_global_registration() {
        let config = config_from(&[("DISCORD_TOKEN", "abc"), ("GUILD_ID", "0")]).unwrap();
        assert!(config.guild_id.is_none());
    }

    #[test]
    fn ids_and_path_are_read() {
        let config = config_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("GUILD_ID", "123456789012345678"),
            ("LOG_CHANNEL_ID", " 876543210987654321 "),
            ("DB_PATH", "/tmp/shifts-test.db"),
        ])
        .unwrap();

        assert_eq!(config.guild_id, Some(GuildId::new(123456789012345678)));
        assert_eq!(
            config.audit_channel_id,
            Some(ChannelId::new(876543210987654321))
        );
        assert_eq!(config.database_path, PathBuf::from("/tmp/shifts-test.db"));
    }

    #[test]
    fn non_numeric_channel_is_rejected() {
        let err = config_from(&[("DISCORD_TOKEN", "abc"), ("LOG_CHANNEL_ID", "audit")])
            .unwrap_err();
        assert!(err.to_string().contains("LOG_CHANNEL_ID"));
    }
}
