//! Runtime configuration read from the process environment (after `.env` is loaded).

use crate::error::ConfigError;
use serenity::model::id::GuildId;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_TRANSACTIONS_FILE: &str = "./transactions.json";
pub const DEFAULT_STOCK_FILE: &str = "./stock/stock.json";
pub const DEFAULT_STOCK: i64 = 51497;

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    /// Guild the slash commands are registered for.
    pub guild_id: GuildId,
    pub transactions_file: PathBuf,
    pub stock_file: PathBuf,
    pub default_stock: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup so tests don't touch the real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("DISCORD_TOKEN").ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;
        let guild_raw = lookup("GUILD_ID").ok_or(ConfigError::Missing("GUILD_ID"))?;
        let guild_id = guild_raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|id| *id != 0)
            .map(GuildId::new)
            .ok_or(ConfigError::Invalid {
                name: "GUILD_ID",
                value: guild_raw.clone(),
            })?;

        let default_stock = match lookup("DEFAULT_STOCK") {
            Some(raw) => raw.trim().parse::<i64>().map_err(|_| ConfigError::Invalid {
                name: "DEFAULT_STOCK",
                value: raw.clone(),
            })?,
            None => DEFAULT_STOCK,
        };

        Ok(Config {
            token,
            guild_id,
            transactions_file: lookup("TRANSACTIONS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TRANSACTIONS_FILE)),
            stock_file: lookup("STOCK_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STOCK_FILE)),
            default_stock,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_fill_optional_keys() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("GUILD_ID", "1234"),
        ]))
        .expect("valid config");
        assert_eq!(cfg.guild_id, GuildId::new(1234));
        assert_eq!(cfg.default_stock, 51497);
        assert_eq!(cfg.stock_file, PathBuf::from("./stock/stock.json"));
        assert_eq!(cfg.transactions_file, PathBuf::from("./transactions.json"));
    }

    #[test]
    fn missing_token_is_reported() {
        let err = Config::from_lookup(lookup_from(&[("GUILD_ID", "1")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DISCORD_TOKEN")));
    }

    #[test]
    fn non_numeric_guild_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("GUILD_ID", "not-a-number"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "GUILD_ID", .. }));
    }
}
