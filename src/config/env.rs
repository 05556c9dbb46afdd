//! Environment variable helpers

use std::env;

/// Helpers for reading typed values out of the process environment
pub struct EnvUtils;

impl EnvUtils {
    /// Read a variable, treating an empty value as unset
    pub fn get_env_var(key: &str) -> Option<String> {
        env::var(key).ok().filter(|v| !v.trim().is_empty())
    }

    /// Read a variable, falling back to `default` when it is unset
    pub fn get_env_var_or(key: &str, default: Option<String>) -> Option<String> {
        Self::get_env_var(key).or(default)
    }

    /// Read `key`, then `alias` when `key` is unset, then `default`
    pub fn get_env_var_aliased(
        key: &str,
        alias: &str,
        default: Option<String>,
    ) -> Option<String> {
        Self::get_env_var(key)
            .or_else(|| Self::get_env_var(alias))
            .or(default)
    }

    pub fn parse_bool(value: &str) -> Option<bool> {
        match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        }
    }

    pub fn get_bool_config(key: &str, default: bool) -> bool {
        Self::get_env_var(key)
            .and_then(|value| Self::parse_bool(&value))
            .unwrap_or(default)
    }

    /// Read a numeric variable; a present but unparseable value is an error
    pub fn get_numeric_config<T>(key: &str, default: T) -> Result<T, String>
    where
        T: std::str::FromStr,
    {
        match Self::get_env_var(key) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| format!("{} must be a number, got '{}'", key, value)),
            None => Ok(default),
        }
    }

    /// Split a comma-separated variable into trimmed, non-empty items
    pub fn get_list_config(key: &str) -> Vec<String> {
        Self::get_env_var(key)
            .map(|value| Self::split_list(&value))
            .unwrap_or_default()
    }

    pub fn split_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }
}
