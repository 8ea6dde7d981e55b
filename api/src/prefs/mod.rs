//! User preferences, read from the environment on the server.

pub mod dashboard_prefs;
pub mod loading_prefs;
pub mod user_prefs;

use std::str::FromStr;

/// Parses `key` through `lookup`, falling back to `default` when the variable
/// is unset or does not parse.
pub(crate) fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                dioxus_logger::tracing::warn!("Ignoring invalid value {:?} for {}", raw, key);
                default
            }
        },
        None => default,
    }
}
