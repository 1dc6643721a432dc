//! Process-level engine settings read from the environment.

use std::env;
use std::fmt::{Debug, Display};
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{info, warn};

pub const DEFAULT_UPLOAD_BASE: &str = "/data/uploads";
pub const DEFAULT_STATIC_DIR: &str = "/static/assets/img";

/// Where assets live and how documents are written.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    /// Root of the per-tenant upload directories.
    pub upload_base: PathBuf,
    /// Directory holding the shared fallback logos.
    pub static_dir: PathBuf,
    /// Flate-compress page content streams.
    pub compress: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            upload_base: PathBuf::from(DEFAULT_UPLOAD_BASE),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            compress: true,
        }
    }
}

impl EngineSettings {
    /// Read `UPLOAD_BASE`, `STATIC_DIR` and `FLYER_COMPRESS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        EngineSettings {
            upload_base: try_load(&lookup, "UPLOAD_BASE", PathBuf::from(DEFAULT_UPLOAD_BASE)),
            static_dir: try_load(&lookup, "STATIC_DIR", PathBuf::from(DEFAULT_STATIC_DIR)),
            compress: try_load(&lookup, "FLYER_COMPRESS", true),
        }
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Debug,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default:?}");
        return default;
    };
    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default:?}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(EngineSettings::from_lookup(lookup(&[])), EngineSettings::default());
    }

    #[test]
    fn reads_overrides() {
        let settings = EngineSettings::from_lookup(lookup(&[
            ("UPLOAD_BASE", "/srv/uploads"),
            ("FLYER_COMPRESS", "false"),
        ]));
        assert_eq!(settings.upload_base, PathBuf::from("/srv/uploads"));
        assert_eq!(settings.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
        assert!(!settings.compress);
    }

    #[test]
    fn invalid_flag_falls_back() {
        let settings = EngineSettings::from_lookup(lookup(&[("FLYER_COMPRESS", "maybe")]));
        assert!(settings.compress);
    }
}
