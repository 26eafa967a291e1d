//! Runtime configuration resolved from the environment, with platform defaults.

use std::{env, path::PathBuf};

use directories::ProjectDirs;
use url::Url;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "SwiftPoint";
const APP_NAME: &str = "SwiftPoint";

pub const DATA_DIR_VAR: &str = "SWIFTPOINT_DATA_DIR";
pub const EXPORT_DIR_VAR: &str = "SWIFTPOINT_EXPORT_DIR";
pub const SITE_ORIGIN_VAR: &str = "SWIFTPOINT_SITE_ORIGIN";

pub const DEFAULT_SITE_ORIGIN: &str = "https://swiftpointlogistics.co.ke";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Where the local store keeps its files. `None` means keep everything in memory.
    pub data_dir: Option<PathBuf>,
    /// Where exported reports and order files land.
    pub export_dir: PathBuf,
    /// Origin used to build shareable referral links.
    pub site_origin: Url,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolves the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let data_dir = var(DATA_DIR_VAR)
            .map(PathBuf::from)
            .or_else(default_data_dir);

        let export_dir = var(EXPORT_DIR_VAR)
            .map(PathBuf::from)
            .or_else(dirs::download_dir)
            .or_else(|| data_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));

        let site_origin = var(SITE_ORIGIN_VAR)
            .and_then(|raw| match Url::parse(&raw) {
                Ok(url) => Some(url),
                Err(err) => {
                    tracing::warn!(value = %raw, error = %err, "ignoring invalid {SITE_ORIGIN_VAR}");
                    None
                }
            })
            .unwrap_or_else(default_site_origin);

        Self {
            data_dir,
            export_dir,
            site_origin,
        }
    }
}

fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

fn default_site_origin() -> Url {
    Url::parse(DEFAULT_SITE_ORIGIN).unwrap_or_else(|_| unreachable!("default origin is a valid URL"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn explicit_directories_win() {
        let cfg = config(&[(DATA_DIR_VAR, "/tmp/sp-data"), (EXPORT_DIR_VAR, "/tmp/sp-out")]);
        assert_eq!(cfg.data_dir, Some(PathBuf::from("/tmp/sp-data")));
        assert_eq!(cfg.export_dir, PathBuf::from("/tmp/sp-out"));
    }

    #[test]
    fn invalid_origin_falls_back_to_default() {
        let cfg = config(&[(SITE_ORIGIN_VAR, "not a url")]);
        assert_eq!(cfg.site_origin.as_str(), "https://swiftpointlogistics.co.ke/");
        let cfg = config(&[(SITE_ORIGIN_VAR, "http://localhost:8080")]);
        assert_eq!(cfg.site_origin.as_str(), "http://localhost:8080/");
    }

    #[test]
    fn blank_values_are_ignored() {
        let cfg = config(&[(EXPORT_DIR_VAR, "  ")]);
        assert_ne!(cfg.export_dir, PathBuf::from("  "));
    }
}
