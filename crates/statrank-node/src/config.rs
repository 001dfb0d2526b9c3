//! Node configuration from environment variables.
//!
//! | Variable                    | Default          |
//! |-----------------------------|------------------|
//! | `STATRANK_CATALOG_PATH`     | `./catalog.json` |
//! | `STATRANK_PROTECTED_GROUPS` | empty            |
//! | `STATRANK_STATS_DIR`        | `./stats`        |
//! | `STATRANK_RECENT_WINDOW`    | `1000`           |

use std::collections::BTreeSet;
use std::path::PathBuf;

use statrank_groups::{GroupCatalog, GroupId};

use crate::error::{ConfigError, Result};

/// Configuration for the statrank node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    /// JSON file mapping label keys to group ids
    pub catalog_path: PathBuf,

    /// Groups never removed from a member (e.g. the default guest group)
    pub protected_groups: BTreeSet<GroupId>,

    /// Directory of saved stats payloads
    pub stats_dir: PathBuf,

    /// Size of the recent battle window, as keyed in the recent-stats payload
    pub recent_window: u32,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("./catalog.json"),
            protected_groups: BTreeSet::new(),
            stats_dir: PathBuf::from("./stats"),
            recent_window: 1000,
        }
    }
}

impl NodeConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> std::result::Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let catalog_path = lookup("STATRANK_CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.catalog_path);

        let protected_groups = match lookup("STATRANK_PROTECTED_GROUPS") {
            Some(raw) => parse_group_list(&raw).map_err(|_| ConfigError::Invalid {
                var: "STATRANK_PROTECTED_GROUPS",
                value: raw,
            })?,
            None => defaults.protected_groups,
        };

        let stats_dir = lookup("STATRANK_STATS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.stats_dir);

        let recent_window = match lookup("STATRANK_RECENT_WINDOW") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(window) if window > 0 => window,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "STATRANK_RECENT_WINDOW",
                        value: raw,
                    })
                }
            },
            None => defaults.recent_window,
        };

        Ok(Self {
            catalog_path,
            protected_groups,
            stats_dir,
            recent_window,
        })
    }

    /// Read the catalog file and warn about unprovisioned labels.
    pub async fn load_catalog(&self) -> Result<GroupCatalog> {
        let json = tokio::fs::read_to_string(&self.catalog_path).await?;
        let catalog = GroupCatalog::from_json(&json)?;
        tracing::info!(
            "Loaded {} rank groups from {:?}",
            catalog.len(),
            self.catalog_path
        );
        catalog.warn_missing();
        Ok(catalog)
    }
}

/// Parse a comma-separated list of group ids. Blank items are ignored.
pub fn parse_group_list(raw: &str) -> std::result::Result<BTreeSet<GroupId>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<u64>().map(GroupId).map_err(|_| ConfigError::Invalid {
                var: "group id",
                value: item.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = NodeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, NodeConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = NodeConfig::from_lookup(lookup(&[
            ("STATRANK_CATALOG_PATH", "/etc/statrank/catalog.json"),
            ("STATRANK_PROTECTED_GROUPS", "8, 9,"),
            ("STATRANK_STATS_DIR", "/var/lib/statrank"),
            ("STATRANK_RECENT_WINDOW", "100"),
        ]))
        .unwrap();

        assert_eq!(config.catalog_path, PathBuf::from("/etc/statrank/catalog.json"));
        assert_eq!(config.protected_groups, BTreeSet::from([GroupId(8), GroupId(9)]));
        assert_eq!(config.stats_dir, PathBuf::from("/var/lib/statrank"));
        assert_eq!(config.recent_window, 100);
    }

    #[test]
    fn rejects_bad_values() {
        let err = NodeConfig::from_lookup(lookup(&[("STATRANK_PROTECTED_GROUPS", "8,guest")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: "STATRANK_PROTECTED_GROUPS",
                value: "8,guest".to_string()
            }
        );

        assert!(NodeConfig::from_lookup(lookup(&[("STATRANK_RECENT_WINDOW", "0")])).is_err());
        assert!(NodeConfig::from_lookup(lookup(&[("STATRANK_RECENT_WINDOW", "-5")])).is_err());
    }

    #[test]
    fn group_list_parsing() {
        assert_eq!(parse_group_list("").unwrap(), BTreeSet::new());
        assert_eq!(parse_group_list(" 3 ,1,3").unwrap(), BTreeSet::from([GroupId(1), GroupId(3)]));
        assert!(parse_group_list("1,-2").is_err());
    }

    #[tokio::test]
    async fn loads_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "skill.green": 31, "volume.lessThan5k": 40 }}"#).unwrap();

        let config = NodeConfig {
            catalog_path: file.path().to_path_buf(),
            ..NodeConfig::default()
        };
        let catalog = config.load_catalog().await.unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[tokio::test]
    async fn missing_catalog_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = NodeConfig {
            catalog_path: dir.path().join("absent.json"),
            ..NodeConfig::default()
        };
        assert!(matches!(config.load_catalog().await, Err(crate::Error::Io(_))));
    }
}
