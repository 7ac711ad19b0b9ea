//! Configuration management for macgate.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Firewall whitelist tool (verbs: add <mac>, remove <mac>, list)
    pub whitelist_tool: String,

    /// DHCP lease file path
    pub lease_file: PathBuf,

    /// Neighbor table command (must emit `(<ip>) at <mac>` lines)
    pub neighbor_command: String,

    /// Name of the trusted forwarded-MAC header an upstream device may
    /// set. Informational for the HTTP front end; the CLI takes the
    /// claimed value directly via --claimed-mac.
    pub mac_header: String,

    /// Timeout for every external command invocation, in seconds
    pub command_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            whitelist_tool: "captive-whitelist".to_string(),
            lease_file: PathBuf::from("/var/lib/dhcp/dhcpd.leases"),
            neighbor_command: "arp".to_string(),
            mac_header: "x-mac-address".to_string(),
            command_timeout_secs: 5,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file, falling back to defaults when
    /// the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a YAML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }
        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.whitelist_tool.trim().is_empty() {
            anyhow::bail!("whitelist_tool cannot be empty");
        }
        if self.neighbor_command.trim().is_empty() {
            anyhow::bail!("neighbor_command cannot be empty");
        }
        if self.mac_header.trim().is_empty() {
            anyhow::bail!("mac_header cannot be empty");
        }
        if self.command_timeout_secs == 0 {
            anyhow::bail!("command_timeout_secs must be at least 1");
        }
        Ok(())
    }

    /// The external command timeout as a [`Duration`].
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.whitelist_tool, "captive-whitelist");
        assert_eq!(config.lease_file, PathBuf::from("/var/lib/dhcp/dhcpd.leases"));
        assert_eq!(config.neighbor_command, "arp");
        assert_eq!(config.command_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.whitelist_tool, config.whitelist_tool);
        assert_eq!(parsed.lease_file, config.lease_file);
        assert_eq!(parsed.command_timeout_secs, config.command_timeout_secs);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("whitelist_tool: /usr/local/bin/wl\n").unwrap();
        assert_eq!(config.whitelist_tool, "/usr/local/bin/wl");
        assert_eq!(config.neighbor_command, "arp");
        assert_eq!(config.command_timeout_secs, 5);
    }

    #[test]
    fn test_validate_rejects_empty_tool() {
        let config = Config {
            whitelist_tool: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            command_timeout_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/macgate/config.yaml").unwrap();
        assert_eq!(config.whitelist_tool, "captive-whitelist");
    }

    #[test]
    fn test_load_save_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = Config::default();
        config.command_timeout_secs = 10;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.command_timeout_secs, 10);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "command_timeout_secs: 0\n").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
