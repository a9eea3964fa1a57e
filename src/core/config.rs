//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.dragtable/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::rows::{DEFAULT_ROLE, Row, default_rows};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TableConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub print: PrintConfig,
    #[serde(default)]
    pub rows: Vec<Row>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub title: Option<String>,
    pub default_role: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PrintConfig {
    pub title: Option<String>,
    pub output_dir: Option<String>,
    pub command: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TITLE: &str = "Draggable Rows Table";
pub const DEFAULT_PRINT_TITLE: &str = "Table Print";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub title: String,
    pub default_role: String,
    pub print_title: String,
    pub print_dir: PathBuf,
    pub print_command: Option<String>,
    pub rows: Vec<Row>,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub print_dir: Option<PathBuf>,
    pub print_command: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.dragtable/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".dragtable").join("config.toml"))
}

/// Load config from `explicit` or `~/.dragtable/config.toml`.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `TableConfig::default()`. An explicit path that doesn't exist is
/// an error.
pub fn load_config(explicit: Option<&Path>) -> Result<TableConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(TableConfig::default());
            }
        },
    };

    if explicit.is_none() && !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TableConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Parse and validate TOML config text.
pub fn parse_config(contents: &str) -> Result<TableConfig, ConfigError> {
    let config: TableConfig = toml::from_str(contents).map_err(ConfigError::Parse)?;
    validate_rows(&config.rows)?;
    Ok(config)
}

/// Seed rows need a name and an id nobody else uses.
fn validate_rows(rows: &[Row]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for row in rows {
        if row.name.trim().is_empty() {
            return Err(ConfigError::Invalid(format!("row {} has an empty name", row.id)));
        }
        if !seen.insert(row.id.as_str()) {
            return Err(ConfigError::Invalid(format!("duplicate row id {}", row.id)));
        }
    }
    Ok(())
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# dragtable Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# title = "Draggable Rows Table"
# default_role = "Viewer"            # Role given to rows added with "Add Row"

# [print]
# title = "Table Print"              # <title> of the printed document
# output_dir = "/tmp"                # Or set DRAGTABLE_PRINT_DIR env var
# command = "lp"                     # Or set DRAGTABLE_PRINT_COMMAND env var

# [[rows]]
# id = "1"
# name = "Alice"
# email = "alice@example.com"
# role = "Admin"

# [[rows]]
# id = "2"
# name = "Bob"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TableConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Print dir: CLI → env → config → system temp dir
    let print_dir = cli
        .print_dir
        .clone()
        .or_else(|| std::env::var("DRAGTABLE_PRINT_DIR").ok().map(PathBuf::from))
        .or_else(|| config.print.output_dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(std::env::temp_dir);

    // Print command: CLI → env → config → none (file only)
    let print_command = cli
        .print_command
        .clone()
        .or_else(|| std::env::var("DRAGTABLE_PRINT_COMMAND").ok())
        .or_else(|| config.print.command.clone())
        .filter(|c| !c.trim().is_empty());

    let rows = if config.rows.is_empty() {
        default_rows()
    } else {
        config.rows.clone()
    };

    ResolvedConfig {
        title: config
            .general
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        default_role: config
            .general
            .default_role
            .clone()
            .unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        print_title: config
            .print
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_PRINT_TITLE.to_string()),
        print_dir,
        print_command,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = TableConfig::default();
        assert!(config.rows.is_empty());
        assert!(config.general.title.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = TableConfig::default();
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.title, DEFAULT_TITLE);
        assert_eq!(resolved.default_role, DEFAULT_ROLE);
        assert_eq!(resolved.print_title, DEFAULT_PRINT_TITLE);
        assert_eq!(resolved.rows, default_rows());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = TableConfig {
            general: GeneralConfig {
                title: Some("Team".to_string()),
                default_role: Some("Guest".to_string()),
            },
            print: PrintConfig {
                title: Some("Roster".to_string()),
                ..Default::default()
            },
            rows: vec![Row::new("a", "Ann")],
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.title, "Team");
        assert_eq!(resolved.default_role, "Guest");
        assert_eq!(resolved.print_title, "Roster");
        assert_eq!(resolved.rows, vec![Row::new("a", "Ann")]);
    }

    #[test]
    fn test_resolve_cli_print_flags_win() {
        let config = TableConfig {
            print: PrintConfig {
                output_dir: Some("/from/config".to_string()),
                command: Some("lp".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            print_dir: Some(PathBuf::from("/from/cli")),
            print_command: Some("lpr -P office".to_string()),
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.print_dir, PathBuf::from("/from/cli"));
        assert_eq!(resolved.print_command.as_deref(), Some("lpr -P office"));
    }

    #[test]
    fn test_resolve_blank_print_command_is_none() {
        let cli = CliOverrides {
            print_command: Some("   ".to_string()),
            ..Default::default()
        };
        let resolved = resolve(&TableConfig::default(), &cli);
        assert_eq!(resolved.print_command, None);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
title = "Staff"
default_role = "Guest"

[print]
title = "Staff Print"
output_dir = "/var/spool/table"
command = "lp"

[[rows]]
id = "1"
name = "Alice"
email = "alice@example.com"
role = "Admin"

[[rows]]
id = "2"
name = "Bob"
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.general.title.as_deref(), Some("Staff"));
        assert_eq!(config.print.command.as_deref(), Some("lp"));
        assert_eq!(config.rows.len(), 2);
        assert_eq!(config.rows[0].role.as_deref(), Some("Admin"));
        assert_eq!(config.rows[1].email, None);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[print]
command = "lpr"
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.print.command.as_deref(), Some("lpr"));
        assert!(config.general.title.is_none());
        assert!(config.rows.is_empty());
    }

    #[test]
    fn test_duplicate_row_ids_rejected() {
        let toml_str = r#"
[[rows]]
id = "1"
name = "Alice"

[[rows]]
id = "1"
name = "Bob"
"#;
        let err = parse_config(toml_str).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert_eq!(err.to_string(), "invalid config: duplicate row id 1");
    }

    #[test]
    fn test_empty_row_name_rejected() {
        let toml_str = r#"
[[rows]]
id = "7"
name = "  "
"#;
        assert!(matches!(parse_config(toml_str), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        assert!(matches!(parse_config("[general"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_explicit_missing_path_is_io_error() {
        let path = std::env::temp_dir().join(format!("dragtable-missing-{}.toml", uuid::Uuid::new_v4()));
        assert!(matches!(load_config(Some(&path)), Err(ConfigError::Io(_))));
    }
}
