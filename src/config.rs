//! Ambient configuration shapes loaded by a host application.
//!
//! The cores never read environment variables, TOML, or JSON
//! themselves; a host assembles a [`KameaConfig`] (by any means —
//! `serde` deserialization from a config file, environment variables,
//! CLI flags) and passes it or its fields in by dependency injection.

use std::path::PathBuf;

use serde::Deserialize;

/// Filesystem paths a host needs to construct a
/// [`crate::kamea::KameaGrid`] and, optionally, an
/// [`crate::kamea::AspectStore`].
#[derive(Debug, Clone, Deserialize)]
pub struct KameaConfig {
    /// Path to the 27x27 decimal-value grid CSV.
    pub decimal_grid_path: PathBuf,
    /// Path to the 27x27 ditrune-string grid CSV.
    pub ditrune_grid_path: PathBuf,
    /// Path to the aspect SQLite database, if aspect queries are needed.
    #[serde(default)]
    pub aspect_database_path: Option<PathBuf>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test code uses unwrap for conciseness")]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_json_with_optional_database_path_omitted() {
        let json = r#"{
            "decimal_grid_path": "data/decimal.csv",
            "ditrune_grid_path": "data/ditrune.csv"
        }"#;
        let config: KameaConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.decimal_grid_path, PathBuf::from("data/decimal.csv"));
        assert!(config.aspect_database_path.is_none());
    }

    #[test]
    fn deserializes_with_database_path_present() {
        let json = r#"{
            "decimal_grid_path": "data/decimal.csv",
            "ditrune_grid_path": "data/ditrune.csv",
            "aspect_database_path": "data/aspects.sqlite"
        }"#;
        let config: KameaConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.aspect_database_path, Some(PathBuf::from("data/aspects.sqlite")));
    }
}
