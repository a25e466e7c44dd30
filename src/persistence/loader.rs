//! Reading a persistence configuration document from JSON.

use std::path::Path;

use super::models::PersistenceConfig;
use crate::error::LoadError;

impl PersistenceConfig {
    /// Parses a configuration document. The result is not yet validated.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Parse`] if the document is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a configuration file. The result is not yet validated.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read and
    /// [`LoadError::Parse`] if it is malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "read persistence config");
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::error::ConfigError;
    use crate::persistence::{StoreRole, StoreType};

    const SAMPLE: &str = r#"{
        "defaultStore": "primary",
        "visibilityStore": "primary",
        "dataStores": {"primary": {"cassandra": {}}}
    }"#;

    #[test]
    fn loads_and_resolves_file() {
        let Ok(mut file) = tempfile::NamedTempFile::new() else {
            panic!("failed to create temp file");
        };
        if let Err(e) = file.write_all(SAMPLE.as_bytes()) {
            panic!("failed to write temp file: {e}");
        }

        let config = match PersistenceConfig::from_path(file.path()) {
            Ok(config) => config,
            Err(e) => panic!("load failed: {e}"),
        };
        let resolved = match config.resolve() {
            Ok(resolved) => resolved,
            Err(e) => panic!("resolution failed: {e}"),
        };
        assert_eq!(resolved.default_store_type(), Ok(StoreType::Cassandra));
    }

    #[test]
    fn missing_file_is_io_error() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("failed to create temp dir");
        };
        let path = dir.path().join("absent.json");
        let err = PersistenceConfig::from_path(&path).err();
        assert!(matches!(err, Some(LoadError::Io { .. })));
    }

    #[test]
    fn malformed_document_is_parse_error() {
        let err = PersistenceConfig::from_json_str(r#"{"defaultStore": 3}"#).err();
        assert!(matches!(err, Some(LoadError::Parse(_))));
    }

    #[test]
    fn omitted_visibility_store_is_reported_by_role() {
        let json = r#"{"defaultStore": "p", "dataStores": {"p": {"sql": {}}}}"#;
        let config = match PersistenceConfig::from_json_str(json) {
            Ok(config) => config,
            Err(e) => panic!("parse failed: {e}"),
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingDatastore {
                role: StoreRole::Visibility,
                name: String::new(),
            })
        );
    }

    #[test]
    fn over_specified_store_fails_validation() {
        let json = r#"{
            "defaultStore": "primary",
            "visibilityStore": "primary",
            "dataStores": {"primary": {"sql": {}, "cassandra": {}}}
        }"#;
        let config = match PersistenceConfig::from_json_str(json) {
            Ok(config) => config,
            Err(e) => panic!("parse failed: {e}"),
        };
        let msg = config.validate().err().map(|e| e.to_string());
        assert_eq!(
            msg.as_deref(),
            Some("persistence config: datastore \"primary\": only one of sql or cassandra can be specified")
        );
    }
}
