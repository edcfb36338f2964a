//! Generator configuration.

use std::path::PathBuf;

use crate::errors::GeneratorError;

/// Collection read when no input is given.
pub const DEFAULT_INPUT: &str = "collection/api.postman_collection.json";

/// Bindings file written when no output is given.
pub const DEFAULT_OUTPUT: &str = "exemplar/client/src/generated.rs";

/// Where to read the collection and where to write the bindings.
///
/// Paths are relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Render and validate, but do not write the output file.
    pub dry_run: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            dry_run: false,
        }
    }
}

impl GeneratorConfig {
    /// Checks that the paths can be used.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ConfigError` for an empty path or an output
    /// path that names a directory.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.input.as_os_str().is_empty() {
            return Err(GeneratorError::ConfigError(
                "input path must not be empty".to_string(),
            ));
        }
        if self.output.as_os_str().is_empty() {
            return Err(GeneratorError::ConfigError(
                "output path must not be empty".to_string(),
            ));
        }
        if self.output.is_dir() {
            return Err(GeneratorError::ConfigError(format!(
                "output path '{}' is a directory",
                self.output.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_paths() {
        let config = GeneratorConfig::default();
        assert_eq!(config.input, PathBuf::from("collection/api.postman_collection.json"));
        assert_eq!(config.output, PathBuf::from("exemplar/client/src/generated.rs"));
        assert!(!config.dry_run);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_paths_are_rejected() {
        let config = GeneratorConfig {
            input: PathBuf::new(),
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(GeneratorError::ConfigError(_))));

        let config = GeneratorConfig {
            output: PathBuf::new(),
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(GeneratorError::ConfigError(_))));
    }

    #[test]
    fn directory_output_is_rejected() {
        let dir = TempDir::new().unwrap();
        let config = GeneratorConfig {
            output: dir.path().to_path_buf(),
            ..GeneratorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("is a directory"));
    }
}
