//! Configuration validation.

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::schema::{Config, LaunchItem};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the first error into a `ConfigError`.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(ConfigError::InvalidValue {
                field: err.path,
                message: err.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        if let Some(home) = &config.home_dir {
            if home.trim().is_empty() {
                result.add_error(ValidationError::new("home_dir", "must not be empty"));
            }
        }

        let mut seen = HashSet::new();
        for (idx, item) in config.items.iter().enumerate() {
            Self::validate_item(idx, item, &mut result);

            if !item.name.is_empty() && !seen.insert(item.name.as_str()) {
                result.add_error(ValidationError::new(
                    format!("items[{}].name", idx),
                    format!("duplicate item name '{}'", item.name),
                ));
            }
        }

        result
    }

    fn validate_item(idx: usize, item: &LaunchItem, result: &mut ValidationResult) {
        let prefix = format!("items[{}]", idx);

        if item.name.is_empty() {
            result.add_error(ValidationError::new(
                format!("{}.name", prefix),
                "must not be empty",
            ));
        } else if item.name.contains('/') || item.name.contains('\\') {
            result.add_error(ValidationError::new(
                format!("{}.name", prefix),
                "must not contain path separators",
            ));
        } else if item.name == "." || item.name == ".." {
            result.add_error(ValidationError::new(
                format!("{}.name", prefix),
                "must not be a relative directory reference",
            ));
        }

        if item.program.trim().is_empty() {
            result.add_error(ValidationError::new(
                format!("{}.program", prefix),
                "must not be empty",
            ));
        } else if !item.program_path().is_absolute() {
            result.add_warning(ValidationWarning::new(
                format!("{}.program", prefix),
                "relative program paths are rejected when enabling",
            ));
        }

        if item.start_interval == Some(0) {
            result.add_warning(ValidationWarning::new(
                format!("{}.start_interval", prefix),
                "an interval of 0 seconds is ignored by launchd",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
