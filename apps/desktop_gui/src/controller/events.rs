//! Status notices shown by the desktop shell and their classification.

use shared::error::{CatalogError, ErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiNotice {
    severity: NoticeSeverity,
    message: String,
}

impl UiNotice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Warning,
            message: message.into(),
        }
    }

    /// Describes why the configured catalog could not be used. The shell falls
    /// back to the demo catalog in every case.
    pub fn catalog_load_failure(err: &anyhow::Error) -> Self {
        let message = if let Some(catalog_err) = err.downcast_ref::<CatalogError>() {
            match catalog_err.code() {
                ErrorCode::Parse => {
                    format!("Catalog file is not valid TOML; showing demo catalog. ({catalog_err})")
                }
                ErrorCode::Validation => {
                    format!("Catalog entries are invalid; showing demo catalog. ({catalog_err})")
                }
            }
        } else if err
            .downcast_ref::<std::io::Error>()
            .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
        {
            format!("Catalog file not found; showing demo catalog. ({err:#})")
        } else {
            format!("Catalog could not be loaded; showing demo catalog. ({err:#})")
        };
        Self::warning(message)
    }

    pub fn severity(&self) -> NoticeSeverity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
