use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    Parse,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{code:?}: failed to parse catalog: {source}")]
    Parse {
        code: ErrorCode,
        #[source]
        source: toml::de::Error,
    },
    #[error("{code:?}: {kind} entry #{index} has an empty id")]
    EmptyId {
        code: ErrorCode,
        kind: &'static str,
        index: usize,
    },
    #[error("{code:?}: duplicate {kind} id '{id}'")]
    DuplicateId {
        code: ErrorCode,
        kind: &'static str,
        id: String,
    },
}

impl CatalogError {
    pub fn parse(source: toml::de::Error) -> Self {
        Self::Parse {
            code: ErrorCode::Parse,
            source,
        }
    }

    pub fn empty_id(kind: &'static str, index: usize) -> Self {
        Self::EmptyId {
            code: ErrorCode::Validation,
            kind,
            index,
        }
    }

    pub fn duplicate_id(kind: &'static str, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            code: ErrorCode::Validation,
            kind,
            id: id.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Parse { code, .. } | Self::EmptyId { code, .. } | Self::DuplicateId { code, .. } => {
                *code
            }
        }
    }
}
