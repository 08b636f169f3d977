// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for conversion operations
//!
//! Only failures that abort a single entity conversion live here.
//! Unsupported variants and geometry type mismatches are recorded as
//! [`Diagnostic`](crate::Diagnostic)s instead.

use crate::{DiagnosticKind, EntityKind};
use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that abort the conversion of one entity
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// ID list token contains something other than integers, ',' and '-'
    #[error("Invalid ID token '{token}': {reason}")]
    InvalidIdToken { token: String, reason: String },

    /// Range group whose end lies before its start
    #[error("Reversed range in ID token '{token}': {start}-{end}")]
    ReversedRange { token: String, start: u32, end: u32 },

    /// Foreign line resolving to fewer than two points
    #[error("Line {line} has {points} node(s), an edge needs at least 2")]
    DegenerateEdge { line: u32, points: usize },

    /// Referenced foreign record does not exist
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: u32 },

    /// Foreign store rejected a request
    #[error("Model store error: {0}")]
    Store(String),
}

impl ConvertError {
    /// Create a new token error
    pub fn token(token: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvertError::InvalidIdToken {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing-record error
    pub fn not_found(kind: EntityKind, id: impl Into<u32>) -> Self {
        ConvertError::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Create a store error
    pub fn store(msg: impl Into<String>) -> Self {
        ConvertError::Store(msg.into())
    }

    /// Whether this error came from a malformed ID token
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            ConvertError::InvalidIdToken { .. } | ConvertError::ReversedRange { .. }
        )
    }

    /// Kind of the diagnostic this error becomes when it only costs part of
    /// a batch
    pub fn diagnostic_kind(&self) -> DiagnosticKind {
        match self {
            ConvertError::InvalidIdToken { .. } | ConvertError::ReversedRange { .. } => {
                DiagnosticKind::Parse
            }
            ConvertError::DegenerateEdge { .. } => DiagnosticKind::OpenBoundary,
            ConvertError::NotFound { .. } | ConvertError::Store(_) => {
                DiagnosticKind::MissingReference
            }
        }
    }
}
