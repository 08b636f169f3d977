// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Non-fatal conversion diagnostics
//!
//! Conversions never abort a batch for an unsupported variant. They record a
//! [`Diagnostic`] in the accumulator they were handed and return degraded but
//! valid output. Every recorded entry is also emitted through `tracing`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic severity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Warning,
    Error,
}

/// What went wrong
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// Malformed ID token, the affected entity was skipped
    Parse,
    /// Referenced record missing from the store
    MissingReference,
    /// Recognized variant with no mapping
    UnsupportedVariant,
    /// Non-planar surface, geometry resolved best-effort
    GeometryTypeMismatch,
    /// Boundary edges do not chain into a closed loop
    OpenBoundary,
}

/// A single recorded diagnostic
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    /// Entity the message is about, e.g. "surface 4"
    pub subject: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            severity,
            kind,
            subject: None,
            message: message.into(),
        }
    }

    /// Attach the entity this diagnostic is about
    pub fn about(mut self, subject: impl fmt::Display) -> Self {
        self.subject = Some(subject.to_string());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.subject {
            Some(subject) => write!(f, "[{:?}] {}: {}", self.severity, subject, self.message),
            None => write!(f, "[{:?}] {}", self.severity, self.message),
        }
    }
}

/// Diagnostics accumulator threaded through conversions
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => tracing::warn!(
                kind = ?diagnostic.kind,
                subject = diagnostic.subject.as_deref().unwrap_or(""),
                "{}",
                diagnostic.message
            ),
            Severity::Error => tracing::error!(
                kind = ?diagnostic.kind,
                subject = diagnostic.subject.as_deref().unwrap_or(""),
                "{}",
                diagnostic.message
            ),
        }
        self.entries.push(diagnostic);
    }

    /// Record a warning
    pub fn warning(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.push(Diagnostic::new(Severity::Warning, kind, message));
    }

    /// Record an error that did not abort the batch
    pub fn error(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.push(Diagnostic::new(Severity::Error, kind, message));
    }

    /// Move all entries of another accumulator into this one
    pub fn extend(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|d| d.severity == Severity::Error)
    }

    /// Number of entries of one kind
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
