//! Diagnostics reported by validators
//!
//! Validators never fail with a Rust error. Whatever they find is appended
//! to a [`Diagnostics`] collector as a [`Diagnostic`]: a severity, a short
//! summary, a longer detail and optionally the attribute path it concerns.

use std::fmt;

use crate::path::Path;
use crate::Semigroup;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Severity {
    /// Blocks the plan.
    Error,
    /// Reported, but does not block.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("Error"),
            Severity::Warning => f.write_str("Warning"),
        }
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    /// Severity of the finding.
    pub severity: Severity,
    /// One-line summary.
    pub summary: String,
    /// Full explanation.
    pub detail: String,
    /// The attribute the finding is attached to, if any.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub path: Option<Path>,
}

impl Diagnostic {
    /// An error not tied to an attribute.
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            path: None,
        }
    }

    /// A warning not tied to an attribute.
    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(summary, detail)
        }
    }

    /// An error attached to `path`.
    pub fn attribute_error(
        path: Path,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            path: Some(path),
            ..Self::error(summary, detail)
        }
    }

    /// A warning attached to `path`.
    pub fn attribute_warning(
        path: Path,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            path: Some(path),
            ..Self::warning(summary, detail)
        }
    }

    /// Returns true for error severity.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(
                f,
                "{} at {}: {}: {}",
                self.severity, path, self.summary, self.detail
            ),
            None => write!(f, "{}: {}: {}", self.severity, self.summary, self.detail),
        }
    }
}

/// An ordered collection of diagnostics.
///
/// # Example
///
/// ```rust
/// use attr_validators::{Diagnostic, Diagnostics};
/// use attr_validators::path::Path;
///
/// let mut diags = Diagnostics::new();
/// diags.add_attribute_error(Path::root("port"), "Invalid TCP/UDP port", "the port must be between 1 and 65535: \"0\"");
/// diags.add_warning("Deprecated attribute", "use `ports` instead");
///
/// assert!(diags.has_error());
/// assert_eq!(diags.error_count(), 1);
/// assert!(diags.contains(&Diagnostic::warning("Deprecated attribute", "use `ports` instead")));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one diagnostic, unless an equal one is already present.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if !self.entries.contains(&diagnostic) {
            self.entries.push(diagnostic);
        }
    }

    /// Append every diagnostic of `other`, in order, skipping duplicates.
    pub fn append(&mut self, other: Diagnostics) {
        other.into_iter().for_each(|diagnostic| self.push(diagnostic));
    }

    /// Append an error not tied to an attribute.
    pub fn add_error(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(Diagnostic::error(summary, detail));
    }

    /// Append a warning not tied to an attribute.
    pub fn add_warning(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(Diagnostic::warning(summary, detail));
    }

    /// Append an error attached to `path`.
    pub fn add_attribute_error(
        &mut self,
        path: Path,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.push(Diagnostic::attribute_error(path, summary, detail));
    }

    /// Append a warning attached to `path`.
    pub fn add_attribute_warning(
        &mut self,
        path: Path,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.push(Diagnostic::attribute_warning(path, summary, detail));
    }

    /// Returns true if any entry is an error.
    pub fn has_error(&self) -> bool {
        self.entries.iter().any(Diagnostic::is_error)
    }

    /// Number of error entries.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// The error entries.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| d.is_error())
    }

    /// Returns true if an equal diagnostic is present.
    pub fn contains(&self, diagnostic: &Diagnostic) -> bool {
        self.entries.contains(diagnostic)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }
}

impl Semigroup for Diagnostics {
    fn combine(mut self, other: Self) -> Self {
        self.append(other);
        self
    }
}

impl From<Vec<Diagnostic>> for Diagnostics {
    fn from(entries: Vec<Diagnostic>) -> Self {
        entries.into_iter().collect()
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        let mut diagnostics = Self::new();
        iter.into_iter().for_each(|diagnostic| diagnostics.push(diagnostic));
        diagnostics
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
