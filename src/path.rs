//! Attribute paths and path expressions
//!
//! A [`Path`] identifies exactly one location in a configuration tree, for
//! example `foobar[0].bar1`. A [`PathExpression`] is a pattern that may match
//! many paths: it can contain wildcards over list, map and set elements, and
//! parent steps (`<`) that walk back up from the attribute being validated.
//!
//! # Example
//!
//! ```rust
//! use attr_validators::path::{Path, PathExpression};
//!
//! let current = Path::root("foobar").at_list_index(0).at_name("bar2");
//! let sibling = PathExpression::match_relative().at_parent().at_name("bar1");
//!
//! let merged = current.expression().merge(&sibling);
//! assert_eq!(merged.to_string(), "foobar[0].bar2.<.bar1");
//!
//! let resolved = merged.resolve().expect("stays below the root");
//! assert_eq!(resolved.to_string(), "foobar[0].bar1");
//! assert!(resolved.matches(&Path::root("foobar").at_list_index(0).at_name("bar1")));
//! ```

use std::fmt;

use crate::value::Value;

/// One step of a concrete [`Path`].
#[derive(Debug, Clone, PartialEq)]
pub enum PathStep {
    /// An object attribute name.
    AttributeName(String),
    /// A list element index.
    ElementKeyInt(usize),
    /// A map element key.
    ElementKeyString(String),
    /// A set element, identified by its value.
    ElementKeyValue(Value),
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::AttributeName(name) => f.write_str(name),
            PathStep::ElementKeyInt(index) => write!(f, "[{index}]"),
            PathStep::ElementKeyString(key) => write!(f, "[{key:?}]"),
            PathStep::ElementKeyValue(value) => write!(f, "[Value({value})]"),
        }
    }
}

/// The exact location of one attribute in a configuration tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    /// The empty path, pointing at the configuration root.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A path to a top-level attribute.
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            steps: vec![PathStep::AttributeName(name.into())],
        }
    }

    /// Descend into an object attribute.
    pub fn at_name(mut self, name: impl Into<String>) -> Self {
        self.steps.push(PathStep::AttributeName(name.into()));
        self
    }

    /// Descend into a list element.
    pub fn at_list_index(mut self, index: usize) -> Self {
        self.steps.push(PathStep::ElementKeyInt(index));
        self
    }

    /// Descend into a map element.
    pub fn at_map_key(mut self, key: impl Into<String>) -> Self {
        self.steps.push(PathStep::ElementKeyString(key.into()));
        self
    }

    /// Descend into a set element.
    pub fn at_set_value(mut self, value: impl Into<Value>) -> Self {
        self.steps.push(PathStep::ElementKeyValue(value.into()));
        self
    }

    /// Append an already-built step.
    pub fn with_step(mut self, step: PathStep) -> Self {
        self.steps.push(step);
        self
    }

    /// The path one step up, or `None` at the root.
    pub fn parent(&self) -> Option<Path> {
        let (_, rest) = self.steps.split_last()?;
        Some(Path {
            steps: rest.to_vec(),
        })
    }

    /// The steps of this path.
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true for the root path.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// An absolute expression matching exactly this path.
    pub fn expression(&self) -> PathExpression {
        PathExpression {
            steps: self.steps.iter().map(ExpressionStep::exact).collect(),
            root: true,
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 && matches!(step, PathStep::AttributeName(_)) {
                f.write_str(".")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

/// Paths serialize as their rendering, e.g. `"foobar[0].bar1"`.
#[cfg(feature = "serde")]
impl serde::Serialize for Path {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One step of a [`PathExpression`].
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionStep {
    /// Exactly this attribute name.
    AttributeNameExact(String),
    /// Exactly this list index.
    ElementKeyIntExact(usize),
    /// Any list index.
    ElementKeyIntAny,
    /// Exactly this map key.
    ElementKeyStringExact(String),
    /// Any map key.
    ElementKeyStringAny,
    /// Exactly this set element.
    ElementKeyValueExact(Value),
    /// Any set element.
    ElementKeyValueAny,
    /// Step back to the parent of the previous step.
    Parent,
}

impl ExpressionStep {
    fn exact(step: &PathStep) -> Self {
        match step {
            PathStep::AttributeName(name) => ExpressionStep::AttributeNameExact(name.clone()),
            PathStep::ElementKeyInt(index) => ExpressionStep::ElementKeyIntExact(*index),
            PathStep::ElementKeyString(key) => ExpressionStep::ElementKeyStringExact(key.clone()),
            PathStep::ElementKeyValue(value) => ExpressionStep::ElementKeyValueExact(value.clone()),
        }
    }

    /// Returns true if this step selects the given concrete step.
    pub fn matches(&self, step: &PathStep) -> bool {
        match (self, step) {
            (ExpressionStep::AttributeNameExact(want), PathStep::AttributeName(got)) => want == got,
            (ExpressionStep::ElementKeyIntExact(want), PathStep::ElementKeyInt(got)) => want == got,
            (ExpressionStep::ElementKeyIntAny, PathStep::ElementKeyInt(_)) => true,
            (ExpressionStep::ElementKeyStringExact(want), PathStep::ElementKeyString(got)) => {
                want == got
            }
            (ExpressionStep::ElementKeyStringAny, PathStep::ElementKeyString(_)) => true,
            (ExpressionStep::ElementKeyValueExact(want), PathStep::ElementKeyValue(got)) => {
                want == got
            }
            (ExpressionStep::ElementKeyValueAny, PathStep::ElementKeyValue(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for ExpressionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionStep::AttributeNameExact(name) => f.write_str(name),
            ExpressionStep::ElementKeyIntExact(index) => write!(f, "[{index}]"),
            ExpressionStep::ElementKeyIntAny => f.write_str("[*]"),
            ExpressionStep::ElementKeyStringExact(key) => write!(f, "[{key:?}]"),
            ExpressionStep::ElementKeyStringAny => f.write_str("[\"*\"]"),
            ExpressionStep::ElementKeyValueExact(value) => write!(f, "[Value({value})]"),
            ExpressionStep::ElementKeyValueAny => f.write_str("[Value(*)]"),
            ExpressionStep::Parent => f.write_str("<"),
        }
    }
}

/// A pattern selecting zero or more paths of a configuration tree.
///
/// Absolute expressions start at the configuration root. Relative
/// expressions only make sense once [merged](PathExpression::merge) onto the
/// expression of the attribute being validated.
#[derive(Debug, Clone, PartialEq)]
pub struct PathExpression {
    steps: Vec<ExpressionStep>,
    root: bool,
}

impl PathExpression {
    /// An absolute expression starting at a top-level attribute.
    pub fn match_root(name: impl Into<String>) -> Self {
        Self {
            steps: vec![ExpressionStep::AttributeNameExact(name.into())],
            root: true,
        }
    }

    /// An empty relative expression.
    pub fn match_relative() -> Self {
        Self {
            steps: Vec::new(),
            root: false,
        }
    }

    fn push(mut self, step: ExpressionStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Select an object attribute.
    pub fn at_name(self, name: impl Into<String>) -> Self {
        self.push(ExpressionStep::AttributeNameExact(name.into()))
    }

    /// Select one list element.
    pub fn at_list_index(self, index: usize) -> Self {
        self.push(ExpressionStep::ElementKeyIntExact(index))
    }

    /// Select every list element.
    pub fn at_any_list_index(self) -> Self {
        self.push(ExpressionStep::ElementKeyIntAny)
    }

    /// Select one map element.
    pub fn at_map_key(self, key: impl Into<String>) -> Self {
        self.push(ExpressionStep::ElementKeyStringExact(key.into()))
    }

    /// Select every map element.
    pub fn at_any_map_key(self) -> Self {
        self.push(ExpressionStep::ElementKeyStringAny)
    }

    /// Select one set element.
    pub fn at_set_value(self, value: impl Into<Value>) -> Self {
        self.push(ExpressionStep::ElementKeyValueExact(value.into()))
    }

    /// Select every set element.
    pub fn at_any_set_value(self) -> Self {
        self.push(ExpressionStep::ElementKeyValueAny)
    }

    /// Step back up to the parent.
    pub fn at_parent(self) -> Self {
        self.push(ExpressionStep::Parent)
    }

    /// Returns true for expressions anchored at the configuration root.
    pub fn is_root(&self) -> bool {
        self.root
    }

    /// The raw steps, parent steps included.
    pub fn steps(&self) -> &[ExpressionStep] {
        &self.steps
    }

    /// Combine with another expression.
    ///
    /// An absolute `other` replaces `self`; a relative one is appended to it.
    pub fn merge(&self, other: &PathExpression) -> PathExpression {
        if other.root {
            return other.clone();
        }
        let mut merged = self.clone();
        merged.steps.extend(other.steps.iter().cloned());
        merged
    }

    /// Fold parent steps into the steps before them.
    ///
    /// Returns `None` when a parent step climbs above the root.
    pub fn resolve(&self) -> Option<PathExpression> {
        let mut steps = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            if let ExpressionStep::Parent = step {
                steps.pop()?;
            } else {
                steps.push(step.clone());
            }
        }
        Some(PathExpression {
            steps,
            root: self.root,
        })
    }

    /// Returns true if the expression selects exactly this path.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(resolved) = self.resolve() else {
            return false;
        };
        resolved.steps.len() == path.len()
            && resolved
                .steps
                .iter()
                .zip(path.steps())
                .all(|(want, got)| want.matches(got))
    }

    /// Returns true if the path is a strict ancestor of a path the
    /// expression could select.
    pub fn matches_parent(&self, path: &Path) -> bool {
        let Some(resolved) = self.resolve() else {
            return false;
        };
        path.len() < resolved.steps.len()
            && resolved
                .steps
                .iter()
                .zip(path.steps())
                .all(|(want, got)| want.matches(got))
    }
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            let dotted = matches!(
                step,
                ExpressionStep::AttributeNameExact(_) | ExpressionStep::Parent
            );
            if i > 0 && dotted {
                f.write_str(".")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_display() {
        let path = Path::root("foobar").at_list_index(0).at_name("bar1");
        assert_eq!(path.to_string(), "foobar[0].bar1");

        let path = Path::root("tags").at_map_key("env");
        assert_eq!(path.to_string(), "tags[\"env\"]");

        let path = Path::root("ports").at_set_value(80i64);
        assert_eq!(path.to_string(), "ports[Value(80)]");

        assert_eq!(Path::empty().to_string(), "");
    }

    #[test]
    fn test_path_parent() {
        let path = Path::root("a").at_name("b");
        assert_eq!(path.parent(), Some(Path::root("a")));
        assert_eq!(Path::empty().parent(), None);
    }

    #[test]
    fn test_expression_display() {
        let expr = PathExpression::match_root("foobar")
            .at_any_list_index()
            .at_name("bar1");
        assert_eq!(expr.to_string(), "foobar[*].bar1");

        let expr = PathExpression::match_relative().at_parent().at_name("bar");
        assert_eq!(expr.to_string(), "<.bar");
    }

    #[test]
    fn test_merge_absolute_replaces() {
        let current = PathExpression::match_root("bar");
        let other = PathExpression::match_root("foo");
        assert_eq!(current.merge(&other), other);
    }

    #[test]
    fn test_merge_relative_appends() {
        let current = Path::root("list").at_list_index(2).at_name("a").expression();
        let other = PathExpression::match_relative().at_parent().at_name("b");
        let resolved = current.merge(&other).resolve().expect("valid");
        assert_eq!(resolved.to_string(), "list[2].b");
        assert!(resolved.is_root());
    }

    #[test]
    fn test_resolve_above_root() {
        let expr = PathExpression::match_root("a").at_parent().at_parent();
        assert_eq!(expr.resolve(), None);
        assert_eq!(PathExpression::match_relative().at_parent().resolve(), None);
    }

    #[test]
    fn test_wildcard_matching() {
        let expr = PathExpression::match_root("items")
            .at_any_list_index()
            .at_name("id");
        assert!(expr.matches(&Path::root("items").at_list_index(0).at_name("id")));
        assert!(expr.matches(&Path::root("items").at_list_index(9).at_name("id")));
        assert!(!expr.matches(&Path::root("items").at_map_key("0").at_name("id")));
        assert!(!expr.matches(&Path::root("items").at_list_index(0)));
    }

    #[test]
    fn test_matches_parent() {
        let expr = PathExpression::match_root("items")
            .at_any_list_index()
            .at_name("id");
        assert!(expr.matches_parent(&Path::empty()));
        assert!(expr.matches_parent(&Path::root("items")));
        assert!(expr.matches_parent(&Path::root("items").at_list_index(3)));
        assert!(!expr.matches_parent(&Path::root("other")));
        assert!(!expr.matches_parent(&Path::root("items").at_list_index(3).at_name("id")));
    }

    #[test]
    fn test_path_expression_round_trip() {
        let path = Path::root("m").at_map_key("k").at_set_value("v");
        assert!(path.expression().matches(&path));
    }
}
