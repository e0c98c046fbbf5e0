//! The configuration tree validators read from
//!
//! [`Config`] is a read-only view of a whole resource configuration. Its two
//! queries are what cross-attribute validators need: expand a
//! [`PathExpression`] into the concrete paths present in the tree, and fetch
//! the value stored at one of those paths.
//!
//! # Example
//!
//! ```rust
//! use attr_validators::{Config, Value};
//! use attr_validators::path::{Path, PathExpression};
//!
//! let config = Config::new([
//!     ("mode", Value::string("tls")),
//!     ("rules", Value::list([
//!         Value::object([("port", Value::Int64(443))]),
//!         Value::object([("port", Value::Null)]),
//!     ])),
//! ]);
//!
//! let ports = config
//!     .path_matches(&PathExpression::match_root("rules").at_any_list_index().at_name("port"))
//!     .unwrap();
//! assert_eq!(ports.len(), 2);
//! assert_eq!(ports[0].to_string(), "rules[0].port");
//!
//! assert_eq!(config.get_attribute(&ports[0]).unwrap(), &Value::Int64(443));
//! assert!(config.get_attribute(&ports[1]).unwrap().is_null());
//! assert!(config.get_attribute(&Path::root("missing")).is_err());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::path::{ExpressionStep, Path, PathExpression, PathStep};
use crate::value::{Value, ValueKind};

static NULL: Value = Value::Null;
static UNKNOWN: Value = Value::Unknown;

/// Errors returned by [`Config`] queries.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The expression cannot select anything.
    InvalidExpression {
        /// The offending expression, rendered.
        expression: String,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// No attribute, element or key exists at the path.
    AttributeNotFound {
        /// The requested path.
        path: Path,
    },
    /// A path step does not fit the kind of the value it is applied to.
    StepMismatch {
        /// The requested path.
        path: Path,
        /// The step that could not be applied.
        step: String,
        /// Kind of the value the step was applied to.
        found: Option<ValueKind>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidExpression { expression, reason } => {
                write!(f, "invalid path expression {expression:?}: {reason}")
            }
            ConfigError::AttributeNotFound { path } => {
                write!(f, "no attribute found at path {path}")
            }
            ConfigError::StepMismatch { path, step, found } => match found {
                Some(kind) => write!(f, "cannot apply step {step} to {kind} value at path {path}"),
                None => write!(f, "cannot apply step {step} at path {path}"),
            },
        }
    }
}

impl std::error::Error for ConfigError {}

/// A read-only configuration tree rooted at an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    root: Value,
}

impl Config {
    /// A configuration without attributes.
    pub const fn empty() -> Self {
        Self {
            root: Value::Object(BTreeMap::new()),
        }
    }

    /// A configuration with the given top-level attributes.
    pub fn new<I, K, V>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            root: Value::object(attributes),
        }
    }

    /// Wrap an arbitrary root value.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// The root value.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Every concrete path in the tree selected by `expression`, in tree order.
    ///
    /// Null and unknown nodes have no children, so an expression reaching
    /// below one of them matches nothing there.
    pub fn path_matches(&self, expression: &PathExpression) -> Result<Vec<Path>, ConfigError> {
        let resolved = expression
            .resolve()
            .ok_or_else(|| ConfigError::InvalidExpression {
                expression: expression.to_string(),
                reason: "parent step above the configuration root",
            })?;
        if resolved.steps().is_empty() {
            return Err(ConfigError::InvalidExpression {
                expression: expression.to_string(),
                reason: "expression selects no attribute",
            });
        }

        let mut matches = Vec::new();
        collect_matches(&self.root, Path::empty(), resolved.steps(), &mut matches);
        Ok(matches)
    }

    /// The value stored at `path`.
    ///
    /// Set elements are looked up by value equality. A float `NaN` element is
    /// never equal to itself, so [`path_matches`](Self::path_matches) can list
    /// it but it cannot be fetched and yields [`ConfigError::AttributeNotFound`].
    pub fn get_attribute(&self, path: &Path) -> Result<&Value, ConfigError> {
        let mut node = &self.root;
        for step in path.steps() {
            node = match (node, step) {
                (Value::Null, _) => return Ok(&NULL),
                (Value::Unknown, _) => return Ok(&UNKNOWN),
                (Value::Object(attributes), PathStep::AttributeName(name)) => attributes.get(name),
                (Value::List(elements), PathStep::ElementKeyInt(index)) => elements.get(*index),
                (Value::Map(entries), PathStep::ElementKeyString(key)) => entries.get(key),
                (Value::Set(elements), PathStep::ElementKeyValue(value)) => {
                    elements.iter().find(|element| *element == value)
                }
                (other, step) => {
                    return Err(ConfigError::StepMismatch {
                        path: path.clone(),
                        step: step.to_string(),
                        found: other.kind(),
                    })
                }
            }
            .ok_or_else(|| ConfigError::AttributeNotFound { path: path.clone() })?;
        }
        Ok(node)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

fn children(node: &Value) -> Vec<(PathStep, &Value)> {
    match node {
        Value::Object(attributes) => attributes
            .iter()
            .map(|(name, child)| (PathStep::AttributeName(name.clone()), child))
            .collect(),
        Value::Map(entries) => entries
            .iter()
            .map(|(key, child)| (PathStep::ElementKeyString(key.clone()), child))
            .collect(),
        Value::List(elements) => elements
            .iter()
            .enumerate()
            .map(|(index, child)| (PathStep::ElementKeyInt(index), child))
            .collect(),
        Value::Set(elements) => elements
            .iter()
            .map(|child| (PathStep::ElementKeyValue(child.clone()), child))
            .collect(),
        _ => Vec::new(),
    }
}

fn collect_matches(node: &Value, at: Path, steps: &[ExpressionStep], out: &mut Vec<Path>) {
    let Some((step, rest)) = steps.split_first() else {
        out.push(at);
        return;
    };
    for (child_step, child) in children(node) {
        if step.matches(&child_step) {
            collect_matches(child, at.clone().with_step(child_step), rest, out);
        }
    }
}
