//! Rendering of value lists inside descriptions.

use crate::value::Value;

/// `"a", "b", "c"`: each value rendered as-is, comma separated.
pub(crate) fn plain_list(values: &[Value]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `` `a`, `b` or `c` ``: back-quoted, string quotes stripped, "or" before the last.
pub(crate) fn markdown_list(values: &[Value]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("`{}`", v.unquoted())).collect();
    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {last}", rest.join(", ")),
    }
}
