//! Post-parse rewrite for correlated bindings.
//!
//! `ANY x IN ... SATISFIES ...` introduces a loop variable: inside the
//! SATISFIES body, `.x.whatever` no longer names a document property but the
//! bound variable. Once the body is fully built, this pass walks it and
//! turns the leading `.` of every reference rooted at `x` into `?`.

use crate::text::has_path_prefix;
use crate::value::{MutableArray, Value};

/// Retags property references rooted at `var` into variable references
/// throughout `expr`.
///
/// Only element-0 strings carry path/operator semantics, so only those are
/// candidates; strings in operand position are data and stay untouched. The
/// segment-aligned prefix test keeps `x` from matching `xs`.
pub fn substitute_variable(var: &str, expr: &MutableArray) {
    let var_with_dot = format!(".{var}");
    substitute(&var_with_dot, expr);
}

fn substitute(var_with_dot: &str, expr: &MutableArray) {
    for index in 0..expr.len() {
        let Some(item) = expr.get(index) else { break };
        if index == 0 {
            if let Value::String(path) = &item {
                if has_path_prefix(path, var_with_dot) {
                    // Change '.xxx' to '?xxx', replacing the slot wholesale.
                    let mut retagged = path.clone();
                    retagged.replace_range(..1, "?");
                    expr.set(0, Value::String(retagged));
                }
            }
        } else if let Value::Array(operation) = &item {
            substitute(var_with_dot, operation);
        }
    }
}
