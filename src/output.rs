//! JSON encoding of a finished query tree.
//!
//! The execution engine consumes the translated query as JSON text. Output
//! is deterministic (dict keys are sorted) and comes in a compact form via
//! [`to_json()`] and a 2-space-indented form via [`to_json_pretty()`].

use crate::value::{MutableDict, Value};

pub struct JsonPrinter {
    pretty: bool,
}

impl JsonPrinter {
    pub fn new(pretty: bool) -> Self {
        JsonPrinter { pretty }
    }

    pub fn print(&self, value: &Value) -> String {
        self.print_value(value, 0)
    }

    fn print_value(&self, value: &Value, indent: usize) -> String {
        match value {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Double(n) => n.to_string(),
            Value::String(s) => format!("\"{}\"", self.escape_string(s)),
            // Pass-through values were encoded before they reached the tree;
            // re-encoding a serde_json::Value cannot fail.
            Value::Json(v) => serde_json::to_string(v).expect("embedded JSON value failed to encode"),
            Value::Array(arr) => self.print_array(&arr.to_vec(), indent),
            Value::Dict(dict) => self.print_dict(dict, indent),
        }
    }

    fn print_array(&self, arr: &[Value], indent: usize) -> String {
        if arr.is_empty() {
            return "[]".to_string();
        }

        if self.pretty {
            let mut result = "[\n".to_string();
            let items: Vec<String> = arr
                .iter()
                .map(|v| {
                    format!(
                        "{}{}",
                        self.indent(indent + 1),
                        self.print_value(v, indent + 1)
                    )
                })
                .collect();
            result.push_str(&items.join(",\n"));
            result.push('\n');
            result.push_str(&self.indent(indent));
            result.push(']');
            result
        } else {
            let items: Vec<String> = arr.iter().map(|v| self.print_value(v, indent)).collect();
            format!("[{}]", items.join(","))
        }
    }

    fn print_dict(&self, dict: &MutableDict, indent: usize) -> String {
        if dict.is_empty() {
            return "{}".to_string();
        }

        // Sort keys for deterministic output
        let mut entries = dict.entries();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        if self.pretty {
            let mut result = "{\n".to_string();
            let items: Vec<String> = entries
                .iter()
                .map(|(k, v)| {
                    format!(
                        "{}\"{}\": {}",
                        self.indent(indent + 1),
                        self.escape_string(k),
                        self.print_value(v, indent + 1)
                    )
                })
                .collect();
            result.push_str(&items.join(",\n"));
            result.push('\n');
            result.push_str(&self.indent(indent));
            result.push('}');
            result
        } else {
            let items: Vec<String> = entries
                .iter()
                .map(|(k, v)| {
                    format!("\"{}\":{}", self.escape_string(k), self.print_value(v, indent))
                })
                .collect();
            format!("{{{}}}", items.join(","))
        }
    }

    fn indent(&self, level: usize) -> String {
        "  ".repeat(level)
    }

    fn escape_string(&self, s: &str) -> String {
        s.chars()
            .flat_map(|c| match c {
                '"' => vec!['\\', '"'],
                '\\' => vec!['\\', '\\'],
                '\n' => vec!['\\', 'n'],
                '\r' => vec!['\\', 'r'],
                '\t' => vec!['\\', 't'],
                c if c.is_control() => {
                    // Unicode escape for control chars
                    format!("\\u{:04x}", c as u32).chars().collect()
                }
                c => vec![c],
            })
            .collect()
    }
}

// Convenience functions

/// Encodes a query tree as compact JSON, the wire form the execution engine
/// consumes.
///
/// # Examples
///
/// ```
/// use n1ql_json::{op, to_json, Value};
///
/// let node = op("=", [Value::from(".name"), Value::from("Bob")]);
/// assert_eq!(to_json(&Value::Array(node)), r#"["=",".name","Bob"]"#);
/// ```
pub fn to_json(value: &Value) -> String {
    JsonPrinter::new(false).print(value)
}

/// Encodes a query tree as 2-space-indented JSON for debugging and logs.
pub fn to_json_pretty(value: &Value) -> String {
    JsonPrinter::new(true).print(value)
}
