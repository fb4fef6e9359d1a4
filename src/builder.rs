//! Grammar-action helpers that build the operation tree node by node.
//!
//! The grammar driver calls these as productions reduce, handing in the
//! values its subexpressions already reduced to. An optional production that
//! never fired arrives as `None`: a dict write with `None` is a no-op (the
//! key is never created), while an array slot given `None` panics — array
//! elements are positional and have no optional form.

use crate::value::{MutableArray, MutableDict, Value};

/// Installs an optional production result under `key`.
///
/// `None` means the clause never fired and leaves the dict untouched. An
/// explicit NULL literal arrives as `Some(Value::Null)` and is written like
/// any other value. Returns the same handle for chaining.
pub fn set_any(dict: &MutableDict, key: &str, value: Option<Value>) -> MutableDict {
    if let Some(value) = value {
        dict.set(key, value);
    }
    dict.clone()
}

/// Installs a value at `index`, null-padding any gap below it.
///
/// # Panics
///
/// Panics on `None`: an absent value in an array slot is a bug in the
/// grammar wiring, not a representable tree shape.
pub fn set_any_at(array: &MutableArray, index: usize, value: Option<Value>) -> MutableArray {
    match value {
        Some(value) => array.set(index, value),
        None => panic!("missing value for array slot {index}; array elements are never optional"),
    }
    array.clone()
}

/// Widens `array` by one slot at `index` and installs `value` there.
///
/// Used when a production must place an item ahead of already-built later
/// items, e.g. prepending a join condition.
pub fn insert_any(array: &MutableArray, index: usize, value: Option<Value>) -> MutableArray {
    array.insert_nulls(index, 1);
    set_any_at(array, index, value)
}

/// Appends `value` to the end of `array`.
///
/// This is how operands accumulate; same `None` contract as [`set_any_at`].
pub fn append_any(array: &MutableArray, value: Option<Value>) -> MutableArray {
    let index = array.len();
    array.append_null();
    set_any_at(array, index, value)
}

/// A fresh, empty array node.
pub fn array() -> MutableArray {
    MutableArray::new()
}

/// A single-element array node.
///
/// A string handed in here is plain data; it only takes on operator-name
/// meaning once [`op`] places it in element 0 of an operation node.
pub fn array_with<V: Into<Value>>(item: V) -> MutableArray {
    let a = array();
    a.append(item.into());
    a
}

/// A single-entry dict node.
pub fn dict_with<V: Into<Value>>(key: &str, item: V) -> MutableDict {
    let d = MutableDict::new();
    d.set(key, item.into());
    d
}

/// Builds an operation node: `[oper, operand, ...]`.
///
/// Operands land in iteration order. Downstream consumers read the array
/// positionally — operand 1 of a comparison is always the left side — so
/// callers pass operands in source left-to-right order.
pub fn op<I>(oper: &str, operands: I) -> MutableArray
where
    I: IntoIterator<Item = Value>,
{
    let node = array_with(oper);
    for operand in operands {
        node.append(operand);
    }
    node
}

/// Builds a binary operation node where the operator itself arrives as a
/// reduced token value, for productions matching a whole operator class.
///
/// # Panics
///
/// Panics when `oper` does not hold a string.
pub fn binary_op(left: Value, oper: Value, right: Value) -> MutableArray {
    let name = oper
        .as_str()
        .unwrap_or_else(|| panic!("binary operator token must be a string, got {}", oper.type_name()));
    op(name, [left, right])
}

/// Unary counterpart of [`binary_op`].
///
/// # Panics
///
/// Panics when `oper` does not hold a string.
pub fn unary_op(oper: Value, operand: Value) -> MutableArray {
    let name = oper
        .as_str()
        .unwrap_or_else(|| panic!("unary operator token must be a string, got {}", oper.type_name()));
    op(name, [operand])
}
