use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A semantic value handed between grammar actions and the tree builder.
///
/// Each production reduces to exactly one of these variants. Scalars copy;
/// [`Array`](Value::Array) and [`Dict`](Value::Dict) are cheap handles onto
/// shared storage, so a node can keep growing after it has been embedded in
/// its parent (clause accumulation relies on this). [`Json`](Value::Json)
/// carries an already-encoded document value through untouched.
///
/// # Examples
///
/// ```
/// use n1ql_json::Value;
///
/// let null = Value::Null;
/// let flag = Value::from(true);
/// let count = Value::from(42i64);
/// let ratio = Value::from(0.5);
/// let path = Value::from(".address.city");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An explicit NULL literal (distinct from "no value supplied", which is
    /// `Option::<Value>::None` at the builder boundary)
    Null,

    /// Boolean literal
    Bool(bool),

    /// 64-bit signed integer literal
    Int(i64),

    /// Floating-point literal
    Double(f64),

    /// UTF-8 string: literal text, an operator name, or a path reference
    /// depending on where the builder places it
    String(String),

    /// An already-encoded document value, passed through unchanged
    Json(serde_json::Value),

    /// Mutable array node
    Array(MutableArray),

    /// Mutable dict node
    Dict(MutableDict),
}

impl Value {
    /// Human-readable variant name, used in contract-violation messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Json(_) => "json",
            Value::Array(_) => "array",
            Value::Dict(_) => "dict",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Double(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&MutableArray> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&MutableDict> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl From<MutableArray> for Value {
    fn from(arr: MutableArray) -> Self {
        Value::Array(arr)
    }
}

impl From<MutableDict> for Value {
    fn from(dict: MutableDict) -> Self {
        Value::Dict(dict)
    }
}

/// An insertion-ordered sequence of value slots.
///
/// Cloning hands out another handle onto the same slots, which is how a node
/// stays growable after being attached to a parent. Keeping the overall tree
/// a strict tree (one owning parent per node) is the grammar driver's
/// obligation, not enforced here.
#[derive(Clone, Default)]
pub struct MutableArray(Rc<RefCell<Vec<Value>>>);

impl MutableArray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Clone of the slot at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Installs `value` at `index`, null-padding any gap this creates.
    pub fn set(&self, index: usize, value: Value) {
        let mut slots = self.0.borrow_mut();
        if index >= slots.len() {
            slots.resize(index + 1, Value::Null);
        }
        slots[index] = value;
    }

    pub fn append(&self, value: Value) {
        self.0.borrow_mut().push(value);
    }

    pub fn append_null(&self) {
        self.append(Value::Null);
    }

    /// Widens the array by `count` null slots starting at `index`; slots at
    /// or above `index` shift up.
    pub fn insert_nulls(&self, index: usize, count: usize) {
        let mut slots = self.0.borrow_mut();
        let len = slots.len();
        assert!(index <= len, "insert at {index} past end of array (len {len})");
        slots.splice(index..index, std::iter::repeat(Value::Null).take(count));
    }

    /// Clones the slots out as a plain vector.
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }
}

impl PartialEq for MutableArray {
    fn eq(&self, other: &Self) -> bool {
        *self.0.borrow() == *other.0.borrow()
    }
}

impl fmt::Debug for MutableArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.borrow().iter()).finish()
    }
}

/// A string-keyed mapping of value slots, last write wins.
///
/// Same handle semantics and single-parent obligation as [`MutableArray`].
#[derive(Clone, Default)]
pub struct MutableDict(Rc<RefCell<HashMap<String, Value>>>);

impl MutableDict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Clone of the slot under `key`, if present.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().contains_key(key)
    }

    /// Installs `value` under `key`, replacing any existing entry.
    pub fn set(&self, key: &str, value: Value) {
        self.0.borrow_mut().insert(key.to_string(), value);
    }

    /// Entries cloned out in arbitrary map order.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.0
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl PartialEq for MutableDict {
    fn eq(&self, other: &Self) -> bool {
        *self.0.borrow() == *other.0.borrow()
    }
}

impl fmt::Debug for MutableDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.borrow().iter()).finish()
    }
}
