//! The parsed value tree.
//!
//! A [`Value`] is a tagged union over the five kinds the format supports.
//! Tables and lists preserve insertion order and are looked up by linear
//! scan rather than through a hash map, so that iteration and lookup
//! always agree with declaration order.

use kevs_util::AccessError;

/// One parsed value: a leaf (string/integer/boolean) or a nested
/// collection (list/table).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Boolean(bool),
    List(List),
    Table(Table),
}

impl Value {
    /// A short name for this value's kind, used in `AccessError::WrongKind`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::String(_) => "a string",
            Value::Integer(_) => "an integer",
            Value::Boolean(_) => "a boolean",
            Value::List(_) => "a list",
            Value::Table(_) => "a table",
        }
    }

    pub fn as_str(&self) -> Result<&str, AccessError> {
        match self {
            Value::String(s) => Ok(s.as_str()),
            other => Err(AccessError::WrongKind(other.kind_name())),
        }
    }

    pub fn as_int(&self) -> Result<i64, AccessError> {
        match self {
            Value::Integer(n) => Ok(*n),
            other => Err(AccessError::WrongKind(other.kind_name())),
        }
    }

    pub fn as_bool(&self) -> Result<bool, AccessError> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(AccessError::WrongKind(other.kind_name())),
        }
    }

    pub fn as_list(&self) -> Result<&List, AccessError> {
        match self {
            Value::List(l) => Ok(l),
            other => Err(AccessError::WrongKind(other.kind_name())),
        }
    }

    pub fn as_table(&self) -> Result<&Table, AccessError> {
        match self {
            Value::Table(t) => Ok(t),
            other => Err(AccessError::WrongKind(other.kind_name())),
        }
    }
}

/// An ordered, possibly heterogeneous sequence of values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    pub(crate) fn new() -> Self {
        List { items: Vec::new() }
    }

    pub(crate) fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Value, AccessError> {
        self.items.get(index).ok_or(AccessError::IndexOutOfBounds)
    }

    pub fn get_string(&self, index: usize) -> Result<&str, AccessError> {
        self.get(index)?.as_str()
    }

    pub fn get_int(&self, index: usize) -> Result<i64, AccessError> {
        self.get(index)?.as_int()
    }

    pub fn get_bool(&self, index: usize) -> Result<bool, AccessError> {
        self.get(index)?.as_bool()
    }

    pub fn get_list(&self, index: usize) -> Result<&List, AccessError> {
        self.get(index)?.as_list()
    }

    pub fn get_table(&self, index: usize) -> Result<&Table, AccessError> {
        self.get(index)?.as_table()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// An ordered set of key/value entries with unique keys, the root type
/// every successfully parsed document produces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    entries: Vec<(String, Value)>,
}

impl Table {
    pub(crate) fn new() -> Self {
        Table {
            entries: Vec::new(),
        }
    }

    /// Inserts `key`/`value`, failing if `key` already exists in this table.
    pub(crate) fn insert(&mut self, key: String, value: Value) -> Result<(), String> {
        if self.has(&key) {
            return Err(key);
        }
        self.entries.push((key, value));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn get(&self, key: &str) -> Result<&Value, AccessError> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or(AccessError::KeyNotFound)
    }

    pub fn get_string(&self, key: &str) -> Result<&str, AccessError> {
        self.get(key)?.as_str()
    }

    pub fn get_int(&self, key: &str) -> Result<i64, AccessError> {
        self.get(key)?.as_int()
    }

    pub fn get_bool(&self, key: &str) -> Result<bool, AccessError> {
        self.get(key)?.as_bool()
    }

    pub fn get_list(&self, key: &str) -> Result<&List, AccessError> {
        self.get(key)?.as_list()
    }

    pub fn get_table(&self, key: &str) -> Result<&Table, AccessError> {
        self.get(key)?.as_table()
    }

    /// Iterates entries in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, (String, Value)> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a (String, Value);
    type IntoIter = std::slice::Iter<'a, (String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
