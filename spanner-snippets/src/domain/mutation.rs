use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int64(i64),
    String(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int64(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOp {
    /// Insert the row, or overwrite the named columns if the key exists.
    InsertOrUpdate,
}

/// A row-level write applied without SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub op: MutationOp,
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<Value>,
}

impl Mutation {
    pub fn insert_or_update(table: &str, columns: &[&str], values: Vec<Value>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self {
            op: MutationOp::InsertOrUpdate,
            table: table.to_string(),
            columns: columns.iter().map(ToString::to_string).collect(),
            values,
        }
    }
}
