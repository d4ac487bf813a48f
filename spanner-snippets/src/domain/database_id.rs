use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SnippetsError};

const DATABASES_SEGMENT: &str = "/databases/";

/// Fully qualified database name, `<parent>/databases/<name>`.
///
/// The parent is everything before the last `/databases/` segment, so
/// `projects/p/instances/i/databases/db` splits into
/// `projects/p/instances/i` and `db`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatabaseId {
    full: String,
    split: usize,
}

impl DatabaseId {
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || SnippetsError::InvalidDatabaseId(s.to_string());

        if s.contains('\n') {
            return Err(invalid());
        }

        let (parent, name) = s.rsplit_once(DATABASES_SEGMENT).ok_or_else(invalid)?;
        if parent.is_empty() || name.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            full: s.to_string(),
            split: parent.len(),
        })
    }

    pub fn parent(&self) -> &str {
        &self.full[..self.split]
    }

    pub fn name(&self) -> &str {
        &self.full[self.split + DATABASES_SEGMENT.len()..]
    }
}

impl FromStr for DatabaseId {
    type Err = SnippetsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DatabaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full)
    }
}
