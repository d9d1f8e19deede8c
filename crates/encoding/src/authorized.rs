//! In-memory `adb_keys` list
//!
//! One key line per entry, in the order they were added. Reading and
//! writing the file itself is left to the caller.

use core::fmt;
use core::str::FromStr;

use tracing::warn;

use crate::error::{Error, Result};
use crate::text::KeyLine;

/// Trusted keys, unique by binary record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizedKeys {
    keys: Vec<KeyLine>,
}

impl AuthorizedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the contents of an `adb_keys` file
    ///
    /// Blank lines and lines starting with `#` are skipped. The first
    /// malformed line fails the whole parse.
    pub fn parse(text: &str) -> Result<Self> {
        let mut keys = Self::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let key = KeyLine::parse(line).map_err(|e| {
                warn!(line = index + 1, error = %e, "rejected adb_keys entry");
                Error::AuthorizedKeys {
                    line: index + 1,
                    source: Box::new(e),
                }
            })?;
            keys.add(key);
        }
        Ok(keys)
    }

    /// Add a key; returns false if its record is already trusted
    pub fn add(&mut self, key: KeyLine) -> bool {
        if self.contains(key.record()) {
            return false;
        }
        self.keys.push(key);
        true
    }

    pub fn contains(&self, record: &[u8]) -> bool {
        self.find(record).is_some()
    }

    /// Identity stored with `record`
    pub fn find(&self, record: &[u8]) -> Option<&str> {
        self.keys
            .iter()
            .find(|key| key.record() == record)
            .map(KeyLine::identity)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyLine> {
        self.keys.iter()
    }

    /// Decode every entry as an ADB record and check its Montgomery constants
    ///
    /// Errors carry the 1-based position of the entry in the list.
    pub fn verify_all(&self) -> Result<()> {
        for (index, key) in self.keys.iter().enumerate() {
            key.decode()
                .and_then(|record| record.verify())
                .map_err(|e| Error::AuthorizedKeys {
                    line: index + 1,
                    source: Box::new(e),
                })?;
        }
        Ok(())
    }
}

impl fmt::Display for AuthorizedKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in &self.keys {
            writeln!(f, "{}", key)?;
        }
        Ok(())
    }
}

impl FromStr for AuthorizedKeys {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a AuthorizedKeys {
    type Item = &'a KeyLine;
    type IntoIter = core::slice::Iter<'a, KeyLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
