//! Line-oriented `.env` parsing.

/// Insertion-ordered key/value table parsed from a `.env` file.
///
/// A repeated key overwrites the earlier value in place, so the entry keeps
/// the position of the key's first appearance. Values are opaque strings
/// end to end; nothing is unquoted, escaped, or coerced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvTable {
    entries: Vec<(String, String)>,
}

impl EnvTable {
    pub fn insert(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in iteration order (first appearance of each key).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parse `.env` text into a table.
///
/// Each line is handled independently: trimmed, skipped if blank or
/// `#`-prefixed, and otherwise split on the first `=` into a trimmed key and
/// a trimmed value (so values may themselves contain `=`). Lines without an
/// `=` are silently ignored.
pub fn parse(contents: &str) -> EnvTable {
    let mut table = EnvTable::default();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            table.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    table
}
