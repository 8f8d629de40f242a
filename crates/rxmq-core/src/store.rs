//! Access to the host's variable pool.
//!
//! The engine never sees how a host keeps its variables. It asks for a value
//! by full dotted path and hands values back the same way.

use std::collections::BTreeMap;

/// A pool of named variables holding byte strings.
///
/// `get` returns `None` when the variable does not exist, which is distinct
/// from a variable holding an empty value. `set` reports whether the host
/// accepted the write.
pub trait VariableStore {
    fn get(&self, path: &str) -> Option<Vec<u8>>;

    fn set(&mut self, path: &str, value: &[u8]) -> bool;
}

impl<T: VariableStore + ?Sized> VariableStore for &mut T {
    fn get(&self, path: &str) -> Option<Vec<u8>> {
        (**self).get(path)
    }

    fn set(&mut self, path: &str, value: &[u8]) -> bool {
        (**self).set(path, value)
    }
}

/// True when `path` names a stem rather than a plain variable.
#[must_use]
pub fn is_stem(path: &str) -> bool {
    path.ends_with('.')
}

/// Full variable name of `tag` under `stem`.
#[must_use]
pub fn field_path(stem: &str, tag: &str) -> String {
    let mut path = String::with_capacity(stem.len() + tag.len());
    path.push_str(stem);
    path.push_str(tag);
    path
}

/// In-process store backed by an ordered map.
///
/// Used by the CLI and by tests; iteration is in path order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    vars: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a text value.
    pub fn set_str(&mut self, path: &str, value: &str) {
        self.vars.insert(path.to_string(), value.as_bytes().to_vec());
    }

    /// Value of `path` as text, with invalid UTF-8 replaced.
    #[must_use]
    pub fn get_str(&self, path: &str) -> Option<String> {
        self.vars
            .get(path)
            .map(|value| String::from_utf8_lossy(value).into_owned())
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.vars.contains_key(path)
    }

    pub fn remove(&mut self, path: &str) -> Option<Vec<u8>> {
        self.vars.remove(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.vars
            .iter()
            .map(|(path, value)| (path.as_str(), value.as_slice()))
    }

    /// Variables whose path starts with `prefix`, in path order.
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a [u8])> {
        self.vars
            .range(prefix.to_string()..)
            .take_while(move |(path, _)| path.starts_with(prefix))
            .map(|(path, value)| (path.as_str(), value.as_slice()))
    }
}

impl VariableStore for MemoryStore {
    fn get(&self, path: &str) -> Option<Vec<u8>> {
        self.vars.get(path).cloned()
    }

    fn set(&mut self, path: &str, value: &[u8]) -> bool {
        self.vars.insert(path.to_string(), value.to_vec());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty_are_distinct() {
        let mut store = MemoryStore::new();
        store.set_str("MD.PRI", "");
        assert_eq!(store.get("MD.PRI"), Some(Vec::new()));
        assert_eq!(store.get("MD.PER"), None);
    }

    #[test]
    fn test_with_prefix_is_ordered_and_bounded() {
        let mut store = MemoryStore::new();
        store.set_str("OUT.B", "2");
        store.set_str("OUT.A", "1");
        store.set_str("OUTER.X", "no");
        store.set_str("IN.A", "no");

        let paths: Vec<&str> = store.with_prefix("OUT.").map(|(path, _)| path).collect();
        assert_eq!(paths, vec!["OUT.A", "OUT.B"]);
    }

    #[test]
    fn test_paths() {
        assert!(is_stem("MD."));
        assert!(!is_stem("MYQUEUE"));
        assert_eq!(field_path("MD.", "PRI"), "MD.PRI");
        assert_eq!(field_path("", "PRI"), "PRI");
    }
}
