/// The set of package names pulled out of history

use std::collections::BTreeSet;
use std::fmt;

/// Deduplicated package names, kept sorted so output is stable run to run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageSet {
    names: BTreeSet<String>,
}

impl PackageSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend_tokens<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.names.extend(tokens);
    }

    /// Drop the "" that naive space splitting leaves behind
    pub fn remove_empty(&mut self) {
        self.names.remove("");
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl fmt::Display for PackageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self.iter().collect::<Vec<_>>().join(" ");
        write!(f, "{}", joined)
    }
}
