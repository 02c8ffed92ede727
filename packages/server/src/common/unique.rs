use indexmap::IndexSet;

/// Collects names without duplicates, keeping the order they were first seen.
#[derive(Debug, Default, Clone)]
pub struct UniqueNames(IndexSet<String>);

impl UniqueNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the name was not already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for UniqueNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut names = Self::new();
        for name in iter {
            names.insert(name);
        }
        names
    }
}
