use std::collections::HashSet;

/// The characters a query is asked about, in the order the caller chose them.
///
/// Names are trimmed, blanks are ignored and repeats keep their first position. Names that
/// do not occur in the relation are allowed; they simply match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    characters: Vec<String>,
}

impl Selection {
    #[must_use]
    pub fn new<S: AsRef<str>>(characters: impl IntoIterator<Item = S>) -> Self {
        let mut seen = HashSet::new();
        let characters = characters
            .into_iter()
            .map(|c| c.as_ref().trim().to_string())
            .filter(|c| !c.is_empty() && seen.insert(c.clone()))
            .collect();

        Self { characters }
    }

    #[must_use]
    pub fn contains(&self, character: &str) -> bool {
        self.characters.iter().any(|c| c == character)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.characters.iter().map(String::as_str)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.characters.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}
