//! Assembling SQL text from optional fragments

/// Ordered list of fragments, each kept only when its condition holds.
///
/// ```
/// use pints_plugin_generator::clauses::Clauses;
///
/// let cols = Clauses::new()
///     .always("sample_id")
///     .when(false, "run_id")
///     .always("score")
///     .join(", ");
/// assert_eq!(cols, "sample_id, score");
/// ```
#[derive(Debug, Default, Clone)]
pub struct Clauses {
    fragments: Vec<String>,
}

impl Clauses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn always(self, fragment: impl Into<String>) -> Self {
        self.when(true, fragment)
    }

    pub fn when(mut self, condition: bool, fragment: impl Into<String>) -> Self {
        if condition {
            self.fragments.push(fragment.into());
        }
        self
    }

    /// Like [`Clauses::when`] but only builds the fragment if it is kept
    pub fn when_with<F>(mut self, condition: bool, fragment: F) -> Self
    where
        F: FnOnce() -> String,
    {
        if condition {
            self.fragments.push(fragment());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn join(&self, separator: &str) -> String {
        self.fragments.join(separator)
    }

    /// One fragment per line, each followed by a newline
    pub fn lines(&self) -> String {
        self.fragments
            .iter()
            .map(|f| format!("{f}\n"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conditions_filter_in_order() {
        let clauses = Clauses::new()
            .when(true, "a")
            .when(false, "b")
            .always("c");
        assert_eq!(clauses.join(","), "a,c");
    }

    #[test]
    fn test_lazy_fragment_not_built_when_skipped() {
        let clauses = Clauses::new().when_with(false, || panic!("should not build"));
        assert!(clauses.is_empty());
    }

    #[test]
    fn test_lines() {
        let clauses = Clauses::new().always("x;").always("y;");
        assert_eq!(clauses.lines(), "x;\ny;\n");
        assert_eq!(Clauses::new().lines(), "");
    }
}
