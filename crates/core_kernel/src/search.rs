//! Free-text search over list screens

/// Case-insensitive substring match of `term` against any of `fields`
///
/// An empty or whitespace-only term matches every record.
pub fn matches_term<'a, I>(term: &str, fields: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// A record that can be found by the search box of its list screen
pub trait Searchable {
    /// Fields the search box looks at
    fn search_fields(&self) -> Vec<String>;

    fn matches(&self, term: &str) -> bool {
        let fields = self.search_fields();
        matches_term(term, fields.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_matches_everything() {
        assert!(matches_term("", ["Max"]));
        assert!(matches_term("   ", std::iter::empty()));
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert!(matches_term("GOLD", ["Max", "Dog - Golden Retriever"]));
        assert!(matches_term("app-00", ["APP-001"]));
        assert!(!matches_term("cat", ["Max", "John Smith"]));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn any_substring_of_a_field_matches(field in "[a-zA-Z ]{1,30}", start in 0usize..30, len in 1usize..10) {
            let start = start.min(field.len() - 1);
            let end = (start + len).min(field.len());
            let term = field[start..end].to_uppercase();
            prop_assert!(matches_term(&term, [field.as_str()]));
        }
    }
}
