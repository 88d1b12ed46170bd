//! Named operations resolvable on a person at runtime
//!
//! Credit categories differ from person to person, so callers may ask for
//! `works_as_<category>` by name. The name is parsed here into an
//! [`Operation`]; [`crate::Person::call`] checks it against the person's
//! categories before running it.

use std::str::FromStr;

use crate::error::ImdbError;

/// Prefixes accepted for the credits shorthand
const WORKS_AS_PREFIXES: [&str; 2] = ["works_as_", "works-as-"];

/// A parsed operation name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Works credited under a category, lowercased with spaces restored
    WorksAs(String),
}

impl FromStr for Operation {
    type Err = ImdbError;

    /// Parse `works_as_<category>`; underscores in the category stand for spaces.
    ///
    /// # Examples
    /// ```
    /// use imdb_core::Operation;
    ///
    /// let op: Operation = "works_as_Music_Department".parse().unwrap();
    /// assert_eq!(op, Operation::WorksAs("music department".to_string()));
    /// assert!("birth_place".parse::<Operation>().is_err());
    /// ```
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let category = WORKS_AS_PREFIXES
            .iter()
            .find_map(|prefix| name.strip_prefix(*prefix))
            .map(|rest| rest.replace('_', " ").trim().to_lowercase())
            .filter(|category| !category.is_empty())
            .ok_or_else(|| ImdbError::UnknownOperation(name.to_string()))?;

        Ok(Operation::WorksAs(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_works_as() {
        assert_eq!(
            "works_as_director".parse::<Operation>().unwrap(),
            Operation::WorksAs("director".to_string())
        );
        assert_eq!(
            "works-as-Actor".parse::<Operation>().unwrap(),
            Operation::WorksAs("actor".to_string())
        );
    }

    #[test]
    fn test_parse_underscores_become_spaces() {
        assert_eq!(
            "works_as_art_department".parse::<Operation>().unwrap(),
            Operation::WorksAs("art department".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_other_names() {
        for name in ["", "works_as_", "works_as", "movies_as_actor", "name"] {
            match name.parse::<Operation>() {
                Err(ImdbError::UnknownOperation(op)) => assert_eq!(op, name),
                other => panic!("Expected UnknownOperation for {:?}, got {:?}", name, other),
            }
        }
    }
}
