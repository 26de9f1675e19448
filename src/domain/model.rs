use serde::{Deserialize, Serialize};
use std::fmt;

const SEED_RECORDS: [(i32, &str, &str); 3] = [
    (1, "Hansi", "Hampelmann"),
    (2, "Willi", "Wurst"),
    (3, "Gustl", "Grün"),
];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(id: i32, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person(id={}, first_name={}, last_name={})",
            self.id, self.first_name, self.last_name
        )
    }
}

/// The fixed directory contents, in their canonical order.
pub fn seed_persons() -> Vec<Person> {
    SEED_RECORDS
        .iter()
        .map(|&(id, first_name, last_name)| Person::new(id, first_name, last_name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_order() {
        let persons = seed_persons();
        let first_names: Vec<&str> = persons.iter().map(|p| p.first_name.as_str()).collect();
        assert_eq!(first_names, vec!["Hansi", "Willi", "Gustl"]);
        assert_eq!(persons[2].last_name, "Grün");
    }

    #[test]
    fn test_display() {
        let person = Person::new(1, "Hansi", "Hampelmann");
        assert_eq!(
            person.to_string(),
            "Person(id=1, first_name=Hansi, last_name=Hampelmann)"
        );
    }
}
