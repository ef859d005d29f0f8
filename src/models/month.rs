//! Month name ↔ month number table for the months covered by the datasets.

use std::collections::HashMap;
use std::sync::LazyLock;

const MONTHS: [(&str, u32); 6] = [
    ("January", 1),
    ("February", 2),
    ("March", 3),
    ("April", 4),
    ("May", 5),
    ("June", 6),
];

pub struct MonthTable {
    by_number: HashMap<u32, &'static str>,
    by_name: HashMap<String, u32>,
}

impl MonthTable {
    fn build() -> Self {
        let mut by_number = HashMap::new();
        let mut by_name = HashMap::new();
        for (name, n) in MONTHS {
            by_number.insert(n, name);
            by_name.insert(name.to_lowercase(), n);
        }
        Self { by_number, by_name }
    }

    pub fn name(&self, number: u32) -> Option<&'static str> {
        self.by_number.get(&number).copied()
    }

    /// Case-insensitive lookup; accepts the full name or its first three letters.
    pub fn number(&self, name: &str) -> Option<u32> {
        let key = name.trim().to_lowercase();
        if let Some(n) = self.by_name.get(&key) {
            return Some(*n);
        }
        if key.len() == 3 {
            return MONTHS
                .iter()
                .find(|(m, _)| m.to_lowercase().starts_with(&key))
                .map(|(_, n)| *n);
        }
        None
    }

    pub fn first(&self) -> u32 {
        MONTHS[0].1
    }

    pub fn last(&self) -> u32 {
        MONTHS[MONTHS.len() - 1].1
    }

    pub fn contains(&self, number: u32) -> bool {
        self.by_number.contains_key(&number)
    }
}

pub static MONTH_TABLE: LazyLock<MonthTable> = LazyLock::new(MonthTable::build);

pub fn month_name(number: u32) -> Option<&'static str> {
    MONTH_TABLE.name(number)
}

pub fn month_number(name: &str) -> Option<u32> {
    MONTH_TABLE.number(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_directions() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(6), Some("June"));
        assert_eq!(month_name(7), None);
        assert_eq!(month_number("march"), Some(3));
        assert_eq!(month_number("Apr"), Some(4));
        assert_eq!(month_number("July"), None);
    }

    #[test]
    fn bounds() {
        assert_eq!(MONTH_TABLE.first(), 1);
        assert_eq!(MONTH_TABLE.last(), 6);
        assert!(!MONTH_TABLE.contains(0));
    }
}
