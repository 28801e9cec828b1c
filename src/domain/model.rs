use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Lower/upper salary figures of a listing. Non-positive figures mean "not stated".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SalaryBounds {
    pub lower: Option<i64>,
    pub upper: Option<i64>,
}

impl SalaryBounds {
    pub fn new(lower: Option<i64>, upper: Option<i64>) -> Self {
        Self {
            lower: lower.filter(|v| *v > 0),
            upper: upper.filter(|v| *v > 0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub currency: Option<String>,
    pub bounds: SalaryBounds,
}

/// One page of search results for a single language.
#[derive(Debug, Clone, Default)]
pub struct VacancyPage {
    /// Total matches the provider reports for the whole query.
    pub found: u64,
    /// Page count, for providers that report one.
    pub pages: Option<u32>,
    pub listings: Vec<Listing>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LanguageStat {
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: Option<i64>,
}

/// Per-language statistics in the order languages were requested.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatisticsReport {
    entries: Vec<(String, LanguageStat)>,
}

impl StatisticsReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stat of an already recorded language in place.
    pub fn insert(&mut self, language: impl Into<String>, stat: LanguageStat) {
        let language = language.into();
        match self.entries.iter_mut().find(|(name, _)| *name == language) {
            Some((_, existing)) => *existing = stat,
            None => self.entries.push((language, stat)),
        }
    }

    pub fn get(&self, language: &str) -> Option<&LanguageStat> {
        self.entries
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, stat)| stat)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageStat)> {
        self.entries.iter().map(|(name, stat)| (name.as_str(), stat))
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl Serialize for StatisticsReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (language, stat) in &self.entries {
            map.serialize_entry(language, stat)?;
        }
        map.end()
    }
}
