use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The three positional fields exactly as they were typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArgs {
    pub country: String,
    pub start: String,
    pub end: String,
}

/// A validated extraction request.
///
/// Only [`crate::validate::validate_args`] builds one, so `start <= end` and
/// the country is a capitalised alphabetic word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    country: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl Request {
    pub(crate) fn new(country: String, start: NaiveDate, end: NaiveDate) -> Self {
        Self { country, start, end }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// One forecast record as delivered by the API.
///
/// Everything besides `issue_date` is kept untouched so the stored file is a
/// faithful copy of the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    pub issue_date: String,

    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl ForecastRecord {
    pub fn new(issue_date: impl Into<String>) -> Self {
        Self {
            issue_date: issue_date.into(),
            fields: serde_json::Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<ForecastRecord>,
}

impl Dataset {
    pub fn new(records: Vec<ForecastRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ForecastRecord> {
        self.records.iter()
    }
}

impl FromIterator<ForecastRecord> for Dataset {
    fn from_iter<T: IntoIterator<Item = ForecastRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
