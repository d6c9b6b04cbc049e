use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// One reporting interval's raw income/expense figures.
///
/// Produced by the backend, immutable once validated. A series of these is
/// kept in the order the API returned it (chronological ascending).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    /// Start date of the interval (no time component)
    pub date: NaiveDate,

    /// Income for the interval
    pub income: f64,

    /// Expenses for the interval
    pub expenses: f64,
}

impl PeriodRecord {
    pub fn new(date: NaiveDate, income: f64, expenses: f64) -> Self {
        Self {
            date,
            income,
            expenses,
        }
    }
}

/// A period record as it appears on the wire, before validation.
///
/// Every field is optional so that one malformed entry can be rejected
/// on its own instead of failing deserialization of the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPeriodRecord {
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub income: Option<f64>,

    #[serde(default)]
    pub expenses: Option<f64>,
}

impl RawPeriodRecord {
    /// Validate this record. `index` is its position in the response and
    /// is only used for error reporting.
    pub fn validate(&self, index: usize) -> Result<PeriodRecord, CoreError> {
        let invalid = |reason: String| CoreError::InvalidRecord { index, reason };

        let raw_date = self
            .date
            .as_deref()
            .ok_or_else(|| invalid("missing date".into()))?;
        let date = parse_period_date(raw_date)
            .ok_or_else(|| invalid(format!("unparseable date '{raw_date}'")))?;

        let income = self.income.ok_or_else(|| invalid("missing income".into()))?;
        let expenses = self
            .expenses
            .ok_or_else(|| invalid("missing expenses".into()))?;

        if !income.is_finite() {
            return Err(invalid(format!("income is not a finite number ({income})")));
        }
        if !expenses.is_finite() {
            return Err(invalid(format!("expenses is not a finite number ({expenses})")));
        }

        Ok(PeriodRecord::new(date, income, expenses))
    }
}

/// Parse the date formats the analytics endpoints emit.
///
/// Accepts RFC 3339 timestamps (the calendar date at the timestamp's own
/// offset is used, so `2024-01-31T23:00:00-05:00` is Jan 31), naive
/// `YYYY-MM-DDTHH:MM:SS` timestamps, plain `YYYY-MM-DD`, and `YYYY-MM`
/// (first day of the month).
pub fn parse_period_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ts.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok()
}

/// Outcome of validating a whole chart series.
#[derive(Debug, Default)]
pub struct ValidatedSeries {
    /// Records that passed validation, in their original order
    pub records: Vec<PeriodRecord>,

    /// One `CoreError::InvalidRecord` per rejected entry
    pub rejected: Vec<CoreError>,
}

impl ValidatedSeries {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Validate every raw record independently. A bad entry is reported in
/// `rejected` and skipped; the rest of the series survives.
pub fn validate_series(raw: &[RawPeriodRecord]) -> ValidatedSeries {
    collect_validated(
        raw.iter()
            .enumerate()
            .map(|(index, record)| record.validate(index)),
        raw.len(),
    )
}

/// Like [`validate_series`], but starting from untyped JSON entries so that a
/// field of the wrong type (e.g. `"income": "n/a"`) only rejects its record.
pub fn validate_json_series(raw: &[serde_json::Value]) -> ValidatedSeries {
    collect_validated(
        raw.iter().enumerate().map(|(index, value)| {
            serde_json::from_value::<RawPeriodRecord>(value.clone())
                .map_err(|e| CoreError::InvalidRecord {
                    index,
                    reason: e.to_string(),
                })
                .and_then(|record| record.validate(index))
        }),
        raw.len(),
    )
}

fn collect_validated(
    results: impl Iterator<Item = Result<PeriodRecord, CoreError>>,
    capacity: usize,
) -> ValidatedSeries {
    let mut out = ValidatedSeries {
        records: Vec::with_capacity(capacity),
        rejected: Vec::new(),
    };

    for result in results {
        match result {
            Ok(valid) => out.records.push(valid),
            Err(e) => {
                tracing::warn!(error = %e, "rejecting malformed period record");
                out.rejected.push(e);
            }
        }
    }

    if out
        .records
        .windows(2)
        .any(|pair| pair[0].date > pair[1].date)
    {
        tracing::warn!("chart series is not in chronological order; keeping API order");
    }

    out
}
