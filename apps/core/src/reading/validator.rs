//! Interpretation validation.
//!
//! [`is_valid`] is the shape check applied at the enhancement boundary: field
//! presence and month completeness only, no cardinality. [`check_cardinality`]
//! is the stricter check that locally generated readings satisfy by construction.

use serde_json::Value;
use std::ops::RangeInclusive;
use tracing::debug;

use super::annual::AnnualInterpretation;
use super::monthly_notes::Month;
use crate::error::AppError;

/// Top-level fields every annual interpretation must carry
pub const REQUIRED_FIELDS: [&str; 7] = [
    "yearKeywords",
    "yearOverview",
    "yearWarnings",
    "months",
    "highlights",
    "lowlights",
    "actionList",
];

pub const YEAR_KEYWORDS_BOUNDS: RangeInclusive<usize> = 3..=5;
pub const YEAR_OVERVIEW_BOUNDS: RangeInclusive<usize> = 2..=4;
pub const YEAR_WARNINGS_BOUNDS: RangeInclusive<usize> = 2..=3;
pub const ACTION_LIST_LEN: usize = 3;

/// Shape check for an untrusted payload. Never panics; false for anything that
/// is not an object carrying all seven fields and a complete 1..=12 month map.
pub fn is_valid(candidate: &Value) -> bool {
    let Some(object) = candidate.as_object() else {
        return false;
    };

    if REQUIRED_FIELDS
        .iter()
        .any(|field| object.get(*field).map_or(true, Value::is_null))
    {
        return false;
    }

    let Some(months) = object.get("months").and_then(Value::as_object) else {
        return false;
    };

    Month::all().all(|month| {
        months
            .get(&month.number().to_string())
            .is_some_and(|entry| !entry.is_null())
    })
}

/// Accepts a payload if it passes [`is_valid`] and decodes into the typed model.
pub fn accept(candidate: Value) -> Option<AnnualInterpretation> {
    if !is_valid(&candidate) {
        debug!("Candidate interpretation rejected: incomplete shape");
        return None;
    }

    match serde_json::from_value::<AnnualInterpretation>(candidate) {
        Ok(interpretation) => Some(interpretation),
        Err(e) => {
            debug!("Candidate interpretation rejected: {}", e);
            None
        }
    }
}

fn check_len(field: &str, len: usize, bounds: &RangeInclusive<usize>) -> Result<(), AppError> {
    if bounds.contains(&len) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "{} has {} items, expected {}..={}",
            field,
            len,
            bounds.start(),
            bounds.end()
        )))
    }
}

/// Strict check: list bounds, exactly months 1..=12, disjoint highlight sets.
pub fn check_cardinality(interpretation: &AnnualInterpretation) -> Result<(), AppError> {
    check_len("yearKeywords", interpretation.year_keywords.len(), &YEAR_KEYWORDS_BOUNDS)?;
    check_len("yearOverview", interpretation.year_overview.len(), &YEAR_OVERVIEW_BOUNDS)?;
    check_len("yearWarnings", interpretation.year_warnings.len(), &YEAR_WARNINGS_BOUNDS)?;
    check_len(
        "actionList",
        interpretation.action_list.len(),
        &(ACTION_LIST_LEN..=ACTION_LIST_LEN),
    )?;

    let keys: Vec<u8> = interpretation.months.keys().copied().collect();
    let expected: Vec<u8> = Month::all().map(|m| m.number()).collect();
    if keys != expected {
        return Err(AppError::Validation(format!(
            "months must be exactly 1..=12, got {:?}",
            keys
        )));
    }

    if let Some(shared) = interpretation
        .highlights
        .iter()
        .find(|month| interpretation.lowlights.contains(month))
    {
        return Err(AppError::Validation(format!(
            "month {} is both a highlight and a lowlight",
            shared
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn month_entry() -> Value {
        json!({
            "keywords": ["行动"],
            "focusAreas": ["事业"],
            "advice": "向前走。",
            "monthlyNote": "新的一月。"
        })
    }

    fn full_payload() -> Value {
        let months: serde_json::Map<String, Value> =
            (1..=12).map(|m| (m.to_string(), month_entry())).collect();
        json!({
            "yearKeywords": ["a", "b", "c"],
            "yearOverview": ["x", "y"],
            "yearWarnings": ["w1", "w2"],
            "months": months,
            "highlights": [1, 2],
            "lowlights": [3],
            "actionList": ["1", "2", "3"]
        })
    }

    #[test]
    fn test_rejects_non_objects() {
        assert!(!is_valid(&Value::Null));
        assert!(!is_valid(&json!("reading")));
        assert!(!is_valid(&json!([1, 2, 3])));
        assert!(!is_valid(&json!(42)));
    }

    #[test]
    fn test_rejects_partial_payload() {
        assert!(!is_valid(&json!({ "yearKeywords": ["a", "b", "c"] })));
    }

    #[test]
    fn test_accepts_complete_shape() {
        assert!(is_valid(&full_payload()));
        assert!(accept(full_payload()).is_some());
    }

    #[test]
    fn test_rejects_null_field() {
        let mut payload = full_payload();
        payload["lowlights"] = Value::Null;
        assert!(!is_valid(&payload));
    }

    #[test]
    fn test_rejects_missing_month() {
        let mut payload = full_payload();
        payload["months"].as_object_mut().unwrap().remove("7");
        assert!(!is_valid(&payload));

        let mut payload = full_payload();
        payload["months"]["12"] = Value::Null;
        assert!(!is_valid(&payload));

        let mut payload = full_payload();
        payload["months"] = json!(["not", "a", "map"]);
        assert!(!is_valid(&payload));
    }

    #[test]
    fn test_shape_check_ignores_cardinality() {
        let mut payload = full_payload();
        payload["yearKeywords"] = json!(["only one"]);
        payload["actionList"] = json!([]);
        assert!(is_valid(&payload));
    }

    #[test]
    fn test_accept_rejects_wrong_types() {
        let mut payload = full_payload();
        payload["yearKeywords"] = json!(17);
        assert!(is_valid(&payload));
        assert!(accept(payload).is_none());
    }

    #[test]
    fn test_cardinality_flags_short_lists() {
        let interpretation = accept(full_payload()).unwrap();
        assert!(check_cardinality(&interpretation).is_ok());

        let mut short = interpretation.clone();
        short.year_keywords = vec!["a".into()];
        assert!(check_cardinality(&short).is_err());

        let mut long_actions = interpretation.clone();
        long_actions.action_list.push("4".into());
        assert!(check_cardinality(&long_actions).is_err());

        let mut overlapping = interpretation.clone();
        overlapping.lowlights = vec![2];
        assert!(check_cardinality(&overlapping).is_err());

        let mut missing = interpretation;
        missing.months.remove(&5);
        assert!(check_cardinality(&missing).is_err());
    }
}
