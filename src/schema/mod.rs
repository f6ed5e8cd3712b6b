//! Schema and content-policy validation.
//!
//! Turns raw takeaway values into typed [`ExtractionRecord`]s, enforcing the
//! configured count bound, the five required fields, field types, id
//! uniqueness, and whatever optional content policies the configuration
//! carries. The first violation is terminal; nothing is accumulated.

pub mod error;
pub mod types;


pub use error::SchemaError;
pub use types::{ExtractionOutput, ExtractionRecord};

use serde_json::{Map, Value};

use crate::constants::{
    CLAIM_FIELD, ID_FIELD, PAGE_RANGE_FIELD, REQUIRED_RECORD_FIELDS, SCOPE_KEYWORDS_FIELD,
    TITLE_FIELD,
};

/// Optional content rules applied per record when configured.
///
/// Term matching is case-insensitive substring matching against the claim:
/// any banned term occurring anywhere fails, and when required terms are
/// configured, at least one of them must occur.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentPolicy {
    pub min_claim_chars: Option<usize>,
    pub min_scope_keywords: Option<usize>,
    pub banned_terms: Vec<String>,
    pub required_terms: Vec<String>,
}

impl ContentPolicy {
    /// True when no rule is configured and the policy pass is a no-op.
    pub fn is_empty(&self) -> bool {
        self.min_claim_chars.is_none()
            && self.min_scope_keywords.is_none()
            && self.banned_terms.is_empty()
            && self.required_terms.is_empty()
    }
}

/// Validates raw takeaway values against the schema and `policy`.
///
/// Checks run in a fixed order: count, then per record (in producer order)
/// shape, field presence, field types, id uniqueness, content policies. On
/// success the typed records are returned in producer order.
pub fn validate(
    takeaways: &[Value],
    expected_count: usize,
    policy: &ContentPolicy,
) -> Result<ExtractionOutput, SchemaError> {
    if takeaways.len() != expected_count {
        return Err(SchemaError::CountMismatch {
            expected: expected_count,
            actual: takeaways.len(),
        });
    }

    let banned: Vec<String> = policy.banned_terms.iter().map(|t| t.to_lowercase()).collect();
    let required: Vec<String> = policy
        .required_terms
        .iter()
        .map(|t| t.to_lowercase())
        .collect();

    let mut records = Vec::with_capacity(takeaways.len());
    let mut seen_ids: Vec<&str> = Vec::with_capacity(takeaways.len());

    for (index, value) in takeaways.iter().enumerate() {
        let map = value
            .as_object()
            .ok_or(SchemaError::RecordNotObject { index })?;

        for field in REQUIRED_RECORD_FIELDS {
            if !map.contains_key(field) {
                return Err(SchemaError::MissingField { index, field });
            }
        }

        let id = string_field(map, index, ID_FIELD)?;
        let title = string_field(map, index, TITLE_FIELD)?;
        let claim = string_field(map, index, CLAIM_FIELD)?;
        let page_range = string_field(map, index, PAGE_RANGE_FIELD)?;
        let scope_keywords = keyword_field(map, index)?;

        if title.is_empty() {
            return Err(SchemaError::EmptyTitle { index });
        }

        if seen_ids.contains(&id) {
            return Err(SchemaError::DuplicateId { id: id.to_string() });
        }
        seen_ids.push(id);

        check_policy(index, claim, &scope_keywords, policy, &banned, &required)?;

        records.push(ExtractionRecord {
            id: id.to_string(),
            title: title.to_string(),
            claim: claim.to_string(),
            scope_keywords: scope_keywords.iter().map(|k| k.to_string()).collect(),
            page_range: page_range.to_string(),
        });
    }

    Ok(records)
}

fn string_field<'a>(
    map: &'a Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<&'a str, SchemaError> {
    map[field]
        .as_str()
        .ok_or(SchemaError::NotAString { index, field })
}

fn keyword_field<'a>(
    map: &'a Map<String, Value>,
    index: usize,
) -> Result<Vec<&'a str>, SchemaError> {
    // Type-checked, never truthy-checked: an empty array is a valid sequence.
    let values = map[SCOPE_KEYWORDS_FIELD]
        .as_array()
        .ok_or(SchemaError::KeywordsNotStringArray { index })?;

    values
        .iter()
        .map(|v| {
            v.as_str()
                .ok_or(SchemaError::KeywordsNotStringArray { index })
        })
        .collect()
}

fn check_policy(
    index: usize,
    claim: &str,
    keywords: &[&str],
    policy: &ContentPolicy,
    banned: &[String],
    required: &[String],
) -> Result<(), SchemaError> {
    if let Some(min) = policy.min_claim_chars {
        let len = claim.chars().count();
        if len < min {
            return Err(SchemaError::ClaimTooShort { index, len, min });
        }
    }

    if let Some(min) = policy.min_scope_keywords {
        if keywords.len() < min {
            return Err(SchemaError::TooFewKeywords {
                index,
                count: keywords.len(),
                min,
            });
        }
    }

    if banned.is_empty() && required.is_empty() {
        return Ok(());
    }

    let claim_lower = claim.to_lowercase();

    for (term, lowered) in policy.banned_terms.iter().zip(banned) {
        if claim_lower.contains(lowered.as_str()) {
            return Err(SchemaError::BannedTerm {
                index,
                term: term.clone(),
            });
        }
    }

    if !required.is_empty() && !required.iter().any(|t| claim_lower.contains(t.as_str())) {
        return Err(SchemaError::MissingRequiredTerm { index });
    }

    Ok(())
}
