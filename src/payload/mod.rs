//! Candidate payload decoding.
//!
//! First stage of a grading call: raw producer text either decodes to a JSON
//! object carrying a `takeaways` array, or the whole call fails. There is no
//! partial parse and no retry; a malformed payload is a terminal, reportable
//! condition for that sample.
//!
//! Field-level checks do not happen here. The validator owns them, so the
//! diagnostic path can name the exact rule a record violated instead of
//! surfacing a generic decode error.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::PayloadError;

use serde_json::Value;

use crate::constants::TAKEAWAYS_FIELD;

/// A decoded payload: the raw takeaway values, in producer order.
///
/// Records stay as [`Value`]s at this stage; the schema validator turns them
/// into typed records.
#[derive(Debug, Clone)]
pub struct RawPayload {
    takeaways: Vec<Value>,
}

impl RawPayload {
    /// The raw takeaway values, in the order the producer emitted them.
    pub fn takeaways(&self) -> &[Value] {
        &self.takeaways
    }

    pub fn len(&self) -> usize {
        self.takeaways.len()
    }

    pub fn is_empty(&self) -> bool {
        self.takeaways.is_empty()
    }
}

/// Decodes raw producer output into a [`RawPayload`].
///
/// Fails closed on anything other than a JSON object root with a `takeaways`
/// array: deserialization errors, array or scalar roots, a missing or
/// non-array `takeaways` field.
pub fn decode(raw: &str) -> Result<RawPayload, PayloadError> {
    let root: Value = serde_json::from_str(raw)?;

    let Value::Object(mut map) = root else {
        return Err(PayloadError::RootNotObject);
    };

    let takeaways = map
        .remove(TAKEAWAYS_FIELD)
        .ok_or(PayloadError::MissingTakeaways)?;

    let Value::Array(takeaways) = takeaways else {
        return Err(PayloadError::TakeawaysNotArray);
    };

    Ok(RawPayload { takeaways })
}
