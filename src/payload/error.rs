use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    /// The raw text is not valid JSON at all.
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload decoded, but the root is an array or scalar.
    #[error("payload root must be a JSON object")]
    RootNotObject,

    /// The root object has no `takeaways` field.
    #[error("payload is missing the 'takeaways' field")]
    MissingTakeaways,

    /// `takeaways` is present but is not an array.
    #[error("'takeaways' must be an array")]
    TakeawaysNotArray,
}
