use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The token does not match the `p<start>-<end>` grammar.
    #[error("page range '{token}' does not match p<start>-<end>")]
    Malformed { token: String },

    /// A page number matched the grammar but does not fit in a u32.
    #[error("page number '{value}' is out of range")]
    PageOutOfRange { value: String },
}
