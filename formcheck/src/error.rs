use thiserror::Error;

/// Integration failures: a broken page structure, not bad user input.
///
/// User-input problems are never errors in this sense; they surface as
/// rendered messages and the boolean result of validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// An event targeted an element the document does not contain.
    #[error("event target '{id}' does not exist in the document")]
    UnknownTarget { id: String },

    /// A validated field has no error container next to it.
    #[error("field '{id}' has no error container")]
    MissingErrorContainer { id: String },
}
