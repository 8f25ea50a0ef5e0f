/// Failure reported by an external collaborator (verse source, word fallback).
///
/// Payloads are strings so the error can be cloned into every waiter of a
/// shared in-flight request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("unknown book: {0}")]
    UnknownBook(String),
}
