use crate::IdentityToken;

/// A broken caller contract found by [`crate::FlatSequence::validate`].
///
/// Building never reports these; validation is an explicit, opt-in pass for tests and debug
/// tooling.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    #[error("cell {index} starts at {start}, expected {expected}")]
    NonContiguous {
        index: usize,
        start: u64,
        expected: u64,
    },
    #[error("identity token `{token}` is used by cells {first} and {second}")]
    DuplicateToken {
        token: IdentityToken,
        first: usize,
        second: usize,
    },
    #[error("accumulated size {accumulated} does not match the end of the last cell ({end})")]
    SizeMismatch { accumulated: u64, end: u64 },
}
