use thiserror::Error;

/// Every way a table operation can be rejected.
///
/// All of these are caller contract violations; the table is left exactly as
/// it was before the failing call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The key does not compare equal to itself, so no probe could ever find it again.
    #[error("cannot handle key that is not equal to itself")]
    InvalidKey,
    #[error("duplicate key")]
    DuplicateKey,
    #[error("cannot find key")]
    KeyNotFound,
    #[error("cannot get next element")]
    IteratorExhausted,
    /// Insert probed every slot without finding room. Only reachable once the
    /// capacity schedule has run out.
    #[error("no free slot among {capacity} slots")]
    CapacityExhausted { capacity: usize },
}

pub type Result<T, E = TableError> = core::result::Result<T, E>;
