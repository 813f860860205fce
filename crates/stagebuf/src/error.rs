use thiserror::Error;

/// The backing region could not be obtained or grown.
///
/// Returned by [`StagingBuffer::new`](crate::StagingBuffer::new) and by every
/// operation that may reallocate. The buffer that reported it is left exactly
/// as it was before the call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot allocate a staging region of {requested} bytes: {kind}")]
pub struct AllocationError {
    requested: usize,
    kind: AllocationErrorKind,
}

/// Why an allocation was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationErrorKind {
    /// The size computation overflowed, or exceeds `isize::MAX`.
    #[error("capacity overflow")]
    CapacityOverflow,
    /// The allocator reported that no memory is available.
    #[error("out of memory")]
    OutOfMemory,
}

impl AllocationError {
    pub(crate) fn overflow() -> Self {
        Self {
            requested: usize::MAX,
            kind: AllocationErrorKind::CapacityOverflow,
        }
    }

    // `TryReserveError::kind` is unstable, so classify by the request size.
    pub(crate) fn refused(requested: usize) -> Self {
        let kind = if isize::try_from(requested).is_err() {
            AllocationErrorKind::CapacityOverflow
        } else {
            AllocationErrorKind::OutOfMemory
        };
        Self { requested, kind }
    }

    /// Size in bytes of the region that could not be allocated.
    ///
    /// Saturates at `usize::MAX` when the size itself overflowed.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// The reason the allocation failed.
    #[must_use]
    pub fn kind(&self) -> AllocationErrorKind {
        self.kind
    }
}

#[cfg(feature = "std")]
impl From<AllocationError> for std::io::Error {
    fn from(err: AllocationError) -> Self {
        std::io::Error::new(std::io::ErrorKind::OutOfMemory, err)
    }
}
