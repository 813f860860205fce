use alloc::vec::Vec;
use core::fmt;

use bstr::BStr;

use crate::{error::AllocationError, options::BufferOptions, trace};

/// Which strategy [`StagingBuffer::reserve`] used to make room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relocation {
    /// The trailing free space was already large enough.
    InPlace,
    /// The unread bytes were moved down to offset 0 within the same region.
    Compacted {
        /// Number of unread bytes that were moved.
        moved: usize,
    },
    /// A larger region was allocated and the unread bytes copied into it.
    Grown {
        /// Capacity before the reallocation.
        from: usize,
        /// Capacity after the reallocation.
        to: usize,
    },
}

/// A single-producer/single-consumer byte buffer with a movable read window.
///
/// The region is always fully initialized; `capacity()` is its length. The
/// cursors satisfy `read <= write <= capacity`, and an empty buffer always has
/// both cursors at 0.
pub struct StagingBuffer {
    region: Vec<u8>,
    read: usize,
    write: usize,
    options: BufferOptions,
}

/// Number of unread bytes in `buffer`, or 0 when there is no buffer.
///
/// Connection state that has not allocated its buffer yet can be queried
/// without unwrapping first.
#[must_use]
pub fn data_available(buffer: Option<&StagingBuffer>) -> usize {
    buffer.map_or(0, StagingBuffer::len)
}

fn allocate(size: usize) -> Result<Vec<u8>, AllocationError> {
    let mut region = Vec::new();
    region
        .try_reserve_exact(size)
        .map_err(|_| AllocationError::refused(size))?;
    Ok(region)
}

impl StagingBuffer {
    /// Allocate a buffer configured by `options`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if the initial region cannot be allocated.
    pub fn new(options: BufferOptions) -> Result<Self, AllocationError> {
        let mut region = allocate(options.initial_capacity)?;
        region.resize(options.initial_capacity, 0);
        Ok(Self {
            region,
            read: 0,
            write: 0,
            options,
        })
    }

    /// Allocate a buffer of `capacity` bytes with default options otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if the region cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocationError> {
        Self::new(BufferOptions {
            initial_capacity: capacity,
            ..BufferOptions::default()
        })
    }

    /// The options this buffer was created with.
    #[must_use]
    pub fn options(&self) -> &BufferOptions {
        &self.options
    }

    /// Number of unread bytes.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.write - self.read
    }

    /// Whether there are no unread bytes.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read == self.write
    }

    /// Size of the backing region in bytes.
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.region.len()
    }

    /// Contiguous free space after the unread bytes.
    #[must_use]
    #[inline]
    pub fn trailing_free(&self) -> usize {
        self.capacity() - self.write
    }

    /// Consumed space before the unread bytes, reclaimable by compaction.
    #[must_use]
    #[inline]
    pub fn leading_free(&self) -> usize {
        self.read
    }

    /// Borrow the unread bytes as one contiguous slice.
    ///
    /// The slice borrows the buffer, so it cannot outlive the next append or
    /// consume. When the buffer is empty the slice is empty.
    #[must_use]
    #[inline]
    pub fn peek(&self) -> &[u8] {
        &self.region[self.read..self.write]
    }

    /// Append `data` after the unread bytes.
    ///
    /// Room is made with [`reserve`](Self::reserve); the returned
    /// [`Relocation`] tells which tier ran. Appending an empty slice does
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if the region had to grow and the
    /// allocation failed. The buffer is unchanged in that case.
    pub fn append(&mut self, data: &[u8]) -> Result<Relocation, AllocationError> {
        if data.is_empty() {
            return Ok(Relocation::InPlace);
        }
        let relocation = self.reserve(data.len())?;
        self.region[self.write..self.write + data.len()].copy_from_slice(data);
        self.write += data.len();
        Ok(relocation)
    }

    /// Ensure at least `additional` bytes of trailing free space.
    ///
    /// Tries, in order: the existing tail, moving the unread bytes down to
    /// offset 0, and reallocating per the configured
    /// [`GrowthPolicy`](crate::GrowthPolicy). Unread bytes keep their
    /// contents and order whichever path is taken.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if a new region is needed and cannot be
    /// allocated. The buffer is unchanged in that case.
    pub fn reserve(&mut self, additional: usize) -> Result<Relocation, AllocationError> {
        if self.trailing_free() >= additional {
            return Ok(Relocation::InPlace);
        }
        // Cannot overflow: both terms are bounded by the capacity.
        if self.trailing_free() + self.leading_free() >= additional {
            let moved = self.compact();
            return Ok(Relocation::Compacted { moved });
        }
        self.grow(additional)
    }

    /// Free space at the tail, for producers that read straight into the
    /// buffer. Follow the write with [`commit`](Self::commit).
    #[must_use]
    pub fn spare_mut(&mut self) -> &mut [u8] {
        &mut self.region[self.write..]
    }

    /// Mark `n` bytes written through [`spare_mut`](Self::spare_mut) as
    /// unread data.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`trailing_free`](Self::trailing_free).
    pub fn commit(&mut self, n: usize) {
        assert!(
            n <= self.trailing_free(),
            "commit({n}) exceeds trailing free space ({})",
            self.trailing_free()
        );
        self.write += n;
    }

    /// Drop up to `n` unread bytes from the front.
    ///
    /// Consuming everything that is left, or more, empties the buffer and
    /// rewinds both cursors to 0 so the whole region is reusable.
    pub fn consume(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        if n >= self.len() {
            self.clear();
        } else {
            self.read += n;
        }
    }

    /// Drop all unread bytes. The region is kept.
    pub fn clear(&mut self) {
        self.read = 0;
        self.write = 0;
    }

    /// Reallocate the region down to `max(min_capacity, len())` bytes.
    ///
    /// Does nothing if the region is already that small. Useful after a
    /// burst has grown the buffer well beyond its steady-state needs.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if the smaller region cannot be allocated.
    /// The buffer is unchanged in that case.
    pub fn shrink_to(&mut self, min_capacity: usize) -> Result<(), AllocationError> {
        let target = min_capacity.max(self.len());
        if target >= self.capacity() {
            return Ok(());
        }
        self.relocate(target)?;
        trace::relocation!(to = target, "shrunk staging region");
        Ok(())
    }

    fn compact(&mut self) -> usize {
        let moved = self.len();
        self.region.copy_within(self.read..self.write, 0);
        self.read = 0;
        self.write = moved;
        trace::relocation!(moved, capacity = self.capacity(), "compacted staging region");
        moved
    }

    fn grow(&mut self, additional: usize) -> Result<Relocation, AllocationError> {
        let from = self.capacity();
        let to = self
            .options
            .growth
            .next_capacity(from, additional)
            .ok_or_else(AllocationError::overflow)?;
        self.relocate(to)?;
        trace::relocation!(from, to, unread = self.len(), "grew staging region");
        Ok(Relocation::Grown { from, to })
    }

    /// Move the unread bytes to the front of a fresh region of `size` bytes.
    /// The old region is only released once the new one exists.
    fn relocate(&mut self, size: usize) -> Result<(), AllocationError> {
        debug_assert!(size >= self.len());
        let mut region = allocate(size)?;
        region.extend_from_slice(self.peek());
        let unread = region.len();
        region.resize(size, 0);
        self.region = region;
        self.read = 0;
        self.write = unread;
        Ok(())
    }
}

impl fmt::Debug for StagingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StagingBuffer")
            .field("read", &self.read)
            .field("write", &self.write)
            .field("capacity", &self.capacity())
            .field("unread", &BStr::new(self.peek()))
            .finish()
    }
}

#[cfg(test)]
impl StagingBuffer {
    /// Cursor invariant, asserted by tests after every operation.
    pub(crate) fn assert_invariants(&self) {
        assert!(self.read <= self.write, "read {} > write {}", self.read, self.write);
        assert!(
            self.write <= self.capacity(),
            "write {} > capacity {}",
            self.write,
            self.capacity()
        );
        if self.is_empty() {
            assert_eq!((self.read, self.write), (0, 0), "empty buffer not rewound");
        }
    }
}
