//! A resizable byte staging buffer for I/O reactors.
//!
//! [`StagingBuffer`] sits between a producer that receives bytes from a socket
//! and a consumer (usually a protocol parser) that interprets them at its own
//! pace. It owns one contiguous region addressed by two cursors:
//!
//! ```text
//! 0          read            write              capacity
//! |  consumed  |    unread     |   trailing free    |
//! ```
//!
//! Appending prefers the trailing free space, then compacts the unread bytes
//! down to offset 0, and only then reallocates. Consumers borrow the unread
//! span with [`StagingBuffer::peek`] and commit progress with
//! [`StagingBuffer::consume`]; a full drain resets both cursors to 0.
//!
//! ```rust
//! use stagebuf::StagingBuffer;
//!
//! let mut buf = StagingBuffer::with_capacity(8)?;
//! buf.append(b"ABCD")?;
//! buf.consume(2);
//! buf.append(b"EFGHIJ")?; // compacts in place
//! assert_eq!(buf.peek(), b"CDEFGHIJ");
//! assert_eq!(buf.capacity(), 8);
//! # Ok::<(), stagebuf::AllocationError>(())
//! ```
//!
//! The buffer is not synchronized. It is meant to be owned by a single reactor
//! loop; share it across threads only behind an external lock.

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod buffer;
mod error;
#[cfg(feature = "std")]
mod io;
mod options;
mod trace;

#[cfg(test)]
mod tests;

pub use buffer::{Relocation, StagingBuffer, data_available};
pub use error::{AllocationError, AllocationErrorKind};
pub use options::{BufferOptions, GrowthPolicy};
