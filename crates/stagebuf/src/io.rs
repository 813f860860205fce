//! `std::io` adapters.
//!
//! The producer side implements [`Write`] and can also pull directly from a
//! [`Read`] source with [`StagingBuffer::fill_from`]. The consumer side
//! implements [`Read`] and [`BufRead`], where `fill_buf` is [`peek`] and
//! `consume` is [`consume`], and can push to a [`Write`] sink with
//! [`StagingBuffer::drain_to`].
//!
//! [`peek`]: StagingBuffer::peek
//! [`consume`]: StagingBuffer::consume

use std::io::{self, BufRead, Read, Write};

use crate::StagingBuffer;

impl StagingBuffer {
    /// Perform one read from `reader` directly into the free tail.
    ///
    /// At least [`read_size`](crate::BufferOptions::read_size) bytes of room
    /// are reserved first (compacting or growing as needed), and the whole
    /// trailing free space is offered to the reader. Returns the number of
    /// bytes read; `0` means the reader reached end of stream.
    ///
    /// # Errors
    ///
    /// Fails with [`io::ErrorKind::OutOfMemory`] if room cannot be reserved,
    /// or with whatever error `reader` returns, including
    /// [`io::ErrorKind::Interrupted`] and [`io::ErrorKind::WouldBlock`].
    /// A reader that reports more bytes than it was offered yields
    /// [`io::ErrorKind::InvalidData`]. No bytes are committed on error.
    pub fn fill_from<R: Read + ?Sized>(&mut self, reader: &mut R) -> io::Result<usize> {
        self.reserve(self.options().read_size.max(1))?;
        let offered = self.trailing_free();
        let n = reader.read(self.spare_mut())?;
        if n > offered {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                std::format!("reader returned {n} bytes into a {offered}-byte slice"),
            ));
        }
        self.commit(n);
        Ok(n)
    }

    /// Perform one write of the unread bytes into `writer` and consume
    /// exactly what it accepted.
    ///
    /// Returns the number of bytes written, `0` if the buffer was empty.
    ///
    /// # Errors
    ///
    /// Returns whatever error `writer` reports. Nothing is consumed on error.
    pub fn drain_to<W: Write + ?Sized>(&mut self, writer: &mut W) -> io::Result<usize> {
        if self.is_empty() {
            return Ok(0);
        }
        let n = writer.write(self.peek())?;
        self.consume(n);
        Ok(n)
    }
}

impl Write for StagingBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for StagingBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.len());
        buf[..n].copy_from_slice(&self.peek()[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for StagingBuffer {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.peek())
    }

    fn consume(&mut self, amt: usize) {
        StagingBuffer::consume(self, amt);
    }
}
