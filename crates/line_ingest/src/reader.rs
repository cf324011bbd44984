use tokio::io::{AsyncRead, AsyncReadExt};
use tokio_util::sync::CancellationToken;

use crate::error::IngestError;
use crate::pool::ScratchBuffers;

/// Location of one logical line, without its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSpan {
    /// The whole line sits inside the current read chunk.
    Chunk { start: usize, end: usize },
    /// The line straddled chunk boundaries and was assembled in the scratch
    /// byte buffer; the first `len` bytes belong to it.
    Spliced { len: usize },
    /// The line exceeded the configured cap and its bytes were dropped.
    Oversized { observed_bytes: usize },
}

/// Pulls chunks from a byte stream and splits them on `\n`.
///
/// A trailing `\r` is trimmed from every line. Lines that do not fit in one
/// chunk are carried over in the run's scratch byte buffer. A final line with
/// no terminator is still produced; an empty residual is not.
pub struct LineReader<R> {
    reader: R,
    chunk: Vec<u8>,
    pos: usize,
    filled: usize,
    spilled: bool,
    observed_bytes: usize,
    discard_mode: bool,
    max_line_bytes: Option<usize>,
    done: bool,
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    pub fn new(reader: R, chunk_bytes: usize, max_line_bytes: Option<usize>) -> Self {
        Self {
            reader,
            chunk: vec![0u8; chunk_bytes.max(1)],
            pos: 0,
            filled: 0,
            spilled: false,
            observed_bytes: 0,
            discard_mode: false,
            max_line_bytes,
            done: false,
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Bytes of a [`LineSpan::Chunk`] returned by the latest call to
    /// [`LineReader::next_line`].
    pub fn chunk_bytes(&self, start: usize, end: usize) -> &[u8] {
        &self.chunk[start..end]
    }

    async fn fill_chunk(&mut self, cancel: &CancellationToken) -> Result<usize, IngestError> {
        self.pos = 0;
        self.filled = 0;
        loop {
            let read = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(IngestError::Cancelled),
                read = self.reader.read(&mut self.chunk) => read,
            };
            match read {
                Ok(n) => {
                    self.filled = n;
                    return Ok(n);
                }
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Adds `additional` bytes to the current line and reports whether the
    /// line is being discarded.
    fn observe_bytes(&mut self, additional: usize, scratch: &mut ScratchBuffers) -> bool {
        self.observed_bytes = self.observed_bytes.saturating_add(additional);
        if let Some(max) = self.max_line_bytes {
            if self.observed_bytes > max && !self.discard_mode {
                self.discard_mode = true;
                self.spilled = false;
                scratch.bytes_mut().clear();
            }
        }
        self.discard_mode
    }

    fn take_oversized(&mut self) -> LineSpan {
        let observed_bytes = self.observed_bytes;
        self.reset_line_state();
        LineSpan::Oversized { observed_bytes }
    }

    fn take_spliced(&mut self, scratch: &ScratchBuffers) -> LineSpan {
        self.reset_line_state();
        LineSpan::Spliced {
            len: trimmed_len(scratch.bytes()),
        }
    }

    fn reset_line_state(&mut self) {
        self.spilled = false;
        self.observed_bytes = 0;
        self.discard_mode = false;
    }

    pub async fn next_line(
        &mut self,
        scratch: &mut ScratchBuffers,
        cancel: &CancellationToken,
    ) -> Result<Option<LineSpan>, IngestError> {
        if self.done {
            return Ok(None);
        }

        loop {
            if self.pos >= self.filled && self.fill_chunk(cancel).await? == 0 {
                self.done = true;
                if self.discard_mode {
                    return Ok(Some(self.take_oversized()));
                }
                if self.spilled {
                    return Ok(Some(self.take_spliced(scratch)));
                }
                return Ok(None);
            }

            let newline_idx = self.chunk[self.pos..self.filled]
                .iter()
                .position(|b| *b == b'\n');

            let Some(newline_idx) = newline_idx else {
                let remaining = self.filled - self.pos;
                if !self.observe_bytes(remaining, scratch) {
                    if !self.spilled {
                        scratch.bytes_mut().clear();
                        self.spilled = true;
                    }
                    scratch.ensure_capacity(scratch.bytes().len() + remaining);
                    scratch
                        .bytes_mut()
                        .extend_from_slice(&self.chunk[self.pos..self.filled]);
                }
                self.pos = self.filled;
                continue;
            };

            let start = self.pos;
            let end = start + newline_idx;
            self.pos = end + 1;

            if self.observe_bytes(newline_idx, scratch) {
                return Ok(Some(self.take_oversized()));
            }

            if self.spilled {
                scratch.ensure_capacity(scratch.bytes().len() + newline_idx);
                scratch
                    .bytes_mut()
                    .extend_from_slice(&self.chunk[start..end]);
                return Ok(Some(self.take_spliced(scratch)));
            }

            self.reset_line_state();
            let end = start + trimmed_len(&self.chunk[start..end]);
            return Ok(Some(LineSpan::Chunk { start, end }));
        }
    }
}

fn trimmed_len(line: &[u8]) -> usize {
    match line.last() {
        Some(b'\r') => line.len() - 1,
        _ => line.len(),
    }
}
