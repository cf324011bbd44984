pub const DEFAULT_BATCH_SIZE: usize = 1000;
pub const DEFAULT_INITIAL_BUFFER_BYTES: usize = 4 * 1024;
pub const DEFAULT_READ_CHUNK_BYTES: usize = 64 * 1024;
pub const DEFAULT_MAX_ERROR_MESSAGES: usize = 10_000;
pub const DEFAULT_COMMENT_MARKER: char = '#';
pub const FIELD_DELIMITER: char = '\t';

/// Worst-case growth of a line when invalid UTF-8 is replaced with U+FFFD
/// (one byte in, three bytes out).
pub const MAX_DECODE_EXPANSION: usize = 3;
