use std::collections::BTreeMap;

use stream_error::Result;

/// Origin for a [`ReadableStream::seek`] offset.
///
/// Accepted for contract compatibility; streams in this crate support
/// absolute offsets only and ignore the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Whence {
    #[default]
    Start,
    Current,
    End,
}

/// A read-only, forward-seekable stream of rendered elements.
pub trait ReadableStream {
    /// Concrete sequence handle returned by [`ReadableStream::detach`].
    type Sequence;

    /// Render the whole stream as text, from the first element.
    fn to_text(&mut self) -> Result<String>;

    /// No-op; present to satisfy the stream contract.
    fn close(&mut self);

    /// Release the underlying sequence to the caller. The stream keeps
    /// answering metadata-only queries afterwards.
    fn detach(&mut self) -> Option<Self::Sequence>;

    /// Total number of elements, or `None` when unknown.
    fn size(&self) -> Option<u64>;

    /// Number of elements consumed since the last reset.
    fn tell(&self) -> u64;

    /// Whether the stream is positioned at the end of the sequence.
    fn eof(&mut self) -> Result<bool>;

    fn is_seekable(&self) -> bool;

    /// Move the cursor to `offset`, counted in elements from the start.
    /// Returns `Ok(false)` for a negative offset; `whence` is ignored.
    fn seek(&mut self, offset: i64, whence: Whence) -> Result<bool>;

    /// Reset the cursor to the start of the sequence.
    fn rewind(&mut self) -> Result<bool>;

    fn is_writable(&self) -> bool;

    /// Writing is never supported; always returns `false` and leaves
    /// the stream untouched.
    fn write(&mut self, data: &str) -> bool;

    fn is_readable(&self) -> bool;

    /// Pull up to `max_elements` elements and return their rendered
    /// concatenation. The bound counts elements, not bytes.
    fn read(&mut self, max_elements: usize) -> Result<String>;

    /// Drain the sequence from the current position to exhaustion.
    fn get_contents(&mut self) -> Result<String>;

    /// Stream metadata: an empty mapping when no key is given, `None`
    /// for any key.
    fn get_metadata(
        &self,
        key: Option<&str>,
    ) -> Option<BTreeMap<String, String>>;
}
