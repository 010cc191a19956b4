use std::collections::BTreeMap;
use std::fmt::Display;

use stream_error::{Result, StreamError};

use crate::stream::{ReadableStream, Whence};
use crate::traversable::{IntoTraversable, Traversable};

/// Renders one element as text in place of its `Display` form.
pub type Stringify<T> = Box<dyn Fn(&T) -> String>;

/// Converts a whole-stream rendering failure into replacement text.
pub type RenderErrorHandler = Box<dyn Fn(&StreamError) -> String>;

/// A read-only stream over a traversable sequence.
///
/// The stream pulls elements one at a time, renders each to text (via the
/// configured stringify callback, or the element's `Display` form) and
/// tracks a cursor counting elements consumed since the last reset.
///
/// Seeking is a linear re-scan: O(offset) in the worst case, and any seek
/// to a position at or before the current one costs a reset plus a forward
/// re-scan from the first element. There is no random access.
pub struct SequenceStream<S: Traversable> {
    sequence: Option<S>,
    position: u64,
    stringify: Option<Stringify<S::Item>>,
    on_render_error: Option<RenderErrorHandler>,
}

impl<S> SequenceStream<S>
where
    S: Traversable,
    S::Item: Display,
{
    /// Create a stream over a sequence, or over a producer of one.
    ///
    /// A producer is resolved to its concrete traversal here, once. No
    /// elements are pulled until the first read.
    pub fn new(source: impl IntoTraversable<Seq = S>) -> Self {
        let sequence = source.into_traversable();
        log::debug!(
            "stream: opened, countable: {}",
            sequence.total().is_some()
        );
        Self {
            sequence: Some(sequence),
            position: 0,
            stringify: None,
            on_render_error: None,
        }
    }

    /// Render elements with `stringify` instead of their `Display` form.
    pub fn with_stringify(
        mut self,
        stringify: impl Fn(&S::Item) -> String + 'static,
    ) -> Self {
        self.stringify = Some(Box::new(stringify));
        self
    }

    /// Intercept failures raised while rendering the whole stream
    /// ([`ReadableStream::to_text`]) and substitute the handler's text.
    /// All other operations keep propagating failures untouched.
    pub fn on_render_error(
        mut self,
        handler: impl Fn(&StreamError) -> String + 'static,
    ) -> Self {
        self.on_render_error = Some(Box::new(handler));
        self
    }

    fn render(&mut self) -> Result<String> {
        if self.position != 0 {
            self.sequence
                .as_mut()
                .ok_or(StreamError::Detached)?
                .reset()?;
            self.position = 0;
        }
        self.get_contents()
    }
}

impl<S> ReadableStream for SequenceStream<S>
where
    S: Traversable,
    S::Item: Display,
{
    type Sequence = S;

    fn to_text(&mut self) -> Result<String> {
        match self.render() {
            Ok(contents) => Ok(contents),
            Err(err) => match &self.on_render_error {
                Some(handler) => Ok(handler(&err)),
                None => Err(err),
            },
        }
    }

    fn close(&mut self) {}

    fn detach(&mut self) -> Option<S> {
        log::debug!("stream: detached at position {}", self.position);
        self.sequence.take()
    }

    fn size(&self) -> Option<u64> {
        self.sequence.as_ref().and_then(Traversable::total)
    }

    fn tell(&self) -> u64 {
        self.position
    }

    fn eof(&mut self) -> Result<bool> {
        let sequence =
            self.sequence.as_mut().ok_or(StreamError::Detached)?;
        if let Some(total) = sequence.total() {
            return Ok(self.position == total);
        }
        Ok(!sequence.valid()?)
    }

    fn is_seekable(&self) -> bool {
        true
    }

    fn seek(&mut self, offset: i64, _whence: Whence) -> Result<bool> {
        if offset < 0 {
            return Ok(false);
        }
        let offset = offset as u64;
        let sequence =
            self.sequence.as_mut().ok_or(StreamError::Detached)?;

        let mut key = match sequence.key()? {
            Some(key) => key,
            None => {
                sequence.reset()?;
                0
            }
        };
        // No backward stepping: anything at or before the current
        // position starts over from the first element.
        if key >= offset {
            sequence.reset()?;
            key = 0;
        }
        while sequence.valid()? && key < offset {
            sequence.advance()?;
            key += 1;
        }

        log::debug!("stream: seek to {} landed on {}", offset, key);
        self.position = key;
        Ok(true)
    }

    fn rewind(&mut self) -> Result<bool> {
        self.sequence
            .as_mut()
            .ok_or(StreamError::Detached)?
            .reset()?;
        self.position = 0;
        Ok(true)
    }

    fn is_writable(&self) -> bool {
        false
    }

    fn write(&mut self, _data: &str) -> bool {
        false
    }

    fn is_readable(&self) -> bool {
        true
    }

    fn read(&mut self, max_elements: usize) -> Result<String> {
        let sequence =
            self.sequence.as_mut().ok_or(StreamError::Detached)?;
        let mut contents = String::new();
        let mut taken = 0;
        while taken < max_elements && sequence.valid()? {
            let item = sequence.current()?;
            match &self.stringify {
                Some(stringify) => contents.push_str(&stringify(&item)),
                None => contents.push_str(&item.to_string()),
            }
            sequence.advance()?;
            self.position += 1;
            taken += 1;
        }
        Ok(contents)
    }

    fn get_contents(&mut self) -> Result<String> {
        self.read(usize::MAX)
    }

    fn get_metadata(
        &self,
        key: Option<&str>,
    ) -> Option<BTreeMap<String, String>> {
        match key {
            None => Some(BTreeMap::new()),
            Some(_) => None,
        }
    }
}
