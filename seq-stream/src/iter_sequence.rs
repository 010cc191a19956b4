use stream_error::{Result, StreamError};

use crate::traversable::Traversable;

/// Adapts any [`Iterator`] into a traversable sequence.
///
/// The iterator cannot restart, so `reset` is unsupported: streams over
/// this sequence can only move forward, and whole-stream rendering after
/// any consumption fails unless a render-error handler intercepts it.
pub struct IterSequence<I: Iterator> {
    iter: I,
    item: Option<I::Item>,
    consumed: u64,
    primed: bool,
}

impl<I: Iterator> IterSequence<I> {
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            item: None,
            consumed: 0,
            primed: false,
        }
    }

    fn prime(&mut self) {
        if !self.primed {
            self.item = self.iter.next();
            self.primed = true;
        }
    }
}

impl<I> Traversable for IterSequence<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn valid(&mut self) -> Result<bool> {
        self.prime();
        Ok(self.item.is_some())
    }

    fn current(&mut self) -> Result<I::Item> {
        self.prime();
        self.item.clone().ok_or_else(|| {
            StreamError::Sequence("no current element".to_owned())
        })
    }

    fn advance(&mut self) -> Result<()> {
        self.prime();
        if self.item.is_some() {
            self.consumed += 1;
        }
        self.item = self.iter.next();
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        Err(StreamError::Unsupported(
            "reset on a one-shot iterator".to_owned(),
        ))
    }

    fn key(&mut self) -> Result<Option<u64>> {
        self.prime();
        if self.item.is_some() {
            Ok(Some(self.consumed))
        } else {
            Ok(None)
        }
    }
}
