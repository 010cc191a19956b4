use stream_error::{Result, StreamError};

use crate::traversable::{IntoTraversable, Traversable};

/// An owned, countable sequence over the elements of a `Vec`.
///
/// Keys are the element positions; the key probe is indeterminate once
/// the sequence has walked past the last element.
pub struct VecSequence<T> {
    items: Vec<T>,
    pos: usize,
}

impl<T> VecSequence<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, pos: 0 }
    }
}

impl<T: Clone> Traversable for VecSequence<T> {
    type Item = T;

    fn valid(&mut self) -> Result<bool> {
        Ok(self.pos < self.items.len())
    }

    fn current(&mut self) -> Result<T> {
        self.items
            .get(self.pos)
            .cloned()
            .ok_or_else(|| {
                StreamError::Sequence("no current element".to_owned())
            })
    }

    fn advance(&mut self) -> Result<()> {
        if self.pos < self.items.len() {
            self.pos += 1;
        }
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.pos = 0;
        Ok(())
    }

    fn key(&mut self) -> Result<Option<u64>> {
        if self.pos < self.items.len() {
            Ok(Some(self.pos as u64))
        } else {
            Ok(None)
        }
    }

    fn total(&self) -> Option<u64> {
        Some(self.items.len() as u64)
    }
}

impl<T: Clone> IntoTraversable for Vec<T> {
    type Item = T;
    type Seq = VecSequence<T>;

    fn into_traversable(self) -> VecSequence<T> {
        VecSequence::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walks_all_elements() {
        let mut sequence = VecSequence::new(vec!["a", "b"]);
        assert!(sequence.valid().unwrap());
        assert_eq!(sequence.current().unwrap(), "a");
        assert_eq!(sequence.key().unwrap(), Some(0));

        sequence.advance().unwrap();
        assert_eq!(sequence.current().unwrap(), "b");
        assert_eq!(sequence.key().unwrap(), Some(1));

        sequence.advance().unwrap();
        assert!(!sequence.valid().unwrap());
        assert!(sequence.current().is_err());
    }

    #[test]
    fn test_key_is_indeterminate_past_the_end() {
        let mut sequence = VecSequence::new(vec![1]);
        sequence.advance().unwrap();
        assert_eq!(sequence.key().unwrap(), None);
    }

    #[test]
    fn test_reset_returns_to_start() {
        let mut sequence = VecSequence::new(vec![1, 2, 3]);
        sequence.advance().unwrap();
        sequence.advance().unwrap();
        sequence.reset().unwrap();
        assert_eq!(sequence.key().unwrap(), Some(0));
        assert_eq!(sequence.current().unwrap(), 1);
    }

    #[test]
    fn test_counts_its_elements() {
        let sequence = VecSequence::new(vec![1, 2, 3]);
        assert_eq!(sequence.total(), Some(3));
    }
}
