use std::collections::btree_map;
use std::collections::BTreeMap;

use stream_error::{Result, StreamError};

use crate::traversable::Traversable;

/// A countable sequence over the values of a borrowed [`BTreeMap`].
///
/// The map's own keys are not positional, so the numeric key probe
/// always answers `None`; seeking a stream over this sequence re-scans
/// from the first entry.
pub struct MapSequence<'a, K, V> {
    map: &'a BTreeMap<K, V>,
    iter: btree_map::Iter<'a, K, V>,
    entry: Option<(&'a K, &'a V)>,
    primed: bool,
}

impl<'a, K, V> MapSequence<'a, K, V> {
    pub fn new(map: &'a BTreeMap<K, V>) -> Self {
        Self {
            map,
            iter: map.iter(),
            entry: None,
            primed: false,
        }
    }

    fn prime(&mut self) {
        if !self.primed {
            self.entry = self.iter.next();
            self.primed = true;
        }
    }
}

impl<K, V: Clone> Traversable for MapSequence<'_, K, V> {
    type Item = V;

    fn valid(&mut self) -> Result<bool> {
        self.prime();
        Ok(self.entry.is_some())
    }

    fn current(&mut self) -> Result<V> {
        self.prime();
        self.entry
            .map(|(_, value)| value.clone())
            .ok_or_else(|| {
                StreamError::Sequence("no current entry".to_owned())
            })
    }

    fn advance(&mut self) -> Result<()> {
        self.prime();
        self.entry = self.iter.next();
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.iter = self.map.iter();
        self.entry = None;
        self.primed = false;
        Ok(())
    }

    fn key(&mut self) -> Result<Option<u64>> {
        Ok(None)
    }

    fn total(&self) -> Option<u64> {
        Some(self.map.len() as u64)
    }
}
