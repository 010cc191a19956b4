//! # Seq Stream
//!
//! `seq-stream` adapts a forward-traversable sequence of values into a
//! read-only character stream with positional access. Elements are pulled
//! lazily, one at a time, and rendered to text on demand; the sequence is
//! never materialized up front.
//!
//! The stream surface is the [`ReadableStream`] trait; the adapter
//! implementing it is [`SequenceStream`]. Sequences implement
//! [`Traversable`], and anything that can produce a sequence on demand
//! implements [`IntoTraversable`].

mod adapter;
mod iter_sequence;
mod line_sequence;
mod map_sequence;
mod stream;
mod traversable;
mod vec_sequence;

pub use adapter::{RenderErrorHandler, SequenceStream, Stringify};
pub use iter_sequence::IterSequence;
pub use line_sequence::LineSequence;
pub use map_sequence::MapSequence;
pub use stream::{ReadableStream, Whence};
pub use traversable::{IntoTraversable, Traversable};
pub use vec_sequence::VecSequence;
