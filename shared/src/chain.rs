//! Segment chains: the body of a creature and how it moves and grows.
//!
//! A chain is stored head-first in a `Vec`; the successor of segment `i` is
//! segment `i + 1` and the last element is the tail. A chain always holds at
//! least a head and a tail.

use crate::geometry::{Direction, Position};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Segments in a chain freshly spawned by a join.
pub const SPAWN_LENGTH: usize = 3;

/// Smallest chain that can exist: a head followed by a tail.
pub const MIN_LENGTH: usize = 2;

/// One cell of a chain.
///
/// `dir` is the direction the segment is queued to move on its next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub pos: Position,
    pub dir: Direction,
}

impl Segment {
    pub const fn new(pos: Position, dir: Direction) -> Self {
        Self { pos, dir }
    }
}

/// Role of a segment, derived from its place in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentKind {
    Head,
    Middle,
    Tail,
}

/// Errors raised when building a chain from raw segments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("chain needs at least {} segments, got {len}", MIN_LENGTH)]
    TooShort { len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Segment>", into = "Vec<Segment>")]
pub struct Chain {
    segments: Vec<Segment>,
}

impl Chain {
    /// Builds a fresh chain with its head at `head`, the body trailing
    /// straight behind it, every segment facing `direction`.
    pub fn spawn(head: Position, direction: Direction) -> Self {
        let behind = direction.opposite();
        let mut segments = Vec::with_capacity(SPAWN_LENGTH);
        let mut pos = head;

        for _ in 0..SPAWN_LENGTH {
            segments.push(Segment::new(pos, direction));
            pos = pos.shift(behind);
        }

        Self { segments }
    }

    /// Wraps head-first segments, rejecting anything shorter than a head
    /// and a tail.
    pub fn from_segments(segments: Vec<Segment>) -> Result<Self, ChainError> {
        if segments.len() < MIN_LENGTH {
            return Err(ChainError::TooShort {
                len: segments.len(),
            });
        }
        Ok(Self { segments })
    }

    /// Gets the leading segment
    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    /// Gets the trailing segment
    pub fn tail(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Never true for a chain built through this module.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// All segments, head first
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Classifies the segment at `index` as head, middle or tail
    pub fn kind_of(&self, index: usize) -> SegmentKind {
        if index == 0 {
            SegmentKind::Head
        } else if index + 1 == self.segments.len() {
            SegmentKind::Tail
        } else {
            SegmentKind::Middle
        }
    }

    /// Walks the chain head to tail, tagging each segment with its kind
    pub fn iter_with_kind(&self) -> impl Iterator<Item = (SegmentKind, &Segment)> + '_ {
        self.segments
            .iter()
            .enumerate()
            .map(move |(index, segment)| (self.kind_of(index), segment))
    }

    /// Queues a new heading on the head, replacing any unconsumed one.
    pub fn set_heading(&mut self, direction: Direction) {
        self.segments[0].dir = direction;
    }

    /// Advances every segment one cell.
    ///
    /// Each segment moves along its own queued direction and then queues the
    /// direction its predecessor had before this move. The head has no
    /// predecessor and keeps its heading. Length is unchanged.
    pub fn advance(&self) -> Self {
        let mut inherited: Option<Direction> = None;
        let segments = self
            .segments
            .iter()
            .map(|segment| {
                let moved = Segment::new(
                    segment.pos.shift(segment.dir),
                    inherited.unwrap_or(segment.dir),
                );
                inherited = Some(segment.dir);
                moved
            })
            .collect();

        Self { segments }
    }

    /// Lengthens an already-advanced chain by one.
    ///
    /// `before` is the same chain prior to the move. Its last two segments
    /// are restored in place of the moved tail, so the body grows from the
    /// back instead of pushing a segment into an occupied cell.
    pub fn grow(&self, before: &Chain) -> Self {
        let old = before.segments.len();
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments[..self.segments.len() - 1]);
        segments.push(before.segments[old - 2]);
        segments.push(before.segments[old - 1]);

        Self { segments }
    }

    /// True if any segment, head included, sits on `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.segments.iter().any(|segment| segment.pos == pos)
    }

    /// True if any segment other than the head sits on `pos`.
    pub fn body_contains(&self, pos: Position) -> bool {
        self.segments[1..].iter().any(|segment| segment.pos == pos)
    }
}

impl TryFrom<Vec<Segment>> for Chain {
    type Error = ChainError;

    fn try_from(segments: Vec<Segment>) -> Result<Self, Self::Error> {
        Chain::from_segments(segments)
    }
}

impl From<Chain> for Vec<Segment> {
    fn from(chain: Chain) -> Self {
        chain.segments
    }
}
