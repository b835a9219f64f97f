//! Bounded set of live touch contacts.
//!
//! Purpose
//! - Hold the current contact points densely so the kernel can read them as a
//!   plain `&[Point]` between events.
//! - One insertion per touch-begin, one position write per touch-update, one
//!   removal per touch-end. Removal swaps the last contact into the freed
//!   slot (O(1), order of the remaining contacts is not preserved).
//!
//! The capacity mirrors the device's maximum simultaneous touches; exceeding
//! it is reported rather than silently growing.

use std::fmt;

use crate::cfg::DEFAULT_MAX_TOUCHES;
use crate::geom::Point;

/// Device-assigned identifier of one contact, stable from begin to end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TouchId(pub u32);

impl fmt::Display for TouchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Rejected touch-set mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchError {
    /// All slots are taken.
    Full { capacity: usize },
    /// A begin for an id that is already live.
    DuplicateId(TouchId),
    /// An update or end for an id that is not live.
    UnknownId(TouchId),
}

impl fmt::Display for TouchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TouchError::Full { capacity } => {
                write!(f, "touch set is full ({capacity} contacts)")
            }
            TouchError::DuplicateId(id) => write!(f, "touch {id} is already active"),
            TouchError::UnknownId(id) => write!(f, "touch {id} is not active"),
        }
    }
}

impl std::error::Error for TouchError {}

/// One decoded input event, as delivered by the windowing layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchEvent {
    Begin { id: TouchId, x: f64, y: f64 },
    Update { id: TouchId, x: f64, y: f64 },
    End { id: TouchId },
}

impl TouchEvent {
    #[inline]
    pub fn id(&self) -> TouchId {
        match *self {
            TouchEvent::Begin { id, .. } | TouchEvent::Update { id, .. } | TouchEvent::End { id } => {
                id
            }
        }
    }
}

/// Dense, bounded contact storage. `ids[i]` owns `points[i]`.
#[derive(Clone, Debug)]
pub struct TouchSet {
    ids: Vec<TouchId>,
    points: Vec<Point>,
    capacity: usize,
}

impl Default for TouchSet {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_TOUCHES)
    }
}

impl TouchSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
            points: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Current contact positions; valid until the next mutation.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Owned copy for callers that analyze off the event thread.
    #[inline]
    pub fn snapshot(&self) -> Vec<Point> {
        self.points.clone()
    }

    #[inline]
    pub fn get(&self, id: TouchId) -> Option<Point> {
        self.index_of(id).map(|i| self.points[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (TouchId, Point)> + '_ {
        self.ids.iter().copied().zip(self.points.iter().copied())
    }

    #[inline]
    fn index_of(&self, id: TouchId) -> Option<usize> {
        self.ids.iter().position(|&t| t == id)
    }

    pub fn begin(&mut self, id: TouchId, p: Point) -> Result<(), TouchError> {
        if self.index_of(id).is_some() {
            return Err(TouchError::DuplicateId(id));
        }
        if self.len() >= self.capacity {
            return Err(TouchError::Full {
                capacity: self.capacity,
            });
        }
        self.ids.push(id);
        self.points.push(p);
        Ok(())
    }

    pub fn update(&mut self, id: TouchId, p: Point) -> Result<(), TouchError> {
        let i = self.index_of(id).ok_or(TouchError::UnknownId(id))?;
        self.points[i] = p;
        Ok(())
    }

    /// Remove a contact and return its last position.
    pub fn end(&mut self, id: TouchId) -> Result<Point, TouchError> {
        let i = self.index_of(id).ok_or(TouchError::UnknownId(id))?;
        self.ids.swap_remove(i);
        Ok(self.points.swap_remove(i))
    }

    pub fn apply(&mut self, ev: &TouchEvent) -> Result<(), TouchError> {
        match *ev {
            TouchEvent::Begin { id, x, y } => self.begin(id, Point::new(x, y)),
            TouchEvent::Update { id, x, y } => self.update(id, Point::new(x, y)),
            TouchEvent::End { id } => self.end(id).map(|_| ()),
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
        self.points.clear();
    }
}
