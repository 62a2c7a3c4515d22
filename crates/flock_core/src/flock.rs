//! The flock aggregate.
//!
//! A [`Flock`] hides its members behind one interface: it is filled once,
//! then migrated leg by leg. Position and path length belong to the flock
//! and never depend on how many members it carries. Every leg is also
//! forwarded to each member, in roster order, after the flock's own
//! accumulators have moved.
//!
//! Accumulators are kept unrounded. Rounding happens only in the read
//! accessors: one decimal for coordinates and path length, two decimals for
//! the straight-line distance (computed from the unrounded coordinates).

use crate::error::{FlockError, Result};
use crate::member::FlockMember;
use crate::rounding::round_to;
use crate::snapshot::FlockSnapshot;
use flock_data::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a flock has been filled yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlockState {
    Empty,
    Populated,
}

type Factory<M> = Box<dyn FnMut() -> M>;

pub struct Flock<M> {
    members: Vec<M>,
    factory: Factory<M>,
    x: f64,
    y: f64,
    total: f64,
}

impl<M: FlockMember + Default + 'static> Flock<M> {
    /// Creates an empty flock whose members are built with `M::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_factory(M::default)
    }
}

impl<M: FlockMember + Default + 'static> Default for Flock<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: FlockMember> Flock<M> {
    /// Creates an empty flock that builds each new member with `factory`.
    pub fn with_factory<F>(factory: F) -> Self
    where
        F: FnMut() -> M + 'static,
    {
        Self {
            members: Vec::new(),
            factory: Box::new(factory),
            x: 0.0,
            y: 0.0,
            total: 0.0,
        }
    }

    /// Appends `count` fresh members.
    ///
    /// Fails with [`FlockError::InvalidArgument`] when `count < 1`, leaving
    /// the roster untouched. Filling an already populated flock appends.
    pub fn fill(&mut self, count: i64) -> Result<()> {
        if count < 1 {
            return Err(FlockError::invalid_argument(format!(
                "cannot fill a flock with {count} members, at least one is required"
            )));
        }
        let count = usize::try_from(count).map_err(|_| {
            FlockError::invalid_argument(format!("member count {count} is too large"))
        })?;

        self.members.try_reserve(count).map_err(|e| {
            FlockError::invalid_argument(format!("cannot fit {count} members: {e}"))
        })?;
        for _ in 0..count {
            self.members.push((self.factory)());
        }
        tracing::debug!(added = count, size = self.members.len(), "Flock filled");
        Ok(())
    }

    /// Moves the whole flock `distance` units towards `direction`.
    ///
    /// Fails with [`FlockError::IllegalState`] on an empty flock and with
    /// [`FlockError::InvalidArgument`] when `distance` is negative or not
    /// finite. A failed call changes nothing.
    pub fn migrate(&mut self, direction: Direction, distance: f64) -> Result<()> {
        if self.members.is_empty() {
            return Err(FlockError::illegal_state(
                "fill the flock before migrating it",
            ));
        }
        if !distance.is_finite() || distance < 0.0 {
            return Err(FlockError::invalid_argument(format!(
                "migration distance must be a finite non-negative magnitude, got {distance}"
            )));
        }

        let (dx, dy) = direction.unit_vector();
        self.x += dx * distance;
        self.y += dy * distance;
        self.total += distance;

        for member in &mut self.members {
            member.fly(distance);
            member.set_direction(direction);
        }

        tracing::debug!(
            direction = %direction,
            distance = distance,
            x = self.x,
            y = self.y,
            total = self.total,
            "Flock migrated"
        );
        Ok(())
    }

    /// Members in insertion order.
    #[must_use]
    pub fn members(&self) -> &[M] {
        &self.members
    }

    /// Mutable access to member contents. The roster itself cannot grow or
    /// shrink through this slice.
    pub fn members_mut(&mut self) -> &mut [M] {
        &mut self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn state(&self) -> FlockState {
        if self.members.is_empty() {
            FlockState::Empty
        } else {
            FlockState::Populated
        }
    }

    #[must_use]
    pub fn position_x(&self) -> f64 {
        round_to(self.x, 1)
    }

    #[must_use]
    pub fn position_y(&self) -> f64 {
        round_to(self.y, 1)
    }

    /// Path length covered so far, whatever the headings.
    #[must_use]
    pub fn total_distance(&self) -> f64 {
        round_to(self.total, 1)
    }

    /// Straight-line distance from the origin.
    #[must_use]
    pub fn line_distance_from_start(&self) -> f64 {
        round_to((self.x * self.x + self.y * self.y).sqrt(), 2)
    }

    /// Unrounded `(x, y)`.
    #[must_use]
    pub fn raw_position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Unrounded path length.
    #[must_use]
    pub fn raw_total_distance(&self) -> f64 {
        self.total
    }

    #[must_use]
    pub fn snapshot(&self) -> FlockSnapshot {
        FlockSnapshot {
            state: self.state(),
            members: self.members.len(),
            position_x: self.position_x(),
            position_y: self.position_y(),
            total_distance: self.total_distance(),
            line_distance_from_start: self.line_distance_from_start(),
        }
    }
}

impl<M: fmt::Debug> fmt::Debug for Flock<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flock")
            .field("members", &self.members)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("total", &self.total)
            .finish_non_exhaustive()
    }
}
