use super::direction::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kinds of duck a flock can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    #[default]
    Mallard,
    Teal,
    Goose,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Mallard, Species::Teal, Species::Goose];

    /// Distance covered per hour of flight.
    #[must_use]
    pub fn cruise_speed(self) -> f64 {
        match self {
            Species::Mallard => 65.0,
            Species::Teal => 80.0,
            Species::Goose => 70.0,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Species::Mallard => "mallard",
            Species::Teal => "teal",
            Species::Goose => "goose",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Unique identification of a duck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
}

/// A single flock member with its own flight log.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Duck {
    pub identity: Identity,
    pub species: Species,
    /// Heading of the last migration, `None` until the duck has flown.
    pub direction: Option<Direction>,
    pub distance_flown: f64,
    pub flights: u32,
    pub hours_aloft: f64,
}

impl Duck {
    #[must_use]
    pub fn new(species: Species) -> Self {
        Self::with_id(Uuid::new_v4(), species)
    }

    #[must_use]
    pub fn with_id(id: Uuid, species: Species) -> Self {
        Self {
            identity: Identity { id },
            species,
            direction: None,
            distance_flown: 0.0,
            flights: 0,
            hours_aloft: 0.0,
        }
    }
}

impl Default for Duck {
    fn default() -> Self {
        Self::new(Species::default())
    }
}
