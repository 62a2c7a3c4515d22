pub mod macros;

use flock_lib::model::flock::Flock;
use flock_lib::model::state::{Direction, Duck, Species};

#[allow(dead_code)]
pub struct FlockBuilder {
    members: i64,
    species: Species,
    legs: Vec<(Direction, f64)>,
}

#[allow(dead_code)]
impl FlockBuilder {
    pub fn new() -> Self {
        Self {
            members: 0,
            species: Species::Mallard,
            legs: Vec::new(),
        }
    }

    pub fn with_members(mut self, members: i64) -> Self {
        self.members = members;
        self
    }

    pub fn with_species(mut self, species: Species) -> Self {
        self.species = species;
        self
    }

    pub fn with_leg(mut self, direction: Direction, distance: f64) -> Self {
        self.legs.push((direction, distance));
        self
    }

    pub fn build(self) -> Flock<Duck> {
        let species = self.species;
        let mut flock = Flock::with_factory(move || Duck::new(species));
        if self.members > 0 {
            flock.fill(self.members).expect("Failed to fill flock");
        }
        for (direction, distance) in self.legs {
            flock
                .migrate(direction, distance)
                .expect("Failed to migrate flock");
        }
        flock
    }
}
