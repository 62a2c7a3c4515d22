use flock_data::{Direction, Duck, Species};
use rand::Rng;
use uuid::Uuid;

/// What a flock needs from the things it carries.
///
/// The flock never reads back what `fly` did; member bookkeeping is the
/// member's own business.
pub trait FlockMember {
    fn fly(&mut self, distance: f64);
    fn set_direction(&mut self, direction: Direction);
    fn direction(&self) -> Option<Direction>;
}

impl FlockMember for Duck {
    fn fly(&mut self, distance: f64) {
        self.distance_flown += distance;
        self.flights += 1;
        self.hours_aloft += distance / self.species.cruise_speed();
        tracing::trace!(
            id = %self.identity.id,
            species = %self.species,
            distance = distance,
            "Duck flew"
        );
    }

    fn set_direction(&mut self, direction: Direction) {
        self.direction = Some(direction);
    }

    fn direction(&self) -> Option<Direction> {
        self.direction
    }
}

/// Draws a duck of any species, id included, from `rng`.
pub fn random_duck<R: Rng>(rng: &mut R) -> Duck {
    let species = Species::ALL[rng.gen_range(0..Species::ALL.len())];
    let id = Uuid::from_u128(rng.gen::<u128>());
    Duck::with_id(id, species)
}
