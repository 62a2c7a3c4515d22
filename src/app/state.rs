use flock_core::{
    random_duck, AppConfig, Direction, Duck, Flock, FlockMember, FlockSnapshot, Result,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::app::command::{Command, HELP};

/// What the host should do after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Report(String),
    Quit,
}

/// Demo host around a flock of ducks.
pub struct App {
    pub running: bool,
    pub flock: Flock<Duck>,
}

impl App {
    /// Builds the flock described by `config` and fills it.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let flock = match config.flock.species {
            Some(species) => Flock::with_factory(move || Duck::new(species)),
            None => {
                let mut rng = match config.flock.seed {
                    Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                    None => ChaCha8Rng::from_entropy(),
                };
                Flock::with_factory(move || random_duck(&mut rng))
            }
        };

        let mut app = Self {
            running: true,
            flock,
        };
        app.flock.fill(config.flock.members)?;
        tracing::info!(
            members = app.flock.len(),
            species = ?config.flock.species,
            "Flock ready"
        );
        Ok(app)
    }

    pub fn migrate(&mut self, direction: Direction, distance: f64) -> Result<FlockSnapshot> {
        self.flock.migrate(direction, distance)?;
        Ok(self.flock.snapshot())
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        let report = match command {
            Command::Migrate {
                direction,
                distance,
            } => self.migrate(direction, distance)?.to_string(),
            Command::Fill(count) => {
                self.flock.fill(count)?;
                format!("flock now has {} ducks", self.flock.len())
            }
            Command::Status => self.flock.snapshot().to_string(),
            Command::Members => self.member_report(),
            Command::Help => HELP.to_string(),
            Command::Quit => {
                self.running = false;
                return Ok(Outcome::Quit);
            }
        };
        Ok(Outcome::Report(report))
    }

    fn member_report(&self) -> String {
        self.flock
            .members()
            .iter()
            .enumerate()
            .map(|(i, duck)| {
                let heading = duck
                    .direction()
                    .map_or_else(|| "-".to_string(), |d| d.to_string());
                format!(
                    "{:>3}  {:<8} {:<6} flown {:.1} in {} flights ({:.2} h)",
                    i + 1,
                    duck.species,
                    heading,
                    duck.distance_flown,
                    duck.flights,
                    duck.hours_aloft
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
