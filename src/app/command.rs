use flock_core::{Direction, FlockError, Result};
use std::str::FromStr;

/// One line of input to the flock menu.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Migrate { direction: Direction, distance: f64 },
    Fill(i64),
    Status,
    Members,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  migrate <direction> <distance>   move the flock (also: <direction> <distance>)
  fill <count>                     add ducks to the flock
  status                           show position and distances
  members                          list every duck with its flight log
  help                             show this text
  quit                             leave";

impl FromStr for Command {
    type Err = FlockError;

    fn from_str(line: &str) -> Result<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["migrate" | "m", dir, dist] | [dir, dist] if dir.parse::<Direction>().is_ok() => {
                Ok(Command::Migrate {
                    direction: dir.parse()?,
                    distance: parse_distance(dist)?,
                })
            }
            ["migrate" | "m", dir, _] => {
                Err(FlockError::parse(format!("unknown direction '{dir}'")))
            }
            ["fill" | "f", count] => count
                .parse::<i64>()
                .map(Command::Fill)
                .map_err(|_| FlockError::parse(format!("'{count}' is not a member count"))),
            ["status" | "s"] => Ok(Command::Status),
            ["members" | "ls"] => Ok(Command::Members),
            ["help" | "h" | "?"] => Ok(Command::Help),
            ["quit" | "q" | "exit"] => Ok(Command::Quit),
            [] => Err(FlockError::parse("empty command")),
            _ => Err(FlockError::parse(format!(
                "unrecognised command '{}'",
                line.trim()
            ))),
        }
    }
}

/// Parses a `<direction>:<distance>` leg, e.g. `north:10` or `E:2.5`.
pub fn parse_leg(leg: &str) -> Result<(Direction, f64)> {
    let (dir, dist) = leg.split_once(':').ok_or_else(|| {
        FlockError::parse(format!("leg '{leg}' is not <direction>:<distance>"))
    })?;
    Ok((dir.parse()?, parse_distance(dist)?))
}

fn parse_distance(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| FlockError::parse(format!("'{text}' is not a distance")))
}
