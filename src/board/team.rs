use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

use super::cell::Cell;

/// The two sides of a Domineering game. Home places dominoes horizontally,
/// Away places them vertically.
#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord)]
pub enum Team {
    Home = 0,
    Away = 1,
}

impl Team {
    const ALL: [Team; 2] = [Team::Home, Team::Away];

    pub fn opposite(&self) -> Self {
        match self {
            Team::Home => Team::Away,
            Team::Away => Team::Home,
        }
    }

    /// Home maximizes the evaluation score, Away minimizes it.
    pub fn maximize_score(&self) -> bool {
        match self {
            Team::Home => true,
            Team::Away => false,
        }
    }

    pub fn symbol(&self) -> Cell {
        match self {
            Team::Home => Cell::Home,
            Team::Away => Cell::Away,
        }
    }

    pub fn random() -> Self {
        *Self::ALL.choose(&mut rand::thread_rng()).unwrap()
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let team_str = match self {
            Team::Home => "home",
            Team::Away => "away",
        };
        write!(f, "{}", team_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Team {
    type Err = ParseError;
    fn from_str(team: &str) -> Result<Self, Self::Err> {
        match team {
            "home" => Ok(Team::Home),
            "away" => Ok(Team::Away),
            "random" => Ok(Team::random()),
            _ => Err("invalid team; options are: home, away, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random() {
        assert!(Team::ALL.contains(&Team::random()));
    }

    #[test]
    fn test_parse_home() {
        assert_eq!(Team::Home, Team::from_str("home").unwrap());
    }

    #[test]
    fn test_parse_away() {
        assert_eq!(Team::Away, Team::from_str("away").unwrap());
    }

    #[test]
    fn test_parse_random() {
        let rand_team = Team::from_str("random").unwrap();
        assert!(Team::ALL.contains(&rand_team));
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Team::Home.opposite(), Team::Away);
        assert_eq!(Team::Away.opposite(), Team::Home);
    }

    #[test]
    fn test_maximize_score() {
        assert!(Team::Home.maximize_score());
        assert!(!Team::Away.maximize_score());
    }
}
