use std::fmt;

use super::team::Team;

/// The two board cells occupied by one domino.
///
/// Cells are stored in enumeration order: the second cell is always to the
/// right of (Home) or below (Away) the first.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Placement {
    r1: usize,
    c1: usize,
    r2: usize,
    c2: usize,
}

impl Placement {
    pub fn new(r1: usize, c1: usize, r2: usize, c2: usize) -> Self {
        Self { r1, c1, r2, c2 }
    }

    /// A Home placement covering `(r, c)` and `(r, c + 1)`.
    pub fn horizontal(r: usize, c: usize) -> Self {
        Self::new(r, c, r, c + 1)
    }

    /// An Away placement covering `(r, c)` and `(r + 1, c)`.
    pub fn vertical(r: usize, c: usize) -> Self {
        Self::new(r, c, r + 1, c)
    }

    /// The placement for `team`'s fixed orientation anchored at `(r, c)`.
    pub fn for_team(team: Team, r: usize, c: usize) -> Self {
        match team {
            Team::Home => Self::horizontal(r, c),
            Team::Away => Self::vertical(r, c),
        }
    }

    pub fn r1(&self) -> usize {
        self.r1
    }

    pub fn c1(&self) -> usize {
        self.c1
    }

    pub fn r2(&self) -> usize {
        self.r2
    }

    pub fn c2(&self) -> usize {
        self.c2
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})-({},{})", self.r1, self.c1, self.r2, self.c2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientations() {
        assert_eq!(Placement::horizontal(2, 3), Placement::new(2, 3, 2, 4));
        assert_eq!(Placement::vertical(2, 3), Placement::new(2, 3, 3, 3));
        assert_eq!(
            Placement::for_team(Team::Home, 0, 0),
            Placement::horizontal(0, 0)
        );
        assert_eq!(
            Placement::for_team(Team::Away, 0, 0),
            Placement::vertical(0, 0)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Placement::horizontal(1, 2).to_string(), "(1,2)-(1,3)");
    }
}
