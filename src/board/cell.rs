use std::fmt;

/// Contents of a single board cell.
///
/// `Marked` only ever appears on the scratch board the evaluation pipeline
/// works on; it flags cells already counted by an earlier scoring pass.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty = 0,
    Home = 1,
    Away = 2,
    Marked = 3,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Home => 'H',
            Cell::Away => 'A',
            Cell::Marked => '!',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            'H' => Some(Cell::Home),
            'A' => Some(Cell::Away),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_round_trip() {
        for &cell in &[Cell::Empty, Cell::Home, Cell::Away] {
            assert_eq!(Cell::from_char(cell.to_char()), Some(cell));
        }
    }

    #[test]
    fn test_marked_is_not_parseable() {
        // Marks are scratch-only state and never appear in a layout string.
        assert_eq!(Cell::from_char('!'), None);
    }
}
