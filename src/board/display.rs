use std::fmt;

use super::Board;

impl Board {
    /// Renders the board as a bordered ASCII grid.
    pub fn to_ascii(&self) -> String {
        let mut out = String::new();
        let horizontal_rule = format!("+{}+\n", "-".repeat(self.cols()));

        out.push_str(&horizontal_rule);
        for r in 0..self.rows() {
            out.push('|');
            for c in 0..self.cols() {
                out.push(self.get(r, c).to_char());
            }
            out.push_str("|\n");
        }
        out.push_str(&horizontal_rule);

        out
    }

    /// Renders the board in the layout format accepted by `FromStr`.
    pub fn to_layout(&self) -> String {
        let mut rows = Vec::with_capacity(self.rows());
        for r in 0..self.rows() {
            rows.push(
                (0..self.cols())
                    .map(|c| self.get(r, c).to_char())
                    .collect::<String>(),
            );
        }
        rows.join("/")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ascii())
    }
}
