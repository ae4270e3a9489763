//! CLI command implementations.

use crate::board::MAX_DIM;

pub trait Command {
    fn execute(self);
}

pub mod best_move;
pub mod play;
pub mod watch;

/// Parses `--depth`. Zero is rejected: a zero-ply search evaluates the root
/// without ever naming a placement.
pub fn parse_depth(value: &str) -> Result<u8, String> {
    let depth: u8 = value
        .parse()
        .map_err(|_| format!("invalid depth `{}`", value))?;
    if depth == 0 {
        return Err("depth must be at least 1".to_string());
    }
    Ok(depth)
}

/// Parses `--rows`/`--cols` against the supported board dimensions.
pub fn parse_dimension(value: &str) -> Result<usize, String> {
    let dim: usize = value
        .parse()
        .map_err(|_| format!("invalid dimension `{}`", value))?;
    if !(1..=MAX_DIM).contains(&dim) {
        return Err(format!("dimension must be between 1 and {}", MAX_DIM));
    }
    Ok(dim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_must_be_positive() {
        assert!(parse_depth("0").is_err());
        assert!(parse_depth("junk").is_err());
        assert_eq!(parse_depth("4"), Ok(4));
    }

    #[test]
    fn test_dimension_bounds() {
        assert!(parse_dimension("0").is_err());
        assert!(parse_dimension("33").is_err());
        assert!(parse_dimension("junk").is_err());
        assert_eq!(parse_dimension("1"), Ok(1));
        assert_eq!(parse_dimension("32"), Ok(32));
    }
}
