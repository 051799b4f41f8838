use std::path::Path;

use crate::jump_erase::prelude::*;

/// A parsed board layout: the size of the grid, the starting cell, and the jump value in every cell.
///
/// Caveat: the layout is only structurally valid; it says nothing about whether any move is
/// available from the start. A layout is turned into a playable game with `GameBoard::new`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardLayout {
    pub size: usize,
    pub start: Coord,
    pub values: Vec<u32>,
}

impl BoardLayout {
    /// Validates an already-tokenized layout.
    pub fn new(size: usize, start: Coord, rows: Vec<Vec<u32>>) -> Result<BoardLayout> {
        if size == 0 {
            return Err(anyhow!("board size must be positive"));
        }
        if !start.in_bounds(size) {
            return Err(anyhow!("start {} is outside a {size}x{size} board", start));
        }
        if rows.len() != size {
            return Err(anyhow!("expected {size} grid rows, received {}", rows.len()));
        }
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(anyhow!("grid row {r} has {} values, expected {size}", row.len()));
            }
        }
        let values = rows.into_iter().flatten().collect();
        Ok(BoardLayout { size, start, values })
    }

    /// Loads a layout from a board file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<BoardLayout> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read board file {}", path.display()))?;
        if contents.trim().is_empty() {
            return Err(anyhow!("board file {} is empty", path.display()));
        }
        contents.parse::<BoardLayout>()
            .with_context(|| format!("failed to parse board file {}", path.display()))
    }

    /// The jump value stored at a coordinate of the layout.
    #[cfg(test)]
    pub fn value(&self, coord: &Coord) -> u32 {
        self.values[coord.row * self.size + coord.col]
    }
}

/// Parses a whitespace-separated line of non-negative integers.
fn _parse_line<T: std::str::FromStr>(line: &str, what: &str) -> Result<Vec<T>> {
    line.split_whitespace().map(|tok| {
        tok.parse::<T>().map_err(|_| anyhow!("invalid {what} value {tok:?}"))
    }).collect()
}

impl std::str::FromStr for BoardLayout {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut lines = s.lines();

        let Some(size_line) = lines.next() else {
            return Err(anyhow!("layout cannot be empty!"));
        };
        let size = size_line.trim().parse::<usize>()
            .map_err(|_| anyhow!("invalid board size {:?}", size_line.trim()))?;

        let Some(start_line) = lines.next() else {
            return Err(anyhow!("layout is missing its start position"));
        };
        let start = match _parse_line::<usize>(start_line, "start")?.as_slice() {
            [row, col, ..] => Coord::new(*row, *col),
            _              => return Err(anyhow!("expected a start row and column, received {start_line:?}"))
        };

        let mut rows = vec![];
        for line in lines.take(size) {
            rows.push(_parse_line::<u32>(line, "grid")?);
        }

        BoardLayout::new(size, start, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::BoardLayout;
    use crate::jump_erase::prelude::*;

    const LAYOUT: &str = "3\n0 1\n1 2 3\n4 5 6\n7 8 9\n";

    #[test]
    fn parses_layout() {
        let layout = LAYOUT.parse::<BoardLayout>().unwrap();
        assert_eq!(layout.size, 3);
        assert_eq!(layout.start, Coord::new(0, 1));
        assert_eq!(layout.value(&Coord::new(2, 0)), 7);
        assert_eq!(layout.values.len(), 9);
    }

    #[test]
    fn tolerates_extra_whitespace_and_trailing_lines() {
        let layout = "  2 \n1   1\n 0 1\n2  3 \n\n\n".parse::<BoardLayout>().unwrap();
        assert_eq!(layout.start, Coord::new(1, 1));
        assert_eq!(layout.values, vec![0, 1, 2, 3]);
    }

    #[test]
    fn rejects_missing_rows() {
        assert!("3\n0 0\n1 1 1\n1 1 1\n".parse::<BoardLayout>().is_err());
    }

    #[test]
    fn rejects_short_rows() {
        assert!("2\n0 0\n1 1\n1\n".parse::<BoardLayout>().is_err());
    }

    #[test]
    fn rejects_non_numeric_and_negative_tokens() {
        assert!("2\n0 0\n1 x\n1 1\n".parse::<BoardLayout>().is_err());
        assert!("2\n0 0\n1 -1\n1 1\n".parse::<BoardLayout>().is_err());
        assert!("two\n0 0\n1 1\n1 1\n".parse::<BoardLayout>().is_err());
    }

    #[test]
    fn rejects_bad_start() {
        assert!("2\n2 0\n1 1\n1 1\n".parse::<BoardLayout>().is_err());
        assert!("2\n0\n1 1\n1 1\n".parse::<BoardLayout>().is_err());
        assert!("2\n".parse::<BoardLayout>().is_err());
    }

    #[test]
    fn rejects_empty_board() {
        assert!("0\n0 0\n".parse::<BoardLayout>().is_err());
        assert!("".parse::<BoardLayout>().is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(BoardLayout::from_file("definitely/not/a/board.dat").is_err());
    }
}
