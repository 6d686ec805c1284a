/// A cell's position within its row, in chars, pipes excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub col: usize,
    pub len: usize,
}

/// Pipe tables with owned delimiter constants.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';
    /// The only accepted header-separator cell.
    pub const SEPARATOR: &'static str = "---";

    /// Cells of a well-formed row: at least one cell, with the line starting
    /// and ending on a pipe.
    pub fn cells(line: &str) -> Option<Vec<Cell>> {
        let fields: Vec<&str> = line.split(Self::PIPE).collect();
        if fields.len() < 3 || !fields[0].is_empty() || !fields[fields.len() - 1].is_empty() {
            return None;
        }
        let mut col = 1;
        let cells = fields[1..fields.len() - 1]
            .iter()
            .map(|field| {
                let len = field.chars().count();
                let cell = Cell { col, len };
                col += len + 1;
                cell
            })
            .collect();
        Some(cells)
    }

    /// Column count of a header-separator row (`|---|---|`).
    pub fn separator_columns(line: &str) -> Option<usize> {
        let fields: Vec<&str> = line.split(Self::PIPE).collect();
        if fields.len() < 3 || !fields[0].is_empty() || !fields[fields.len() - 1].is_empty() {
            return None;
        }
        let middle = &fields[1..fields.len() - 1];
        middle
            .iter()
            .all(|field| *field == Self::SEPARATOR)
            .then_some(middle.len())
    }

    /// Char columns of every pipe in `line`.
    pub fn pipes(line: &str) -> impl Iterator<Item = usize> + '_ {
        line.chars()
            .enumerate()
            .filter(|(_, c)| *c == Self::PIPE)
            .map(|(col, _)| col)
    }
}
