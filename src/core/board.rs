use serde::{Deserialize, Serialize};

use crate::core::Player;

pub const CELL_COUNT: usize = 9;

/// Row-major index triples: rows, then columns, then the two diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    Taken(Player),
}

impl Mark {
    pub fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Taken(player) => Some(player),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    /// Places `player` on an empty cell. Returns `false` without touching the
    /// board when the index is out of range or the cell is already taken.
    pub fn place(&mut self, index: usize, player: Player) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_empty() => {
                *cell = Mark::Taken(player);
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// First line, in `WIN_LINES` order, whose three cells hold the same
    /// non-empty mark.
    pub fn winning_line(&self) -> Option<(Player, [usize; 3])> {
        WIN_LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            let owner = self.cells[a].owner()?;
            if self.cells[b] == self.cells[a] && self.cells[c] == self.cells[a] {
                Some((owner, line))
            } else {
                None
            }
        })
    }
}
