//! The placement value type.
//!
//! A [`Move`] is plain data: who places which piece, in which orientation,
//! anchored where. It owns nothing and asserts nothing about legality; every
//! move passes through the board validator before it is committed.

use crate::board::PlayerId;
use crate::pieces::{self, PieceId};
use std::fmt;
use std::str::FromStr;

/// A proposed placement: `(player, piece, orientation, anchor)`.
///
/// The anchor is the board cell the orientation's normalized `(0, 0)` offset
/// maps to; transformed cells are `anchor + offset` for each offset of the
/// orientation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub player: PlayerId,
    pub piece: PieceId,
    pub orientation: usize,
    pub anchor: (usize, usize),
}

impl Move {
    pub fn new(player: PlayerId, piece: PieceId, orientation: usize, anchor: (usize, usize)) -> Self {
        Move {
            player,
            piece,
            orientation,
            anchor,
        }
    }

    /// Offsets of the selected orientation, or `None` for a malformed move.
    pub fn offsets(&self) -> Option<&'static [(i32, i32)]> {
        pieces::orientation(self.piece, self.orientation)
    }

    /// Absolute board coordinates the move would cover. Coordinates may lie
    /// outside the grid for an unvalidated move; `None` for a malformed one.
    pub fn cells(&self) -> Option<Vec<(i32, i32)>> {
        let offsets = self.offsets()?;
        let (ar, ac) = (self.anchor.0 as i32, self.anchor.1 as i32);
        Some(offsets.iter().map(|&(dr, dc)| (ar + dr, ac + dc)).collect())
    }

    /// Number of cells the move covers; 0 for a malformed move.
    pub fn size(&self) -> usize {
        self.offsets().map_or(0, <[(i32, i32)]>::len)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{},{},{},{})",
            self.player, self.piece, self.orientation, self.anchor.0, self.anchor.1
        )
    }
}

impl FromStr for Move {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('(') && s.ends_with(')') {
            let s = &s[1..s.len() - 1];
            let parts: Vec<&str> = s.split(',').map(|p| p.trim()).collect();
            if parts.len() != 5 {
                return Err("Expected format: (player,piece,orientation,row,col)".to_string());
            }
            let player = parts[0].parse::<PlayerId>().map_err(|e| e.to_string())?;
            let piece = parts[1].parse::<PieceId>().map_err(|e| e.to_string())?;
            let orientation = parts[2].parse::<usize>().map_err(|e| e.to_string())?;
            let row = parts[3].parse::<usize>().map_err(|e| e.to_string())?;
            let col = parts[4].parse::<usize>().map_err(|e| e.to_string())?;
            Ok(Move::new(player, piece, orientation, (row, col)))
        } else {
            Err("Invalid move format".to_string())
        }
    }
}
