//! The 21 canonical Blokus polyominoes and their orientation sets.
//!
//! Each piece is defined once as a set of `(row, col)` offsets; the distinct
//! orientations (4 rotations and their horizontal-flip counterparts, at most 8)
//! are generated at first use and cached process-wide. The table is immutable
//! and safe to read from any number of AI worker threads.

use std::sync::OnceLock;

/// Index into the canonical piece table, `0..PIECE_COUNT`.
pub type PieceId = usize;

/// Number of distinct Blokus pieces per player.
pub const PIECE_COUNT: usize = 21;

/// The single-cell piece. Placing it last earns a scoring bonus.
pub const MONOMINO: PieceId = 0;

/// A piece together with every distinct orientation reachable by rotating
/// and flipping its base shape.
///
/// Orientation offsets are normalized so the minimum row and column are both
/// zero, and each orientation's cells are sorted, so two orientations are
/// equal exactly when their coordinate sets are equal. Orientation order is
/// the generation order (rotations first, then the flipped rotations) and is
/// stable across calls.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PieceShape {
    pub id: PieceId,
    pub name: &'static str,
    pub orientations: Vec<Vec<(i32, i32)>>,
}

impl PieceShape {
    fn new(id: PieceId, name: &'static str, base: &[(i32, i32)]) -> Self {
        let mut orientations: Vec<Vec<(i32, i32)>> = Vec::new();
        let mut current: Vec<(i32, i32)> = base.to_vec();

        for _ in 0..2 {
            // Flip
            for _ in 0..4 {
                // Rotate
                let candidate = normalized(&current);
                if !orientations.contains(&candidate) {
                    orientations.push(candidate);
                }
                current = current.iter().map(|&(r, c)| (-c, r)).collect();
            }
            current = current.iter().map(|&(r, c)| (r, -c)).collect();
        }

        PieceShape {
            id,
            name,
            orientations,
        }
    }

    /// Number of cells the piece covers (1-5).
    pub fn size(&self) -> usize {
        self.orientations[0].len()
    }
}

/// Translates a shape so `min(row) = min(col) = 0`, then sorts its cells.
fn normalized(shape: &[(i32, i32)]) -> Vec<(i32, i32)> {
    let min_r = shape.iter().map(|p| p.0).min().unwrap_or(0);
    let min_c = shape.iter().map(|p| p.1).min().unwrap_or(0);
    let mut cells: Vec<(i32, i32)> = shape.iter().map(|p| (p.0 - min_r, p.1 - min_c)).collect();
    cells.sort();
    cells
}

/// Base geometry of the canonical set, ordered by size: monomino, domino,
/// trominoes, tetrominoes, then the twelve pentominoes under their
/// conventional letter names.
const BASE_SHAPES: [(&str, &[(i32, i32)]); PIECE_COUNT] = [
    ("I1", &[(0, 0)]),
    ("I2", &[(0, 0), (0, 1)]),
    ("V3", &[(0, 0), (1, 0), (1, 1)]),
    ("I3", &[(0, 0), (0, 1), (0, 2)]),
    ("O4", &[(0, 0), (0, 1), (1, 0), (1, 1)]),
    ("I4", &[(0, 0), (0, 1), (0, 2), (0, 3)]),
    ("T4", &[(0, 0), (0, 1), (0, 2), (1, 1)]),
    ("S4", &[(0, 1), (0, 2), (1, 0), (1, 1)]),
    ("L4", &[(0, 0), (1, 0), (2, 0), (2, 1)]),
    ("F5", &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)]),
    ("I5", &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]),
    ("L5", &[(0, 0), (1, 0), (2, 0), (3, 0), (3, 1)]),
    ("N5", &[(0, 1), (1, 1), (2, 0), (2, 1), (3, 0)]),
    ("P5", &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]),
    ("T5", &[(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)]),
    ("U5", &[(0, 0), (0, 2), (1, 0), (1, 1), (1, 2)]),
    ("V5", &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]),
    ("W5", &[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)]),
    ("X5", &[(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]),
    ("Y5", &[(0, 1), (1, 0), (1, 1), (2, 1), (3, 1)]),
    ("Z5", &[(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)]),
];

static SHAPES: OnceLock<Vec<PieceShape>> = OnceLock::new();

/// The full piece table, built on first use and shared read-only afterwards.
pub fn pieces() -> &'static [PieceShape] {
    SHAPES
        .get_or_init(|| {
            BASE_SHAPES
                .iter()
                .enumerate()
                .map(|(id, &(name, base))| PieceShape::new(id, name, base))
                .collect()
        })
        .as_slice()
}

/// All distinct orientations of a piece, in stable order. Unknown ids yield
/// an empty slice.
pub fn orientations(piece: PieceId) -> &'static [Vec<(i32, i32)>] {
    pieces()
        .get(piece)
        .map(|p| p.orientations.as_slice())
        .unwrap_or(&[])
}

/// A single orientation's offsets, or `None` if the piece id or orientation
/// index is out of range.
pub fn orientation(piece: PieceId, index: usize) -> Option<&'static [(i32, i32)]> {
    pieces()
        .get(piece)?
        .orientations
        .get(index)
        .map(Vec::as_slice)
}

/// Cell count of a piece; 0 for an unknown id.
pub fn piece_size(piece: PieceId) -> usize {
    pieces().get(piece).map_or(0, PieceShape::size)
}

/// Conventional name of a piece, e.g. `"F5"`.
pub fn piece_name(piece: PieceId) -> &'static str {
    pieces().get(piece).map_or("?", |p| p.name)
}
