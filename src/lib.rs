//! # Blokus Rule Engine and AI Core
//!
//! Rule validation, move generation, turn bookkeeping, scoring, and
//! bounded-time AI move selection for four-player Blokus on a 20x20 board.
//!
//! The crate renders nothing and persists nothing: a UI or application layer
//! drives it through [`Game`] and, for computer seats, through the
//! cancellable [`AiWorker`]. Every move, regardless of source, passes the
//! same placement validator before it reaches the board.
//!
//! ## Layout
//! - [`pieces`]: the 21 canonical polyominoes and their orientation sets
//! - [`board`] / [`moves`]: grid state and the placement validator
//! - [`movegen`]: legal-move enumeration pruned to corner anchors
//! - [`game`] / [`player`]: the turn state machine and per-seat state
//! - [`scoring`]: scores, standings, winners
//! - [`ai`]: Easy/Medium/Hard strategies and the background worker
//!
//! ## Example
//! ```
//! use blokus::{Difficulty, Game, PlayerKind};
//!
//! let mut game = Game::new(&[
//!     PlayerKind::Human,
//!     PlayerKind::Ai(Difficulty::Medium),
//! ]).unwrap();
//!
//! // The human opens in their corner with the first legal move on offer.
//! let opening = game.legal_moves(0)[0];
//! game.submit_move(opening).unwrap();
//! ```

pub mod ai;
pub mod board;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod pieces;
pub mod player;
pub mod scoring;

pub use ai::{
    strategy_for, AiHandle, AiWorker, CancelToken, Decision, Difficulty, EasyStrategy,
    EvalWeights, HardStrategy, MediumStrategy, Strategy,
};
pub use board::{Board, PlacementError, PlayerId, BOARD_SIZE, START_CORNERS};
pub use game::{Game, HistoryEntry, MoveOutcome, Phase, SetupError, TurnAction};
pub use movegen::legal_moves;
pub use moves::Move;
pub use pieces::{PieceId, MONOMINO, PIECE_COUNT};
pub use player::{Color, Player, PlayerKind};
