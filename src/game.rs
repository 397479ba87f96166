//! The game state machine: turn order, pass tracking, end detection.
//!
//! `Game` is the single source of truth. Every move, human or AI, goes
//! through [`Game::submit_move`] and the board validator before it touches
//! the board; AI workers only ever see cloned snapshots, and their decisions
//! come back through the same entry points.

use crate::board::{Board, PlacementError, PlayerId};
use crate::moves::Move;
use crate::movegen;
use crate::player::{Player, PlayerKind};
use crate::scoring;
use std::error::Error;
use std::fmt;
use std::time::SystemTime;

/// Whether the game is still being played.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    InProgress,
    Ended,
}

/// What a player did on their turn.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TurnAction {
    Placed(Move),
    Passed,
}

/// A single entry in the append-only move history.
#[derive(Clone, Debug)]
pub struct HistoryEntry {
    /// When the action was recorded.
    pub timestamp: SystemTime,
    /// 1-indexed position in the game.
    pub move_number: usize,
    /// Who acted.
    pub player: PlayerId,
    /// The action taken.
    pub action: TurnAction,
}

/// Result of a successfully applied move or pass.
#[derive(Clone, Copy, Debug)]
pub struct MoveOutcome {
    /// Player who acted.
    pub player: PlayerId,
    /// Whether the game ended as a result.
    pub game_over: bool,
}

/// Errors possible when setting up a new game.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SetupError {
    /// Blokus is played by 2-4 players.
    PlayerCount(usize),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::PlayerCount(n) => {
                write!(f, "Blokus needs 2-4 players, got {}", n)
            }
        }
    }
}

impl Error for SetupError {}

/// Full game state: board, players, turn bookkeeping, and history.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    players: Vec<Player>,
    current: usize,
    consecutive_passes: usize,
    phase: Phase,
    history: Vec<HistoryEntry>,
}

impl Game {
    /// Starts a game for 2-4 seats. Start corners are assigned in board
    /// order: (0,0), (0,19), (19,19), (19,0).
    pub fn new(configs: &[PlayerKind]) -> Result<Self, SetupError> {
        if !(2..=4).contains(&configs.len()) {
            return Err(SetupError::PlayerCount(configs.len()));
        }
        let players = configs
            .iter()
            .enumerate()
            .map(|(id, &kind)| Player::new(id as PlayerId, kind))
            .collect();
        Ok(Game {
            board: Board::new(),
            players,
            current: 0,
            consecutive_passes: 0,
            phase: Phase::InProgress,
            history: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// A player by id. Ids are dense, `0..players().len()`.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id as usize]
    }

    pub fn current_player_id(&self) -> PlayerId {
        self.players[self.current].id()
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Ended
    }

    pub fn consecutive_passes(&self) -> usize {
        self.consecutive_passes
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Legal placements for a player, for move preview as much as for AI.
    /// Empty once the game has ended.
    pub fn legal_moves(&self, player: PlayerId) -> Vec<Move> {
        if self.is_over() {
            Vec::new()
        } else {
            movegen::legal_moves(&self.board, self.player(player))
        }
    }

    /// Validates and commits a placement for the player to act.
    ///
    /// On rejection the game is untouched. On success the pass streak
    /// resets, the turn advances, and the end condition is re-checked.
    pub fn submit_move(&mut self, mv: Move) -> Result<MoveOutcome, PlacementError> {
        if self.is_over() {
            return Err(PlacementError::GameAlreadyOver);
        }
        if mv.player != self.current_player_id() {
            return Err(PlacementError::NotYourTurn);
        }

        self.board.validate(&self.players[self.current], &mv)?;
        self.board.commit(&mv);
        let player = &mut self.players[self.current];
        player.mark_placed(mv.piece);
        player.set_passed(false);
        self.consecutive_passes = 0;
        self.record(TurnAction::Placed(mv));
        self.advance_turn();
        self.refresh_phase();
        Ok(MoveOutcome {
            player: mv.player,
            game_over: self.is_over(),
        })
    }

    /// Records a pass for the player to act.
    ///
    /// Passing is allowed unconditionally; callers are expected to pass only
    /// when [`Game::legal_moves`] is empty, but that is their contract, not
    /// one enforced here.
    pub fn submit_pass(&mut self, player: PlayerId) -> Result<MoveOutcome, PlacementError> {
        if self.is_over() {
            return Err(PlacementError::GameAlreadyOver);
        }
        if player != self.current_player_id() {
            return Err(PlacementError::NotYourTurn);
        }

        self.players[self.current].set_passed(true);
        self.consecutive_passes += 1;
        self.record(TurnAction::Passed);
        self.advance_turn();
        self.refresh_phase();
        Ok(MoveOutcome {
            player,
            game_over: self.is_over(),
        })
    }

    /// Current score per player, in id order. Authoritative once the game
    /// has ended; a live estimate before that (same formula either way).
    pub fn scores(&self) -> Vec<(PlayerId, i32)> {
        self.players
            .iter()
            .map(|p| (p.id(), scoring::score(p)))
            .collect()
    }

    /// A clone for AI workers to search. The worker reads the snapshot
    /// freely; the authoritative state is only mutated when its decision
    /// comes back through `submit_move`/`submit_pass`.
    pub fn snapshot_for_search(&self) -> Game {
        self.clone()
    }

    /// Applies a placement onto a cloned state without touching turn order
    /// or history. Used by the AI evaluation to look one ply ahead.
    pub(crate) fn hypothetical(&self, mv: &Move) -> Game {
        let mut after = self.clone();
        after.board.commit(mv);
        after.players[mv.player as usize].mark_placed(mv.piece);
        after
    }

    fn record(&mut self, action: TurnAction) {
        self.history.push(HistoryEntry {
            timestamp: SystemTime::now(),
            move_number: self.history.len() + 1,
            player: self.current_player_id(),
            action,
        });
    }

    fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    /// End detection, run after every transition: the game ends after a full
    /// rotation of passes, or when every player is either out of pieces or
    /// out of legal moves.
    fn refresh_phase(&mut self) {
        if self.consecutive_passes >= self.players.len() {
            self.phase = Phase::Ended;
            return;
        }
        let stuck = self.players.iter().all(|p| {
            p.has_placed_all() || movegen::legal_moves(&self.board, p).is_empty()
        });
        if stuck {
            self.phase = Phase::Ended;
        }
    }

    /// Human-readable transcript of the move history.
    pub fn format_history(&self) -> String {
        if self.history.is_empty() {
            return String::from("No moves made yet.");
        }

        let mut output = String::from("=== Blokus Game History ===\n\n");
        for entry in &self.history {
            let name = self.player(entry.player).color().name();
            match &entry.action {
                TurnAction::Placed(mv) => {
                    output.push_str(&format!("{}. {} - {}\n", entry.move_number, name, mv));
                }
                TurnAction::Passed => {
                    output.push_str(&format!("{}. {} - pass\n", entry.move_number, name));
                }
            }
        }

        match self.phase {
            Phase::Ended => {
                let winners = scoring::winners(&self.players);
                let names: Vec<&str> = winners
                    .iter()
                    .map(|&id| self.player(id).color().name())
                    .collect();
                output.push_str(&format!("\nResult: {} wins!\n", names.join(" & ")));
            }
            Phase::InProgress => {
                output.push_str(&format!(
                    "\n(Game in progress - {} to move)\n",
                    self.current_player().color().name()
                ));
            }
        }
        output
    }
}
