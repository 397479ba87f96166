//! Background AI computation.
//!
//! A single long-lived worker thread serves move requests one at a time:
//! turns are strictly serialized, so there is never more than one
//! computation in flight. Each request carries its own cancellation token
//! and reply channel; the requester gets an [`AiHandle`] to poll, await with
//! the difficulty's time budget, or cancel.
//!
//! A strategy that panics is caught here and downgraded to a pass; no AI
//! fault ever reaches the game state machine.

use crate::ai::{strategy_for, CancelToken, Decision, Difficulty, Strategy};
use crate::board::PlayerId;
use crate::game::Game;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

enum AiRequest {
    Choose {
        state: Game,
        player: PlayerId,
        difficulty: Difficulty,
        cancel: CancelToken,
        reply: Sender<Decision>,
    },
    Stop,
}

/// Handle to one in-flight AI decision.
pub struct AiHandle {
    rx: Receiver<Decision>,
    cancel: CancelToken,
    budget: Duration,
}

impl AiHandle {
    /// Requests cooperative cancellation of the computation. The worker will
    /// discard the result; callers treat the turn as a pass.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// The soft time target for this request's difficulty tier.
    pub fn time_budget(&self) -> Duration {
        self.budget
    }

    /// Non-blocking poll for the decision.
    pub fn try_decision(&self) -> Option<Decision> {
        self.rx.try_recv().ok()
    }

    /// Blocks until the decision arrives, the computation is cancelled, or
    /// the time budget runs out. Timeout raises cancellation and falls back
    /// to a pass, so a slow strategy costs the player their turn rather than
    /// stalling the game.
    pub fn wait(&self) -> Decision {
        let deadline = Instant::now() + self.budget;
        loop {
            match self.rx.recv_timeout(POLL_INTERVAL) {
                Ok(decision) => return decision,
                Err(RecvTimeoutError::Disconnected) => return Decision::Pass,
                Err(RecvTimeoutError::Timeout) => {}
            }
            if self.cancel.is_cancelled() {
                return Decision::Pass;
            }
            if Instant::now() >= deadline {
                self.cancel.cancel();
                return Decision::Pass;
            }
        }
    }
}

/// The AI worker thread plus its request channel.
pub struct AiWorker {
    handle: Option<JoinHandle<()>>,
    tx: Sender<AiRequest>,
    shutdown: CancelToken,
}

impl AiWorker {
    /// Spawns the worker. The seed feeds the strategies' random choices so
    /// whole games can be replayed deterministically.
    pub fn new(seed: u64) -> Self {
        let (tx, rx) = mpsc::channel::<AiRequest>();
        let shutdown = CancelToken::new();
        let shutdown_flag = shutdown.clone();

        let handle = thread::spawn(move || {
            let easy = strategy_for(Difficulty::Easy, seed);
            let medium = strategy_for(Difficulty::Medium, seed);
            let hard = strategy_for(Difficulty::Hard, seed);

            for request in rx {
                match request {
                    AiRequest::Choose {
                        state,
                        player,
                        difficulty,
                        cancel,
                        reply,
                    } => {
                        if shutdown_flag.is_cancelled() {
                            break;
                        }
                        if cancel.is_cancelled() {
                            continue;
                        }
                        let strategy: &dyn Strategy = match difficulty {
                            Difficulty::Easy => easy.as_ref(),
                            Difficulty::Medium => medium.as_ref(),
                            Difficulty::Hard => hard.as_ref(),
                        };
                        let decision = panic::catch_unwind(AssertUnwindSafe(|| {
                            strategy.choose(&state, player, &cancel)
                        }))
                        .unwrap_or(Decision::Pass);
                        if !cancel.is_cancelled() {
                            reply.send(decision).ok();
                        }
                    }
                    AiRequest::Stop => break,
                }
            }
        });

        AiWorker {
            handle: Some(handle),
            tx,
            shutdown,
        }
    }

    /// Asks for a decision on a snapshot of the state. Returns immediately;
    /// the decision arrives through the handle.
    pub fn request_move(&self, state: &Game, player: PlayerId, difficulty: Difficulty) -> AiHandle {
        let cancel = CancelToken::new();
        let (reply_tx, reply_rx) = mpsc::channel();
        self.tx
            .send(AiRequest::Choose {
                state: state.snapshot_for_search(),
                player,
                difficulty,
                cancel: cancel.clone(),
                reply: reply_tx,
            })
            .ok();
        AiHandle {
            rx: reply_rx,
            cancel,
            budget: difficulty.time_budget(),
        }
    }

    /// Explicitly stops the worker. In-flight work notices the flag at its
    /// next evaluation step.
    pub fn stop(&self) {
        self.shutdown.cancel();
        self.tx.send(AiRequest::Stop).ok();
    }
}

impl Drop for AiWorker {
    fn drop(&mut self) {
        self.stop();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerKind;

    #[test]
    fn worker_produces_an_applicable_decision() {
        let mut game = Game::new(&[PlayerKind::Ai(Difficulty::Easy), PlayerKind::Human]).unwrap();
        let worker = AiWorker::new(11);
        let handle = worker.request_move(&game, 0, Difficulty::Easy);
        match handle.wait() {
            Decision::Play(mv) => {
                assert!(game.submit_move(mv).is_ok());
            }
            Decision::Pass => panic!("fresh board always has a first move"),
        }
    }

    #[test]
    fn cancelled_request_returns_promptly_without_mutating_state() {
        let game = Game::new(&[PlayerKind::Ai(Difficulty::Hard), PlayerKind::Human]).unwrap();
        let before = game.board().clone();
        let worker = AiWorker::new(11);
        let handle = worker.request_move(&game, 0, Difficulty::Hard);
        handle.cancel();

        // The computation may already have finished before the flag landed,
        // so the decision itself is racy; the guarantees are prompt return
        // and an untouched board.
        let started = Instant::now();
        let _ = handle.wait();
        assert!(started.elapsed() < Difficulty::Hard.time_budget());
        assert_eq!(*game.board(), before);
    }

    #[test]
    fn worker_matches_a_directly_seeded_strategy() {
        let game = Game::new(&[PlayerKind::Ai(Difficulty::Easy), PlayerKind::Human]).unwrap();
        let worker = AiWorker::new(42);
        let from_worker = worker.request_move(&game, 0, Difficulty::Easy).wait();
        let direct = strategy_for(Difficulty::Easy, 42).choose(&game, 0, &CancelToken::new());
        assert_eq!(from_worker, direct);
    }

    #[test]
    fn stopping_twice_is_harmless() {
        let worker = AiWorker::new(0);
        worker.stop();
        worker.stop();
        // Drop joins the already-stopped thread.
    }
}
