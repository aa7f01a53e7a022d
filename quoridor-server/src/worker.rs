// --- File: quoridor-room-server/quoridor-server/src/worker.rs ---

//! Bot Worker (C9): polls the job table, runs a strategy under a hard
//! compute budget, and commits the decision through the same path a human
//! action takes (§4.9). Chaining across consecutive bot turns falls out of
//! `scheduler::on_commit` enqueuing the next seat's job, picked up on a
//! later poll tick rather than recursed into synchronously.

use std::sync::Arc;
use std::time::{Duration, Instant};

use quoridor_core::{select_strategy, SeededRng};
use quoridor_store::{BotMoveJob, JobStatus, RoomStore};

use crate::config::{BOT_BUDGET_WARN_RATIO, BOT_COMPUTE_BUDGET, WORKER_BATCH_SIZE, WORKER_POLL_INTERVAL};
use crate::turn_controller::{commit_validated_action, ActionRequest};

pub struct BotWorker {
    store: Arc<dyn RoomStore>,
    budget: Duration,
    batch_size: usize,
    poll_interval: Duration,
}

impl BotWorker {
    pub fn new(store: Arc<dyn RoomStore>) -> Self {
        BotWorker { store, budget: BOT_COMPUTE_BUDGET, batch_size: WORKER_BATCH_SIZE, poll_interval: WORKER_POLL_INTERVAL }
    }

    /// Runs forever, polling at `poll_interval`. Intended to be spawned as a
    /// long-lived task (`tokio::spawn(worker.run())`).
    pub async fn run(&self) {
        loop {
            self.tick().await;
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Claims and processes one batch of pending jobs. Exposed separately
    /// from `run` so callers (and tests) can drive the worker deterministically.
    pub async fn tick(&self) {
        let jobs = self.store.claim_next_pending(self.batch_size).await;
        for job in jobs {
            self.process_job(job).await;
        }
    }

    async fn process_job(&self, job: BotMoveJob) {
        let room = match self.store.load_room(&job.room_code).await {
            Ok(room) => room,
            Err(_) => {
                let _ = self.store.mark_job(job.id, JobStatus::Stale, Some("room no longer exists".into())).await;
                return;
            }
        };

        if room.turn_number != job.expected_turn {
            let _ = self.store.mark_job(job.id, JobStatus::Stale, Some("turn number advanced before the job ran".into())).await;
            return;
        }
        if room.current_turn != job.player_id {
            let _ = self.store.mark_job(job.id, JobStatus::Stale, Some("current turn no longer matches the job's seat".into())).await;
            return;
        }
        let Some(player) = room.players.iter().find(|p| p.player_id == job.player_id) else {
            let _ = self.store.mark_job(job.id, JobStatus::Stale, Some("seated player no longer present".into())).await;
            return;
        };

        let snapshot = room.snapshot();
        let strategy = select_strategy(player.player_type);
        let mut rng = SeededRng::new(&room.bot_seed, room.turn_number, job.player_id);
        let player_id = job.player_id;

        let start = Instant::now();
        let decided = tokio::time::timeout(self.budget, tokio::task::spawn_blocking(move || strategy.decide(&snapshot, player_id, &mut rng))).await;
        let elapsed = start.elapsed();

        let decision = match decided {
            Err(_) => {
                tracing::warn!(room = %job.room_code, player = player_id, "bot decision exceeded the compute budget");
                let _ = self.store.mark_job(job.id, JobStatus::Failed, Some("decision exceeded the compute budget".into())).await;
                return;
            }
            Ok(Err(join_error)) => {
                let _ = self.store.mark_job(job.id, JobStatus::Failed, Some(format!("strategy task panicked: {join_error}"))).await;
                return;
            }
            Ok(Ok(decision)) => decision,
        };

        if elapsed.as_secs_f64() > self.budget.as_secs_f64() * BOT_BUDGET_WARN_RATIO {
            tracing::warn!(room = %job.room_code, player = player_id, compute_time_ms = elapsed.as_millis() as u64, "bot decision close to the compute budget");
        }

        let action = match decision.kind {
            quoridor_core::DecisionKind::Move => ActionRequest::Move { to: (decision.row, decision.col) },
            quoridor_core::DecisionKind::Wall => ActionRequest::Barrier {
                row: decision.row,
                col: decision.col,
                orientation: decision.orientation.expect("wall decisions always carry an orientation"),
            },
        };

        match commit_validated_action(self.store.as_ref(), &job.room_code, &room, player_id, action).await {
            Ok(_) => {
                tracing::info!(
                    room = %job.room_code,
                    player = player_id,
                    reasoning = %decision.reasoning,
                    candidates_evaluated = decision.candidates_evaluated,
                    compute_time_ms = elapsed.as_millis() as u64,
                    "bot decision committed"
                );
                let _ = self.store.mark_job(job.id, JobStatus::Completed, None).await;
            }
            Err(crate::error::ActionError::Stale) => {
                let _ = self.store.mark_job(job.id, JobStatus::Stale, Some("turn advanced between load and commit".into())).await;
            }
            Err(err) => {
                let _ = self.store.mark_job(job.id, JobStatus::Failed, Some(err.to_string())).await;
            }
        }
    }
}
