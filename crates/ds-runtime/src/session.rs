//! The session task and its handle.

use std::time::Duration;

use ds_core::{ActionId, Room, SimConfig, Speed};
use ds_sim::{ActionApplied, ActivityRevert, NoopObserver, Rejection, Sim, SimObserver, Snapshot};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::command::Envelope;
use crate::{Command, RuntimeError, RuntimeResult};

// ── SessionConfig ─────────────────────────────────────────────────────────────

/// Wall-clock timing for a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Real time between clock ticks.
    pub tick_interval: Duration,

    /// Real time after an action before the activity returns to idle.
    pub idle_revert: Duration,

    /// Capacity of the command queue.  Senders wait when it is full.
    pub command_buffer: usize,
}

impl SessionConfig {
    pub fn from_sim_config(config: &SimConfig) -> Self {
        Self {
            tick_interval:  config.tick_interval(),
            idle_revert:    config.idle_revert(),
            command_buffer: 64,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_sim_config(&SimConfig::default())
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

/// Entry point for running a [`Sim`] in real time.
pub struct Session;

impl Session {
    /// Move `sim` into a new task on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(sim: Sim, config: SessionConfig) -> SessionHandle {
        Self::spawn_with(sim, config, NoopObserver)
    }

    /// Like [`spawn`][Self::spawn], forwarding every tick, action, rollover
    /// and reset to `observer`.  Recover it with [`SessionHandle::finish`].
    pub fn spawn_with<O>(sim: Sim, config: SessionConfig, observer: O) -> SessionHandle<O>
    where
        O: SimObserver + Send + 'static,
    {
        let (commands, inbox) = mpsc::channel(config.command_buffer.max(1));
        let (snapshots, feed) = watch::channel(sim.snapshot());
        let task = tokio::spawn(run(sim, config, inbox, snapshots, observer));
        SessionHandle { commands, feed, task }
    }
}

// ── SessionHandle ─────────────────────────────────────────────────────────────

/// Control and read access to a running session.
pub struct SessionHandle<O = NoopObserver> {
    commands: mpsc::Sender<Envelope>,
    feed:     watch::Receiver<Snapshot>,
    task:     JoinHandle<(Snapshot, O)>,
}

impl<O> SessionHandle<O> {
    /// Queue `command` without waiting for it to be applied.
    pub async fn send(&self, command: Command) -> RuntimeResult<()> {
        self.commands
            .send(Envelope::from(command))
            .await
            .map_err(|_| RuntimeError::Closed)
    }

    pub async fn pause(&self) -> RuntimeResult<()> {
        self.send(Command::Pause).await
    }

    pub async fn resume(&self) -> RuntimeResult<()> {
        self.send(Command::Resume).await
    }

    pub async fn toggle_pause(&self) -> RuntimeResult<()> {
        self.send(Command::TogglePause).await
    }

    pub async fn cycle_speed(&self) -> RuntimeResult<()> {
        self.send(Command::CycleSpeed).await
    }

    /// Fails with [`RuntimeError::Core`] for anything other than 1, 2 or 4.
    pub async fn set_speed(&self, multiplier: u32) -> RuntimeResult<()> {
        let speed = Speed::try_from(multiplier)?;
        self.send(Command::SetSpeed(speed)).await
    }

    pub async fn change_room(&self, room: Room) -> RuntimeResult<()> {
        self.send(Command::ChangeRoom(room)).await
    }

    pub async fn reset(&self) -> RuntimeResult<()> {
        self.send(Command::Reset).await
    }

    /// Perform `action` and wait for the engine's verdict.
    pub async fn perform(&self, action: ActionId) -> RuntimeResult<Result<ActionApplied, Rejection>> {
        let (reply, verdict) = oneshot::channel();
        self.commands
            .send(Envelope { command: Command::Perform(action), reply: Some(reply) })
            .await
            .map_err(|_| RuntimeError::Closed)?;
        verdict.await.map_err(|_| RuntimeError::Closed)
    }

    /// The most recently published state.
    pub fn snapshot(&self) -> Snapshot {
        self.feed.borrow().clone()
    }

    /// A receiver that is notified on every published change.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.feed.clone()
    }

    /// Stop the session and return its final state.
    pub async fn shutdown(self) -> RuntimeResult<Snapshot> {
        self.finish().await.map(|(snapshot, _)| snapshot)
    }

    /// Stop the session and return its final state and the observer.
    pub async fn finish(self) -> RuntimeResult<(Snapshot, O)> {
        // A send failure means the task already exited; the join reports why.
        let _ = self.commands.send(Envelope::from(Command::Shutdown)).await;
        Ok(self.task.await?)
    }
}

// ── Task ──────────────────────────────────────────────────────────────────────

async fn run<O: SimObserver>(
    mut sim:      Sim,
    config:       SessionConfig,
    mut inbox:    mpsc::Receiver<Envelope>,
    snapshots:    watch::Sender<Snapshot>,
    mut observer: O,
) -> (Snapshot, O) {
    let mut ticker = time::interval_at(Instant::now() + config.tick_interval, config.tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let revert = time::sleep(config.idle_revert);
    tokio::pin!(revert);
    let mut armed: Option<ActivityRevert> = None;

    info!(
        tick_ms = config.tick_interval.as_millis() as u64,
        revert_ms = config.idle_revert.as_millis() as u64,
        "session started"
    );

    loop {
        tokio::select! {
            biased;

            envelope = inbox.recv() => {
                // Every handle dropped: nobody can observe or steer us.
                let Some(Envelope { command, reply }) = envelope else { break };

                let was_running = sim.is_running();
                match command {
                    Command::Pause => {
                        sim.pause();
                    }
                    Command::Resume => {
                        sim.resume();
                    }
                    Command::TogglePause => {
                        sim.toggle_pause();
                    }
                    Command::CycleSpeed => {
                        sim.cycle_speed();
                    }
                    Command::SetSpeed(speed) => {
                        if let Err(e) = sim.set_speed(u32::from(speed)) {
                            warn!(%e, "speed change refused");
                        }
                    }
                    Command::ChangeRoom(room) => {
                        sim.change_room(room);
                    }
                    Command::Perform(action) => {
                        let verdict = sim.perform_with(action, &mut observer);
                        if let Ok(applied) = &verdict {
                            armed = Some(applied.revert);
                            revert.as_mut().reset(Instant::now() + config.idle_revert);
                        }
                        if let Some(reply) = reply {
                            // The caller may have given up waiting.
                            let _ = reply.send(verdict);
                        }
                    }
                    Command::Reset => {
                        sim.reset_with(&mut observer);
                        armed = None;
                    }
                    Command::Shutdown => break,
                }
                if !was_running && sim.is_running() {
                    ticker.reset();
                }
                debug!(?command, status = ?sim.status(), "command applied");
                snapshots.send_replace(sim.snapshot());
            }

            _ = ticker.tick(), if sim.is_running() => {
                sim.tick_with(&mut observer);
                snapshots.send_replace(sim.snapshot());
            }

            _ = &mut revert, if armed.is_some() => {
                if let Some(handle) = armed.take() {
                    if sim.revert_activity(handle) {
                        snapshots.send_replace(sim.snapshot());
                    }
                }
            }
        }
    }

    let last = sim.snapshot();
    observer.on_sim_end(&last);
    snapshots.send_replace(last.clone());
    info!(ticks = last.ticks, "session stopped");
    (last, observer)
}
