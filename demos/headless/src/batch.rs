//! Batch mode: an automated player against the bare engine, no wall clock.

use std::time::Instant;

use anyhow::Result;
use ds_core::SimConfig;
use ds_output::{CsvWriter, RecordingObserver};
use ds_player::{GreedyPlayer, IdlePlayer, PlayStats, Player, PlayerRng, RandomPlayer, play};
use ds_sim::{NoopObserver, Sim, SimBuilder};
use tracing::info;

use crate::args::{BatchArgs, PlayerKind};

pub fn make_player(args: &BatchArgs) -> Result<Box<dyn Player>> {
    Ok(match args.player {
        PlayerKind::Idle => Box::new(IdlePlayer),
        PlayerKind::Greedy => Box::new(GreedyPlayer::new(args.threshold)?),
        PlayerKind::Random => Box::new(RandomPlayer::new(args.act_probability)?),
    })
}

/// Run one story and return the engine in its final state.
pub fn run(config: SimConfig, args: &BatchArgs) -> Result<(Sim, PlayStats)> {
    let mut sim = SimBuilder::new(config).build()?;
    sim.set_speed(args.speed)?;

    let player = make_player(args)?;
    let mut rng = PlayerRng::new(args.seed);
    info!(player = player.name(), ticks = args.ticks, seed = args.seed, "batch run");

    let stats = match &args.output {
        Some(dir) => {
            let mut obs = RecordingObserver::new(CsvWriter::new(dir)?, args.snapshot_every);
            let stats = play(&mut sim, player.as_ref(), &mut rng, args.ticks, &mut obs);
            if let Some(e) = obs.take_error() {
                return Err(e.into());
            }
            stats
        }
        None => play(&mut sim, player.as_ref(), &mut rng, args.ticks, &mut NoopObserver),
    };
    Ok((sim, stats))
}

pub fn main(config: SimConfig, args: &BatchArgs) -> Result<()> {
    let t0 = Instant::now();
    let (sim, stats) = run(config, args)?;
    let elapsed = t0.elapsed();

    let last = sim.snapshot();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  ticks {}  |  decisions {}  |  actions {}  |  rejected {}  |  room changes {}",
        stats.ticks, stats.decisions, stats.actions, stats.rejections, stats.room_changes
    );
    println!("  {}  |  week {}", last, last.time.week_progress());
    if let Some(reason) = last.terminal() {
        println!("  {}", reason.message());
    }
    if let Some(dir) = &args.output {
        println!("  output written to {}", dir.display());
    }
    Ok(())
}
