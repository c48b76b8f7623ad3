//! Live mode: a real-time session steered by line commands on stdin.

use anyhow::Result;
use ds_catalog::ActionCatalog;
use ds_core::{ActionId, Room, SimConfig};
use ds_runtime::{Session, SessionConfig, SessionHandle};
use ds_sim::{SimBuilder, Snapshot};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// One parsed stdin line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LiveCommand {
    Pause,
    Resume,
    /// `speed` cycles, `speed N` sets.
    Speed(Option<u32>),
    Room(Room),
    Do(ActionId),
    Reset,
    Status,
    Look,
    Help,
    Quit,
}

pub fn parse(line: &str) -> Result<LiveCommand, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(String::new());
    };
    let arg = words.next();
    let cmd = match (head, arg) {
        ("pause" | "p", None) => LiveCommand::Pause,
        ("resume" | "r", None) => LiveCommand::Resume,
        ("speed", None) => LiveCommand::Speed(None),
        ("speed", Some(n)) => LiveCommand::Speed(Some(
            n.parse().map_err(|_| format!("not a number: {n}"))?,
        )),
        ("room", Some(id)) => LiveCommand::Room(id.parse().map_err(|e| format!("{e}"))?),
        ("do", Some(id)) => LiveCommand::Do(id.parse().map_err(|e| format!("{e}"))?),
        ("reset", None) => LiveCommand::Reset,
        ("status" | "s", None) => LiveCommand::Status,
        ("look" | "l", None) => LiveCommand::Look,
        ("help" | "h" | "?", None) => LiveCommand::Help,
        ("quit" | "q", None) => LiveCommand::Quit,
        _ => return Err(format!("unknown command `{}` (try `help`)", line.trim())),
    };
    Ok(cmd)
}

const HELP: &str = "\
Commands:
  pause / resume      - stop or restart the clock
  speed [1|2|4]       - cycle or set the speed
  room <id>           - bedroom, living, kitchen, gym, bathroom
  do <id>             - use an object (see `look`)
  look                - list objects in the current room
  status              - show the current state
  reset               - start a new story
  quit                - exit";

fn print_room(catalog: &ActionCatalog, snap: &Snapshot) {
    println!("{}:", snap.location.display_name());
    for action in catalog.by_room(snap.location) {
        let mark = if snap.is_used_today(action.id) { " (used today)" } else { "" };
        println!("  {:<10} {} [{} min]{mark}", action.id.as_str(), action.name, action.duration_minutes);
    }
}

async fn apply(handle: &SessionHandle, catalog: &ActionCatalog, cmd: LiveCommand) -> Result<()> {
    match cmd {
        LiveCommand::Pause => handle.pause().await?,
        LiveCommand::Resume => handle.resume().await?,
        LiveCommand::Speed(None) => handle.cycle_speed().await?,
        LiveCommand::Speed(Some(n)) => {
            if let Err(e) = handle.set_speed(n).await {
                println!("{e}");
            }
        }
        LiveCommand::Room(room) => handle.change_room(room).await?,
        LiveCommand::Do(id) => match handle.perform(id).await? {
            Ok(applied) => println!("{} → {}", applied.action, applied.finished_at),
            Err(rejection) => println!("{rejection}"),
        },
        LiveCommand::Reset => handle.reset().await?,
        LiveCommand::Status => println!("{}", handle.snapshot()),
        LiveCommand::Look => print_room(catalog, &handle.snapshot()),
        LiveCommand::Help => println!("{HELP}"),
        LiveCommand::Quit => {}
    }
    Ok(())
}

pub async fn main(config: SimConfig) -> Result<()> {
    let session = SessionConfig::from_sim_config(&config);
    let sim = SimBuilder::new(config).build()?;
    let catalog = sim.catalog().clone();
    let handle = Session::spawn(sim, session);

    println!("\n=== DREAM STORY ===");
    println!("{HELP}\n");
    println!("{}", handle.snapshot());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut feed = handle.subscribe();
    let mut last_day = handle.snapshot().time.day();
    let mut ended = false;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse(&line) {
                    Ok(LiveCommand::Quit) => break,
                    Ok(cmd) => apply(&handle, &catalog, cmd).await?,
                    Err(msg) if msg.is_empty() => {}
                    Err(msg) => println!("{msg}"),
                }
            }
            changed = feed.changed() => {
                if changed.is_err() {
                    break;
                }
                let snap = feed.borrow_and_update().clone();
                if snap.time.day() != last_day {
                    last_day = snap.time.day();
                    println!("-- Day {} (week {}) --", last_day, snap.time.week_progress());
                }
                match (snap.terminal(), ended) {
                    (Some(reason), false) => {
                        println!("{}\nType `reset` to start over or `quit` to exit.", reason.message());
                        ended = true;
                    }
                    (None, true) => ended = false,
                    _ => {}
                }
            }
        }
    }

    let last = handle.shutdown().await?;
    info!(ticks = last.ticks, "live session closed");
    println!("{last}");
    Ok(())
}
