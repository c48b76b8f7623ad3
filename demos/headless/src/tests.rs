//! Tests for the headless front end.

#[cfg(test)]
mod parse_tests {
    use ds_core::{ActionId, Room};

    use crate::live::{LiveCommand, parse};

    #[test]
    fn commands() {
        assert_eq!(parse("pause"), Ok(LiveCommand::Pause));
        assert_eq!(parse("  resume "), Ok(LiveCommand::Resume));
        assert_eq!(parse("speed"), Ok(LiveCommand::Speed(None)));
        assert_eq!(parse("speed 4"), Ok(LiveCommand::Speed(Some(4))));
        assert_eq!(parse("room kitchen"), Ok(LiveCommand::Room(Room::Kitchen)));
        assert_eq!(parse("do yoga-mat"), Ok(LiveCommand::Do(ActionId::YogaMat)));
        assert_eq!(parse("q"), Ok(LiveCommand::Quit));
    }

    #[test]
    fn bad_input() {
        assert_eq!(parse("   "), Err(String::new()));
        assert!(parse("room garage").is_err());
        assert!(parse("do").is_err());
        assert!(parse("speed fast").is_err());
        assert!(parse("dance").is_err());
    }
}

#[cfg(test)]
mod config_tests {
    use crate::config::parse;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = parse(
            "tick_interval_ms = 50\n\
             [decay]\n\
             health = 0.1\n",
        )
        .unwrap();
        assert_eq!(config.tick_interval_ms, 50);
        assert_eq!(config.idle_revert_ms, 2_000);
        assert_eq!(config.decay.health, 0.1);
        assert_eq!(config.decay.energy_night, 0.3);
        assert!(config.clear_usage_on_action_rollover);
    }

    #[test]
    fn invalid_values_rejected() {
        assert!(parse("tick_interval_ms = 0").is_err());
        assert!(parse("[decay]\nnight_from_hour = 24").is_err());
        assert!(parse("tick_interval_ms = \"fast\"").is_err());
    }
}

#[cfg(test)]
mod batch_tests {
    use ds_core::SimConfig;
    use ds_sim::TerminalReason;

    use crate::args::{BatchArgs, PlayerKind};
    use crate::batch::run;

    fn args(player: PlayerKind) -> BatchArgs {
        BatchArgs {
            ticks: 5_000,
            player,
            seed: 1,
            act_probability: 0.05,
            threshold: 60.0,
            speed: 1,
            output: None,
            snapshot_every: 60,
        }
    }

    #[test]
    fn idle_story_ends() {
        let (sim, stats) = run(SimConfig::default(), &args(PlayerKind::Idle)).unwrap();
        assert_eq!(sim.terminal(), Some(TerminalReason::SleepDepleted));
        assert_eq!(stats.actions, 0);
    }

    #[test]
    fn writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = args(PlayerKind::Greedy);
        a.ticks = 600;
        a.output = Some(dir.path().to_path_buf());
        let (_, stats) = run(SimConfig::default(), &a).unwrap();
        assert!(stats.actions > 0);
        assert!(dir.path().join("snapshots.csv").exists());
        assert!(dir.path().join("actions.csv").exists());
    }

    #[test]
    fn bad_speed_is_an_error() {
        let mut a = args(PlayerKind::Idle);
        a.speed = 3;
        assert!(run(SimConfig::default(), &a).is_err());
    }
}
