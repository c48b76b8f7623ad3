//! Unit tests for ds-core primitives.

#[cfg(test)]
mod ids {
    use std::str::FromStr;

    use crate::{ActionId, Activity, CoreError, Room};

    #[test]
    fn parse_known_ids() {
        assert_eq!(Room::from_str("kitchen").unwrap(), Room::Kitchen);
        assert_eq!(ActionId::from_str("yoga-mat").unwrap(), ActionId::YogaMat);
        assert_eq!("drinking-water".parse::<Activity>().unwrap(), Activity::DrinkingWater);
    }

    #[test]
    fn unknown_id_is_rejected() {
        let err = Room::from_str("garage").unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
        assert!(err.to_string().contains("garage"));
        assert!("Bed".parse::<ActionId>().is_err(), "ids are case-sensitive");
    }

    #[test]
    fn as_str_round_trips_for_every_variant() {
        for &room in Room::ALL {
            assert_eq!(room.as_str().parse::<Room>().unwrap(), room);
        }
        for &id in ActionId::ALL {
            assert_eq!(id.to_string().parse::<ActionId>().unwrap(), id);
        }
    }

    #[test]
    fn fixed_set_sizes() {
        assert_eq!(Room::ALL.len(), 5);
        assert_eq!(ActionId::ALL.len(), 16);
        assert_eq!(Activity::ALL.len(), 7);
        assert_eq!(Activity::default(), Activity::Idle);
    }

    #[test]
    fn room_display_names() {
        assert_eq!(Room::Living.display_name(), "Living Room");
        assert_eq!(Room::Bedroom.to_string(), "bedroom");
    }
}

#[cfg(test)]
mod needs {
    use crate::{Need, NeedDelta, NeedLevel, Needs};

    #[test]
    fn default_is_story_start() {
        let n = Needs::default();
        assert_eq!(n.energy(), 80.0);
        assert_eq!(n.sleep(), 70.0);
        assert_eq!(n.health(), 85.0);
        assert_eq!(n.happiness(), 75.0);
    }

    #[test]
    fn apply_clamps_high_and_low() {
        let mut n = Needs::new(95.0, 5.0, 50.0, 50.0);
        n.apply(&NeedDelta::new(20.0, -20.0, 0.0, 0.0));
        assert_eq!(n.energy(), 100.0);
        assert_eq!(n.sleep(), 0.0);
        assert!(n.is_depleted(Need::Sleep));
    }

    #[test]
    fn constructor_clamps() {
        let n = Needs::new(-3.0, 140.0, 50.0, 50.0);
        assert_eq!(n.energy(), 0.0);
        assert_eq!(n.sleep(), 100.0);
    }

    #[test]
    fn levels() {
        assert_eq!(NeedLevel::of(70.0), NeedLevel::Good);
        assert_eq!(NeedLevel::of(69.9), NeedLevel::Fair);
        assert_eq!(NeedLevel::of(40.0), NeedLevel::Fair);
        assert_eq!(NeedLevel::of(39.99), NeedLevel::Critical);
        assert_eq!(Needs::default().level(Need::Sleep), NeedLevel::Good);
    }

    #[test]
    fn lowest_prefers_first_on_tie() {
        assert_eq!(Needs::new(50.0, 20.0, 20.0, 90.0).lowest(), Need::Sleep);
        assert_eq!(Needs::new(10.0, 10.0, 10.0, 10.0).lowest(), Need::Energy);
    }
}

#[cfg(test)]
mod time {
    use crate::{GameTime, Speed, CoreError};

    fn t(day: u32, hour: u32, minute: u32) -> GameTime {
        GameTime::new(day, hour, minute).unwrap()
    }

    #[test]
    fn default_is_day_one_seven_am() {
        assert_eq!(GameTime::default(), t(1, 7, 0));
        assert_eq!(GameTime::default().to_string(), "Day 1 07:00");
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(
            GameTime::new(0, 0, 0),
            Err(CoreError::InvalidTime { day: 0, hour: 0, minute: 0 })
        );
        assert!(GameTime::new(1, 24, 0).is_err());
        assert!(GameTime::new(1, 0, 60).is_err());
    }

    #[test]
    fn minute_carry_without_day_change() {
        let mut time = t(1, 10, 58);
        let days = time.advance(5);
        assert_eq!(days, 0);
        assert_eq!(time, t(1, 11, 3));
    }

    #[test]
    fn hour_carry_rolls_day() {
        let (time, days) = t(1, 23, 58).after(4);
        assert_eq!(days, 1);
        assert_eq!(time, t(2, 0, 2));
    }

    #[test]
    fn eight_hours_from_seven() {
        let (time, days) = t(1, 7, 0).after(480);
        assert_eq!(days, 0);
        assert_eq!(time, t(1, 15, 0));
    }

    #[test]
    fn multi_day_advance_counts_every_boundary() {
        let (time, days) = t(3, 12, 0).after(2 * 24 * 60 + 30);
        assert_eq!(days, 2);
        assert_eq!(time, t(5, 12, 30));
    }

    #[test]
    fn night_window_wraps() {
        assert!(t(1, 22, 0).hour_in_night_window(22, 6));
        assert!(t(1, 0, 0).hour_in_night_window(22, 6));
        assert!(t(1, 6, 59).hour_in_night_window(22, 6));
        assert!(!t(1, 7, 0).hour_in_night_window(22, 6));
        assert!(!t(1, 21, 59).hour_in_night_window(22, 6));
    }

    #[test]
    fn weeks() {
        assert_eq!(t(1, 0, 0).week(), 1);
        assert_eq!(t(7, 0, 0).week(), 1);
        assert_eq!(t(8, 0, 0).week(), 2);
        assert_eq!(t(8, 0, 0).week_progress(), "2/2");
    }

    #[test]
    fn speed_cycle() {
        assert_eq!(Speed::X1.next(), Speed::X2);
        assert_eq!(Speed::X2.next(), Speed::X4);
        assert_eq!(Speed::X4.next(), Speed::X1);
        assert_eq!(Speed::X4.to_string(), "4x");
    }

    #[test]
    fn speed_try_from_accepts_only_supported() {
        assert_eq!(Speed::try_from(2).unwrap(), Speed::X2);
        assert_eq!(Speed::try_from(3), Err(CoreError::InvalidSpeed(3)));
        assert_eq!(Speed::try_from(0), Err(CoreError::InvalidSpeed(0)));
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, SimConfig};

    #[test]
    fn default_validates() {
        let cfg = SimConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.tick_interval_ms, 100);
        assert_eq!(cfg.idle_revert_ms, 2_000);
        assert!(cfg.clear_usage_on_action_rollover);
    }

    #[test]
    fn zero_interval_rejected() {
        let cfg = SimConfig { tick_interval_ms: 0, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn negative_rate_rejected() {
        let mut cfg = SimConfig::default();
        cfg.decay.health = -0.5;
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
        cfg.decay.health = f64::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn window_hour_out_of_range_rejected() {
        let mut cfg = SimConfig::default();
        cfg.decay.night_from_hour = 24;
        assert!(cfg.validate().is_err());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_boundary {
    use crate::{CoreError, GameTime, Needs};

    #[test]
    fn needs_are_clamped_on_load() {
        let n: Needs = toml::from_str("energy = 140.0\nsleep = -5.0\nhealth = 50.0\nhappiness = 100.0").unwrap();
        assert_eq!(n, Needs::new(100.0, 0.0, 50.0, 100.0));
    }

    #[test]
    fn non_finite_needs_are_refused() {
        let err = toml::from_str::<Needs>("energy = nan\nsleep = 1.0\nhealth = 1.0\nhappiness = 1.0");
        assert!(err.is_err());
    }

    #[test]
    fn out_of_range_time_is_refused() {
        assert!(toml::from_str::<GameTime>("day = 1\nhour = 25\nminute = 0").is_err());
        let ok: GameTime = toml::from_str("day = 2\nhour = 6\nminute = 30").unwrap();
        assert_eq!(ok, GameTime::new(2, 6, 30).unwrap());
        assert_eq!(
            GameTime::new(1, 0, 60).unwrap_err(),
            CoreError::InvalidTime { day: 1, hour: 0, minute: 60 }
        );
    }
}

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use crate::{GameTime, NeedDelta, Needs};

    proptest! {
        #[test]
        fn needs_stay_in_range(
            start in prop::array::uniform4(0.0f64..=100.0),
            deltas in prop::collection::vec(prop::array::uniform4(-150.0f64..150.0), 0..40),
        ) {
            let mut n = Needs::new(start[0], start[1], start[2], start[3]);
            for d in deltas {
                n.apply(&NeedDelta::new(d[0], d[1], d[2], d[3]));
                for v in [n.energy(), n.sleep(), n.health(), n.happiness()] {
                    prop_assert!((0.0..=100.0).contains(&v));
                }
            }
        }

        #[test]
        fn advance_preserves_total_minutes(
            day in 1u32..100, hour in 0u32..24, minute in 0u32..60, step in 0u32..5_000,
        ) {
            let start = GameTime::new(day, hour, minute).unwrap();
            let (end, days) = start.after(step);
            prop_assert!(end.hour() < 24 && end.minute() < 60);
            prop_assert_eq!(end.day(), day + days);
            let abs = |t: GameTime| (t.day() as u64) * 1440 + t.minute_of_day() as u64;
            prop_assert_eq!(abs(end), abs(start) + step as u64);
        }
    }
}
