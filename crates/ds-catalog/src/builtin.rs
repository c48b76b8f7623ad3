//! The built-in object table: 16 objects across 5 rooms.
//!
//! Columns: id, name, Δenergy, Δsleep, Δhealth, Δhappiness, minutes, room,
//! activity.

use ds_core::{ActionId, Activity, NeedDelta, Room};

use crate::ActionDefinition;

const fn def(
    id:       ActionId,
    name:     &'static str,
    delta:    [f64; 4],
    minutes:  u32,
    room:     Room,
    activity: Activity,
) -> ActionDefinition {
    ActionDefinition {
        id,
        name,
        delta: NeedDelta::new(delta[0], delta[1], delta[2], delta[3]),
        duration_minutes: minutes,
        room,
        activity,
    }
}

use ActionId as A;
use Activity as Act;

pub static BUILTIN_ACTIONS: [ActionDefinition; 16] = [
    def(A::Bed,       "Sleep",        [ 40.0,  50.0,  10.0,  5.0], 480, Room::Bedroom,  Act::Sleeping),
    def(A::Sofa,      "Relax",        [  5.0,  -5.0,   0.0, 15.0],  60, Room::Living,   Act::Relaxing),
    def(A::Table,     "Eat",          [ 15.0,  -5.0,  20.0, 10.0],  30, Room::Kitchen,  Act::Eating),
    def(A::Water,     "Drink Water",  [  5.0,   0.0,  15.0,  5.0],   5, Room::Kitchen,  Act::DrinkingWater),
    def(A::Exercise,  "Exercise",     [-20.0,  10.0,  25.0, 20.0],  60, Room::Gym,      Act::Exercising),
    def(A::Shower,    "Shower",       [ 10.0,   5.0,  15.0, 15.0],  20, Room::Bathroom, Act::Showering),
    def(A::Computer,  "Use Computer", [-10.0, -15.0,  -5.0, 20.0], 120, Room::Bedroom,  Act::Relaxing),
    def(A::Tv,        "Watch TV",     [ -5.0, -10.0,  -2.0, 15.0],  90, Room::Living,   Act::Relaxing),
    def(A::Videogame, "Play Games",   [-15.0, -20.0,  -5.0, 25.0], 120, Room::Living,   Act::Relaxing),
    def(A::Treadmill, "Treadmill",    [-25.0,  15.0,  30.0, 15.0],  45, Room::Gym,      Act::Exercising),
    def(A::Dumbbells, "Weights",      [-30.0,  20.0,  35.0, 20.0],  60, Room::Gym,      Act::Exercising),
    def(A::YogaMat,   "Yoga",         [-10.0,  25.0,  20.0, 30.0],  45, Room::Gym,      Act::Exercising),
    def(A::Skincare,  "Skincare",     [  5.0,  10.0,  10.0, 20.0],  15, Room::Bathroom, Act::Relaxing),
    def(A::Fridge,    "Snack",        [ 10.0,  -2.0,   5.0,  8.0],  10, Room::Kitchen,  Act::Eating),
    def(A::Stove,     "Cook",         [ -5.0,   0.0,  25.0, 15.0],  45, Room::Kitchen,  Act::Eating),
    def(A::Microwave, "Reheat",       [  8.0,  -3.0,   8.0,  5.0],   5, Room::Kitchen,  Act::Eating),
];
