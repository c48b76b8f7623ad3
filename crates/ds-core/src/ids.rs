//! Closed identifier enums: rooms, activities, actions, and needs.
//!
//! Every identifier the simulation accepts is a variant of one of these
//! enums.  String ids (as used by a presentation layer) are converted with
//! `FromStr`, which rejects anything outside the fixed set, so invalid values
//! never reach the simulation state.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Generate a closed enum with a stable string id for every variant.
macro_rules! closed_enum {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vattr:meta])* $variant:ident => $id:literal ),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
        $vis enum $name {
            $( $(#[$vattr])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable string id.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $id ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $id => Ok($name::$variant), )+
                    other => Err(CoreError::Parse(format!(
                        concat!("unknown ", stringify!($name), " id `{}`"),
                        other
                    ))),
                }
            }
        }
    };
}

closed_enum! {
    /// A room of the house.  The character is always in exactly one.
    pub enum Room {
        Bedroom  => "bedroom",
        Living   => "living",
        Kitchen  => "kitchen",
        Gym      => "gym",
        Bathroom => "bathroom",
    }
}

impl Room {
    /// Human-readable room name.
    pub fn display_name(self) -> &'static str {
        match self {
            Room::Bedroom  => "Bedroom",
            Room::Living   => "Living Room",
            Room::Kitchen  => "Kitchen",
            Room::Gym      => "Gym",
            Room::Bathroom => "Bathroom",
        }
    }
}

closed_enum! {
    /// What the character is currently doing.
    pub enum Activity {
        Idle          => "idle",
        Sleeping      => "sleeping",
        Eating        => "eating",
        Exercising    => "exercising",
        Relaxing      => "relaxing",
        DrinkingWater => "drinking-water",
        Showering     => "showering",
    }
}

impl Default for Activity {
    fn default() -> Self {
        Activity::Idle
    }
}

closed_enum! {
    /// One interactable object.  Each object offers exactly one action.
    pub enum ActionId {
        Bed       => "bed",
        Sofa      => "sofa",
        Table     => "table",
        Water     => "water",
        Exercise  => "exercise",
        Shower    => "shower",
        Computer  => "computer",
        Tv        => "tv",
        Videogame => "videogame",
        Treadmill => "treadmill",
        Dumbbells => "dumbbells",
        YogaMat   => "yoga-mat",
        Skincare  => "skincare",
        Fridge    => "fridge",
        Stove     => "stove",
        Microwave => "microwave",
    }
}

closed_enum! {
    /// One of the four bounded character needs.
    pub enum Need {
        Energy    => "energy",
        Sleep     => "sleep",
        Health    => "health",
        Happiness => "happiness",
    }
}
