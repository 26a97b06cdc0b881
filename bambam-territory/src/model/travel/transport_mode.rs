use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// travel modes a routing oracle may use between an origin and a facility.
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Walk,
    Bicycle,
    Bus,
    Tram,
    Subway,
    Rail,
    Ferry,
}

impl Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TransportMode::Walk => "walk",
            TransportMode::Bicycle => "bicycle",
            TransportMode::Bus => "bus",
            TransportMode::Tram => "tram",
            TransportMode::Subway => "subway",
            TransportMode::Rail => "rail",
            TransportMode::Ferry => "ferry",
        };
        write!(f, "{s}")
    }
}
