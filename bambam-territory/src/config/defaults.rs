//! default study area: the Milan metro network, sampled over a box around the city.
use std::collections::BTreeMap;

pub const MIN_X: f64 = 9.047;
pub const MAX_X: f64 = 9.334;
pub const MIN_Y: f64 = 45.3803;
pub const MAX_Y: f64 = 45.5614;
/// 0.002 is about 220m, 0.0005 is about 55m
pub const STEP: f64 = 0.0005;

pub const CHUNK_SIZE: usize = 5000;
pub const DEPARTURE: &str = "2025-02-06T15:10:00";
/// 5 km/h
pub const WALKING_SPEED_METERS_PER_MINUTE: f64 = 5000.0 / 60.0;
pub const MAX_TRAVEL_TIME_MINUTES: f64 = 60.0;

pub const RASTER_WIDTH: u32 = 5000;
pub const MAX_SCALE_TIME_MINUTES: f64 = 40.0;
pub const UNREACHABLE_COLOR: [u8; 3] = [0, 0, 0];
pub const CAPPED_COLOR: [u8; 3] = [100, 100, 100];

/// fraction of the grid step under which two Voronoi vertices are treated as one
pub const VERTEX_MERGE_TOLERANCE: f64 = 1e-6;

/// hand-drawn outline of the Milan comune plus some margin. territories are clipped
/// to regions fully inside it, which keeps the output small and drops Voronoi
/// artifacts far from the served area.
pub const AREA_OF_INTEREST_WKT: &str = "POLYGON ((\
9.100515801921745 45.5455167557441, \
9.062207888287645 45.516984060447925, \
9.087815685590783 45.47560988804153, \
9.087812727224701 45.46081938203761, \
9.084282728146945 45.43639822910043, \
9.09621866507851 45.412940445063015, \
9.137006591661759 45.39614314339252, \
9.175691848973429 45.39811517264238, \
9.238646294931186 45.407744335864436, \
9.298791777942 45.42551720455029, \
9.288229251555435 45.43761547988808, \
9.306139048795416 45.47585321937714, \
9.299049031254754 45.51946151209026, \
9.279346516602999 45.53914891890602, \
9.227661809292755 45.55757180067263, \
9.100515801921745 45.5455167557441))";

/// interchange stations appear once per line in the schedule
pub fn aliases() -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            String::from("LORETO M1 (M1)"),
            String::from("LORETO M2 (M2)"),
        ),
        (
            String::from("CADORNA FN M1 (M1)"),
            String::from("CADORNA FN M2 (M2)"),
        ),
        (String::from("DUOMO M1 (M1)"), String::from("DUOMO M3 (M3)")),
    ])
}

pub fn line_colors() -> BTreeMap<String, String> {
    BTreeMap::from([
        (String::from("M1"), String::from("red")),
        (String::from("M2"), String::from("green")),
        (String::from("M3"), String::from("yellow")),
        (String::from("M4"), String::from("blue")),
        (String::from("M5"), String::from("lilac")),
    ])
}
