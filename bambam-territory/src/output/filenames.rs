pub const TIMES: &str = "times.csv";
pub const NEAREST: &str = "nearest.csv";
pub const BORDERS: &str = "areas_borders.json";
pub const ALL_COMBINED: &str = "all_combined.json";
pub const HEATMAP: &str = "heatmap.png";
pub const TERRITORY_DIRECTORY: &str = "territories";
