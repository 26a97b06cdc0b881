use chrono::NaiveDateTime;
use std::fmt::Display;

/// non-fatal conditions reported alongside an oracle result
#[derive(Clone, Debug, PartialEq)]
pub enum OracleWarning {
    /// the departure time falls outside the service window the oracle believes is
    /// loaded. routing engines raise this even when the date is covered, so it is
    /// treated as noise.
    DepartureOutsideSchedule {
        departure: NaiveDateTime,
        detail: String,
    },
    Other(String),
}

impl OracleWarning {
    pub fn is_schedule_window_noise(&self) -> bool {
        matches!(self, OracleWarning::DepartureOutsideSchedule { .. })
    }
}

impl Display for OracleWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OracleWarning::DepartureOutsideSchedule { departure, detail } => write!(
                f,
                "departure time {departure} is outside of the loaded schedule: {detail}"
            ),
            OracleWarning::Other(msg) => write!(f, "{msg}"),
        }
    }
}
