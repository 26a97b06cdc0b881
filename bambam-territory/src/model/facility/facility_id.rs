use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// identity of a stop served by one line, rendered as `"<stop_id> (<line_id>)"`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct FacilityId(pub String);

impl FacilityId {
    pub fn new(stop_id: &str, line_id: &str) -> FacilityId {
        FacilityId(format!("{stop_id} ({line_id})"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// the trailing parenthesized token, for example `M2` in `"LORETO M2 (M2)"`.
    pub fn line_code(&self) -> Option<&str> {
        let trimmed = self.0.trim_end();
        let without_close = trimmed.strip_suffix(')')?;
        let open = without_close.rfind('(')?;
        let code = without_close[open + 1..].trim();
        if code.is_empty() {
            None
        } else {
            Some(code)
        }
    }
}

impl Display for FacilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FacilityId {
    fn from(value: &str) -> Self {
        FacilityId(value.to_string())
    }
}

impl From<String> for FacilityId {
    fn from(value: String) -> Self {
        FacilityId(value)
    }
}

#[cfg(test)]
mod tests {
    use super::FacilityId;

    #[test]
    fn test_line_code() {
        assert_eq!(FacilityId::from("LORETO M2 (M2)").line_code(), Some("M2"));
        assert_eq!(FacilityId::new("DUOMO M3", "M3").line_code(), Some("M3"));
        assert_eq!(FacilityId::from("LORETO").line_code(), None);
        assert_eq!(FacilityId::from("LORETO ()").line_code(), None);
    }
}
