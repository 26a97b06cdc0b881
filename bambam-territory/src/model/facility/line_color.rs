use super::FacilityId;
use crate::model::TerritoryError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// fixed lookup from line code (the trailing parenthesized token of a facility
/// identity) to the display color of its territory.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct LineColorTable(BTreeMap<String, String>);

impl LineColorTable {
    pub fn new(colors: BTreeMap<String, String>) -> LineColorTable {
        LineColorTable(colors)
    }

    /// resolves the color for a facility. there is no fallback color: a facility whose
    /// line code is missing from the table fails the run.
    pub fn color_for(&self, id: &FacilityId) -> Result<&str, TerritoryError> {
        let code = id.line_code();
        code.and_then(|c| self.0.get(c))
            .map(String::as_str)
            .ok_or_else(|| TerritoryError::UnknownLineColor {
                facility: id.to_string(),
                code: code.map(String::from),
            })
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::LineColorTable;
    use crate::model::{facility::FacilityId, TerritoryError};
    use std::collections::BTreeMap;

    fn table() -> LineColorTable {
        LineColorTable::new(BTreeMap::from([
            (String::from("M1"), String::from("red")),
            (String::from("M2"), String::from("green")),
        ]))
    }

    #[test]
    fn test_known_code() {
        let colors = table();
        let color = colors.color_for(&FacilityId::from("LORETO M2 (M2)")).unwrap();
        assert_eq!(color, "green");
    }

    #[test]
    fn test_unknown_code_is_error() {
        let colors = table();
        let result = colors.color_for(&FacilityId::from("SAN SIRO (M5)"));
        match result {
            Err(TerritoryError::UnknownLineColor { facility, code }) => {
                assert_eq!(facility, "SAN SIRO (M5)");
                assert_eq!(code.as_deref(), Some("M5"));
            }
            other => panic!("expected UnknownLineColor, found {other:?}"),
        }
    }

    #[test]
    fn test_missing_code_is_error() {
        let colors = table();
        assert!(colors.color_for(&FacilityId::from("LORETO")).is_err());
    }
}
