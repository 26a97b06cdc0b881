use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// lattice position of a grid cell. the string form `"ix,iy"` is the origin
/// identifier submitted to the routing oracle and written to the caches.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct CellId {
    pub ix: u32,
    pub iy: u32,
}

impl CellId {
    pub fn new(ix: u32, iy: u32) -> CellId {
        CellId { ix, iy }
    }

    /// the cell one step in negative x, if any
    pub fn left(&self) -> Option<CellId> {
        self.ix.checked_sub(1).map(|ix| CellId::new(ix, self.iy))
    }

    /// the cell one step in negative y, if any
    pub fn below(&self) -> Option<CellId> {
        self.iy.checked_sub(1).map(|iy| CellId::new(self.ix, iy))
    }
}

impl Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.ix, self.iy)
    }
}

impl FromStr for CellId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x_str, y_str) = s
            .split_once(',')
            .ok_or_else(|| format!("cell id '{s}' is not of the form 'ix,iy'"))?;
        let ix = x_str
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("cell id '{s}' has invalid x index: {e}"))?;
        let iy = y_str
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("cell id '{s}' has invalid y index: {e}"))?;
        Ok(CellId { ix, iy })
    }
}

impl TryFrom<String> for CellId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CellId::from_str(&value)
    }
}

impl From<CellId> for String {
    fn from(value: CellId) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::CellId;
    use std::str::FromStr;

    #[test]
    fn test_parse_display() {
        let id = CellId::from_str("12,7").unwrap();
        assert_eq!(id, CellId::new(12, 7));
        assert_eq!(id.to_string(), "12,7");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(CellId::from_str("12").is_err());
        assert!(CellId::from_str("a,7").is_err());
        assert!(CellId::from_str("-1,7").is_err());
    }

    #[test]
    fn test_neighbors_at_lattice_edge() {
        let origin = CellId::new(0, 0);
        assert_eq!(origin.left(), None);
        assert_eq!(origin.below(), None);
        assert_eq!(CellId::new(3, 2).left(), Some(CellId::new(2, 2)));
        assert_eq!(CellId::new(3, 2).below(), Some(CellId::new(3, 1)));
    }
}
