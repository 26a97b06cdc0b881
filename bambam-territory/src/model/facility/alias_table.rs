use super::FacilityId;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// many-to-one mapping of raw facility identities onto the identity of the logical
/// station they belong to (a stop served by several lines appears once per line).
///
/// targets are never themselves aliased, so collapsing is idempotent.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct AliasTable(BTreeMap<FacilityId, FacilityId>);

impl AliasTable {
    pub fn new(aliases: BTreeMap<FacilityId, FacilityId>) -> Result<AliasTable, String> {
        let table = AliasTable(aliases);
        let chained = table.chains();
        if !chained.is_empty() {
            return Err(format!(
                "alias targets must not be aliased themselves, found chains: {}",
                chained.join(", ")
            ));
        }
        Ok(table)
    }

    /// builds the table without the chain check. the caller is expected to run
    /// `chains` (as configuration validation does) before collapsing.
    pub(crate) fn new_unchecked(aliases: BTreeMap<FacilityId, FacilityId>) -> AliasTable {
        AliasTable(aliases)
    }

    /// every `source -> target` pair whose target is itself aliased
    pub fn chains(&self) -> Vec<String> {
        self.0
            .iter()
            .filter(|(_, target)| self.0.contains_key(*target))
            .map(|(source, target)| format!("'{source}' -> '{target}'"))
            .collect_vec()
    }

    /// the territory key for a raw facility identity
    pub fn collapse<'a>(&'a self, id: &'a FacilityId) -> &'a FacilityId {
        self.0.get(id).unwrap_or(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<BTreeMap<String, String>> for AliasTable {
    type Error = String;

    fn try_from(value: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        let aliases = value
            .into_iter()
            .map(|(k, v)| (FacilityId(k), FacilityId(v)))
            .collect();
        AliasTable::new(aliases)
    }
}

impl From<AliasTable> for BTreeMap<String, String> {
    fn from(value: AliasTable) -> Self {
        value.0.into_iter().map(|(k, v)| (k.0, v.0)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::AliasTable;
    use crate::model::facility::FacilityId;
    use std::collections::BTreeMap;

    fn table() -> AliasTable {
        let raw = BTreeMap::from([
            (
                String::from("LORETO M1 (M1)"),
                String::from("LORETO M2 (M2)"),
            ),
            (String::from("DUOMO M1 (M1)"), String::from("DUOMO M3 (M3)")),
        ]);
        AliasTable::try_from(raw).unwrap()
    }

    #[test]
    fn test_collapse_aliased_and_plain() {
        let aliases = table();
        let aliased = FacilityId::from("LORETO M1 (M1)");
        let plain = FacilityId::from("PAGANO (M1)");
        assert_eq!(aliases.collapse(&aliased).as_str(), "LORETO M2 (M2)");
        assert_eq!(aliases.collapse(&plain).as_str(), "PAGANO (M1)");
    }

    #[test]
    fn test_collapse_is_idempotent() {
        let aliases = table();
        let ids = [
            "LORETO M1 (M1)",
            "LORETO M2 (M2)",
            "DUOMO M1 (M1)",
            "DUOMO M3 (M3)",
            "PAGANO (M1)",
        ];
        for raw in ids {
            let id = FacilityId::from(raw);
            let once = aliases.collapse(&id).clone();
            let twice = aliases.collapse(&once).clone();
            assert_eq!(once, twice, "collapse not idempotent for {raw}");
        }
    }

    #[test]
    fn test_rejects_chains() {
        let raw = BTreeMap::from([
            (String::from("A (M1)"), String::from("B (M2)")),
            (String::from("B (M2)"), String::from("C (M3)")),
        ]);
        assert!(AliasTable::try_from(raw).is_err());
    }

    #[test]
    fn test_unchecked_table_reports_chains() {
        let table = AliasTable::new_unchecked(BTreeMap::from([
            (FacilityId::from("A (M1)"), FacilityId::from("B (M2)")),
            (FacilityId::from("B (M2)"), FacilityId::from("C (M3)")),
        ]));
        assert_eq!(table.chains(), vec!["'A (M1)' -> 'B (M2)'"]);
        assert_eq!(table.len(), 2);
    }
}
