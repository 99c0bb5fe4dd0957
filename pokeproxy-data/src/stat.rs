use indexmap::IndexMap;
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A single base stat, named the way the reference data source names it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Stat {
    #[string = "hp"]
    HP,
    #[string = "attack"]
    Atk,
    #[string = "defense"]
    Def,
    #[string = "special-attack"]
    SpAtk,
    #[string = "special-defense"]
    SpDef,
    #[string = "speed"]
    Spe,
}

/// A map of values for each stat, in upstream order.
pub type StatMap<T> = IndexMap<Stat, T>;

#[cfg(test)]
mod stat_test {
    use core::str::FromStr;

    use pretty_assertions::assert_eq;

    use crate::{
        Stat,
        StatMap,
    };

    #[test]
    fn parses_upstream_names() {
        assert_eq!(Stat::from_str("hp"), Ok(Stat::HP));
        assert_eq!(Stat::from_str("special-attack"), Ok(Stat::SpAtk));
        assert_eq!(Stat::from_str("Speed"), Ok(Stat::Spe));
        assert!(Stat::from_str("accuracy").is_err());
        assert!(Stat::from_str("spa").is_err());
    }

    #[test]
    fn serializes_stat_map_with_upstream_names() {
        let stats = StatMap::from_iter([(Stat::HP, 45), (Stat::SpAtk, 65)]);
        assert_eq!(
            serde_json::to_string(&stats).unwrap(),
            r#"{"hp":45,"special-attack":65}"#
        );
    }

    #[test]
    fn deserializes_stat_map() {
        let stats: StatMap<u32> = serde_json::from_str(r#"{"attack":49,"speed":45}"#).unwrap();
        assert_eq!(stats.get(&Stat::Atk), Some(&49));
        assert_eq!(stats.get(&Stat::Spe), Some(&45));
    }
}
