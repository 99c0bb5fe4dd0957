use std::fmt;

use ahash::{
    HashMap,
    HashMapExt,
};
use serde::{
    Deserialize,
    Serialize,
    de::Visitor,
};

/// Type effectiveness of one attacking type against one defending type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TypeEffectiveness {
    /// No effect.
    None,
    /// Not very effective.
    Weak,
    /// Normal effectiveness.
    #[default]
    Normal,
    /// Super effective.
    Strong,
}

impl TypeEffectiveness {
    /// The damage multiplier.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Weak => 0.5,
            Self::Normal => 1.0,
            Self::Strong => 2.0,
        }
    }
}

impl From<f64> for TypeEffectiveness {
    fn from(value: f64) -> Self {
        if value < 0.0 || value.abs() < f64::EPSILON {
            Self::None
        } else if value < 0.5 || (value - 0.5).abs() < f64::EPSILON {
            Self::Weak
        } else if value < 1.0 || (value - 1.0).abs() < f64::EPSILON {
            Self::Normal
        } else {
            Self::Strong
        }
    }
}

impl Serialize for TypeEffectiveness {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.multiplier())
    }
}

struct TypeEffectivenessVisitor;

impl<'de> Visitor<'de> for TypeEffectivenessVisitor {
    type Value = TypeEffectiveness;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("one of the following values: 0, 0.5, 1, 2")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f64))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f64))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v))
    }
}

impl<'de> Deserialize<'de> for TypeEffectiveness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_f64(TypeEffectivenessVisitor)
    }
}

/// A type table, keyed by attacking type name, then by defending type name.
pub type TypeTable = HashMap<String, HashMap<String, TypeEffectiveness>>;

/// Type effectiveness information for every known type against every other known type.
///
/// Missing entries are treated as [`TypeEffectiveness::Normal`].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeChart {
    pub types: TypeTable,
}

impl TypeChart {
    pub fn new() -> Self {
        Self {
            types: TypeTable::new(),
        }
    }

    pub fn from_filled(types: TypeTable) -> Self {
        Self { types }
    }

    /// Effectiveness of an attacking type against a single defending type.
    pub fn effectiveness(&self, attacking: &str, defending: &str) -> TypeEffectiveness {
        self.types
            .get(attacking)
            .and_then(|row| row.get(defending))
            .copied()
            .unwrap_or_default()
    }

    /// Combined damage multiplier of an attacking type against all of a defender's types.
    pub fn multiplier<S>(&self, attacking: &str, defending: &[S]) -> f64
    where
        S: AsRef<str>,
    {
        defending
            .iter()
            .map(|defending| self.effectiveness(attacking, defending.as_ref()).multiplier())
            .product()
    }

    /// Whether every attacking row covers every known type.
    pub fn is_complete(&self) -> bool {
        self.types.values().all(|row| {
            self.types
                .keys()
                .all(|defending| row.contains_key(defending))
        })
    }
}

#[cfg(test)]
mod type_effectiveness_test {
    use pretty_assertions::assert_eq;

    use crate::TypeEffectiveness;

    #[test]
    fn deserializes_from_number() {
        let parse = |s: &str| serde_json::from_str::<TypeEffectiveness>(s).unwrap();
        assert_eq!(parse("0"), TypeEffectiveness::None);
        assert_eq!(parse("0.5"), TypeEffectiveness::Weak);
        assert_eq!(parse("1"), TypeEffectiveness::Normal);
        assert_eq!(parse("2.0"), TypeEffectiveness::Strong);
    }

    #[test]
    fn serializes_to_multiplier() {
        assert_eq!(
            serde_json::to_string(&TypeEffectiveness::Weak).unwrap(),
            "0.5"
        );
        assert_eq!(
            serde_json::to_string(&TypeEffectiveness::Strong).unwrap(),
            "2.0"
        );
    }
}
