use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single submitted raw value. Anything that is not a finite number is
/// kept as `Malformed` so one bad entry only affects its own slot.
#[derive(Debug, Clone, PartialEq)]
pub enum RawEntry {
    Value(f64),
    Malformed(String),
}

/// One player's slot in a game column. `None` means the player sat out.
pub type Slot = Option<RawEntry>;

impl RawEntry {
    pub fn value(&self) -> Option<f64> {
        match self {
            RawEntry::Value(value) => Some(*value),
            RawEntry::Malformed(_) => None,
        }
    }
}

impl From<f64> for RawEntry {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            RawEntry::Value(value)
        } else {
            RawEntry::Malformed(value.to_string())
        }
    }
}

impl From<serde_json::Value> for RawEntry {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(number) => match number.as_f64() {
                Some(value) => RawEntry::from(value),
                None => RawEntry::Malformed(number.to_string()),
            },
            serde_json::Value::String(text) => match text.trim().parse::<f64>() {
                Ok(value) => RawEntry::from(value),
                Err(_) => RawEntry::Malformed(text),
            },
            other => RawEntry::Malformed(other.to_string()),
        }
    }
}

impl Serialize for RawEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            RawEntry::Value(value) => serializer.serialize_f64(*value),
            RawEntry::Malformed(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for RawEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(RawEntry::from)
    }
}

impl fmt::Display for RawEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawEntry::Value(value) => write!(f, "{}", value),
            RawEntry::Malformed(text) => write!(f, "{:?}", text),
        }
    }
}

/// Result of a special (border-style) game as the player reports it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum SpecialOutcome {
    Solved { guesses: u32 },
    Failed { distance: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_strings_are_accepted() {
        let entry: RawEntry = serde_json::from_str(r#"" 12 ""#).unwrap();
        assert_eq!(entry, RawEntry::Value(12.0));
    }

    #[test]
    fn garbage_becomes_malformed() {
        let entry: RawEntry = serde_json::from_str(r#""twelve""#).unwrap();
        assert_eq!(entry, RawEntry::Malformed("twelve".to_string()));

        let entry: RawEntry = serde_json::from_str("true").unwrap();
        assert!(entry.value().is_none());
    }

    #[test]
    fn non_finite_values_are_malformed() {
        assert!(matches!(RawEntry::from(f64::NAN), RawEntry::Malformed(_)));
        assert!(matches!(RawEntry::from(f64::INFINITY), RawEntry::Malformed(_)));
    }

    #[test]
    fn missing_slots_deserialize_as_absent() {
        let column: Vec<Slot> = serde_json::from_str("[3, null, 5]").unwrap();
        assert_eq!(column, vec![Some(RawEntry::Value(3.0)), None, Some(RawEntry::Value(5.0))]);
    }

    #[test]
    fn special_outcome_is_tagged_by_result() {
        let outcome: SpecialOutcome =
            serde_json::from_str(r#"{"result":"failed","distance":420.5}"#).unwrap();
        assert_eq!(outcome, SpecialOutcome::Failed { distance: 420.5 });
    }
}
