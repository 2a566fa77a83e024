use serde::{Deserialize, Serialize};

/// Hardware characteristics of a phone.
///
/// Sizes are coerced to `f64` from JSON numbers, numeric strings (`"4"`) and
/// booleans (`1.0` / `0.0`). Non-numeric or non-finite strings are rejected.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Characteristic {
    #[serde(deserialize_with = "number::deserialize")]
    pub ram_memory: f64,
    #[serde(deserialize_with = "number::deserialize")]
    pub rom_memory: f64,
}

/// A phone record, keyed by `identifier` in the store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Phone {
    pub identifier: String,
    pub brand: String,
    pub model: String,
    pub characteristics: Characteristic,
}

impl Phone {
    /// Returns a copy with `characteristics` swapped out; every other field is kept.
    pub fn with_characteristics(&self, characteristics: Characteristic) -> Self {
        Self { characteristics, ..self.clone() }
    }
}

mod number {
    use std::fmt;

    use serde::de::{self, Deserializer, Unexpected, Visitor};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(NumberVisitor)
    }

    struct NumberVisitor;

    impl<'de> Visitor<'de> for NumberVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number or a numeric string")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<f64, E> {
            Ok(if v { 1.0 } else { 0.0 })
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            match v.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(n),
                _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers_are_accepted_as_sizes() {
        let phone: Phone = serde_json::from_value(json!({
            "identifier": "p1",
            "brand": "Acme",
            "model": "X",
            "characteristics": {"ram_memory": 4, "rom_memory": 64.5}
        }))
        .unwrap();
        assert_eq!(phone.characteristics, Characteristic { ram_memory: 4.0, rom_memory: 64.5 });
    }

    #[test]
    fn numeric_strings_and_booleans_are_coerced() {
        let c: Characteristic = serde_json::from_value(json!({"ram_memory": " 4 ", "rom_memory": "64.5"})).unwrap();
        assert_eq!(c, Characteristic { ram_memory: 4.0, rom_memory: 64.5 });

        let c: Characteristic = serde_json::from_value(json!({"ram_memory": true, "rom_memory": false})).unwrap();
        assert_eq!(c, Characteristic { ram_memory: 1.0, rom_memory: 0.0 });
    }

    #[test]
    fn null_and_non_finite_sizes_are_rejected() {
        assert!(serde_json::from_value::<Characteristic>(json!({"ram_memory": null, "rom_memory": 1})).is_err());
        assert!(serde_json::from_value::<Characteristic>(json!({"ram_memory": "NaN", "rom_memory": 1})).is_err());
        assert!(serde_json::from_value::<Characteristic>(json!({"ram_memory": "inf", "rom_memory": 1})).is_err());
    }

    #[test]
    fn non_numeric_size_is_rejected() {
        let res = serde_json::from_value::<Characteristic>(json!({"ram_memory": "four", "rom_memory": 64}));
        assert!(res.is_err());
    }

    #[test]
    fn missing_characteristics_is_rejected() {
        let res = serde_json::from_value::<Phone>(json!({"identifier": "p1", "brand": "Acme", "model": "X"}));
        assert!(res.is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let phone: Phone = serde_json::from_value(json!({
            "identifier": "",
            "brand": "Acme",
            "model": "X",
            "color": "red",
            "characteristics": {"ram_memory": 1, "rom_memory": 2}
        }))
        .unwrap();
        assert_eq!(phone.identifier, "");
    }

    #[test]
    fn with_characteristics_keeps_identity_fields() {
        let phone = Phone {
            identifier: "p1".into(),
            brand: "Acme".into(),
            model: "X".into(),
            characteristics: Characteristic { ram_memory: 4.0, rom_memory: 64.0 },
        };
        let updated = phone.with_characteristics(Characteristic { ram_memory: 8.0, rom_memory: 128.0 });
        assert_eq!(updated.identifier, "p1");
        assert_eq!(updated.brand, "Acme");
        assert_eq!(updated.model, "X");
        assert_eq!(updated.characteristics.ram_memory, 8.0);
        assert_eq!(updated.characteristics.rom_memory, 128.0);
    }
}
