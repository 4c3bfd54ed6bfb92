//! Serde adapters that write big integers as lowercase hex strings.
//!
//! Use with `#[serde(with = "bigint_serde")]` for a single value and
//! `#[serde(with = "bigint_serde::seq")]` for a `Vec<BigUint>`.

use num_bigint::BigUint;
use serde::{de, Deserialize, Deserializer, Serializer};

pub fn serialize<S>(data: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&data.to_str_radix(16))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_hex(&s).map_err(de::Error::custom)
}

/// Parses a hex string, with or without a `0x` prefix.
pub fn parse_hex(s: &str) -> Result<BigUint, crate::ParamsError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| crate::ParamsError::MalformedInteger(s.to_string()))
}

pub mod seq {
    use super::parse_hex;
    use num_bigint::BigUint;
    use serde::{de, ser::SerializeSeq, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(data: &[BigUint], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(data.len()))?;
        for n in data {
            seq.serialize_element(&n.to_str_radix(16))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<BigUint>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items: Vec<String> = Vec::deserialize(deserializer)?;
        items
            .iter()
            .map(|s| parse_hex(s).map_err(de::Error::custom))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("ff").unwrap(), BigUint::from(255u32));
        assert_eq!(parse_hex("0xFF").unwrap(), BigUint::from(255u32));
        assert!(parse_hex("xyz").is_err());
        assert!(parse_hex("").is_err());
    }
}
