use crate::Alphabet;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

impl Serialize for Alphabet {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Alphabet {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AlphabetVisitor;

        impl de::Visitor<'_> for AlphabetVisitor {
            type Value = Alphabet;

            fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str("a non-empty alphabet string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Alphabet::try_new(v).map_err(de::Error::custom)
            }
        }

        d.deserialize_str(AlphabetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Alphabet, IdParams};

    #[test]
    fn alphabet_serializes_as_string() {
        let alphabet = Alphabet::new("abcd");
        assert_eq!(serde_json::to_string(&alphabet).unwrap(), "\"abcd\"");
    }

    #[test]
    fn alphabet_round_trips() {
        let alphabet = Alphabet::new("0123456789abcdef");
        let json = serde_json::to_string(&alphabet).unwrap();
        let back: Alphabet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, alphabet);
    }

    #[test]
    fn empty_alphabet_fails_to_deserialize() {
        assert!(serde_json::from_str::<Alphabet>("\"\"").is_err());
    }

    #[test]
    fn params_round_trip_with_partial_fields() {
        let params: IdParams = serde_json::from_str(r#"{"size": 8}"#).unwrap();
        assert_eq!(params, IdParams::new().size(8));

        let full = IdParams::new().alphabet(Alphabet::new("ab")).multiplier(4);
        let json = serde_json::to_string(&full).unwrap();
        let back: IdParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, full);
    }
}
