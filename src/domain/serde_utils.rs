//! Serde utilities for message ingestion.

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

/// Module to handle inline binary payloads that travel as base64 strings.
///
/// Accepts plain base64, `base64://` prefixed payloads and `data:` URLs,
/// or a raw byte array when the host hands over structured bytes.
pub mod base64_bytes {
    use super::{de, fmt, Deserializer, Serializer, Visitor};
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    use bytes::Bytes;

    /// Strips known transport prefixes from a base64 payload.
    #[must_use]
    pub fn strip_prefix(value: &str) -> &str {
        if let Some(rest) = value.strip_prefix("base64://") {
            return rest;
        }
        if value.starts_with("data:")
            && let Some((_, payload)) = value.split_once(";base64,")
        {
            return payload;
        }
        value
    }

    /// Decodes a base64 payload, tolerating surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not valid base64.
    pub fn decode(value: &str) -> Result<Bytes, base64::DecodeError> {
        STANDARD
            .decode(strip_prefix(value.trim()))
            .map(Bytes::from)
    }

    /// Module for `Option<Bytes>` fields.
    pub mod option {
        use super::{de, fmt, Deserializer, Serializer, Visitor};
        use super::{STANDARD, decode};
        use base64::Engine as _;
        use bytes::Bytes;

        /// Serializes optional bytes as a base64 string.
        ///
        /// # Errors
        ///
        /// Returns an error if the serializer fails.
        pub fn serialize<S>(value: &Option<Bytes>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
                None => serializer.serialize_none(),
            }
        }

        /// Deserializes optional bytes from a base64 string or a byte sequence.
        ///
        /// # Errors
        ///
        /// Returns an error if the value is neither a string nor a byte sequence,
        /// or if the base64 payload is malformed.
        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Bytes>, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct OptionVisitor;

            impl<'de> Visitor<'de> for OptionVisitor {
                type Value = Option<Bytes>;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("optional base64 string or byte array")
                }

                fn visit_none<E>(self) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    Ok(None)
                }

                fn visit_unit<E>(self) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    Ok(None)
                }

                fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    deserializer.deserialize_any(PayloadVisitor).map(Some)
                }
            }

            struct PayloadVisitor;

            impl<'de> Visitor<'de> for PayloadVisitor {
                type Value = Bytes;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("a base64 string or byte array")
                }

                fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    decode(value).map_err(de::Error::custom)
                }

                fn visit_bytes<E>(self, value: &[u8]) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    Ok(Bytes::copy_from_slice(value))
                }

                fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
                where
                    A: de::SeqAccess<'de>,
                {
                    let mut buf = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                    while let Some(byte) = seq.next_element::<u8>()? {
                        buf.push(byte);
                    }
                    Ok(Bytes::from(buf))
                }
            }

            deserializer.deserialize_option(OptionVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::base64_bytes;
    use bytes::Bytes;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Payload {
        #[serde(default, with = "base64_bytes::option")]
        data: Option<Bytes>,
    }

    #[test]
    fn test_decode_strips_prefixes() {
        assert_eq!(base64_bytes::decode("aGk=").unwrap(), Bytes::from_static(b"hi"));
        assert_eq!(
            base64_bytes::decode("base64://aGk=").unwrap(),
            Bytes::from_static(b"hi")
        );
        assert_eq!(
            base64_bytes::decode("data:image/png;base64,aGk=").unwrap(),
            Bytes::from_static(b"hi")
        );
    }

    #[test]
    fn test_option_accepts_string_and_array() {
        let from_str: Payload = serde_json::from_str(r#"{"data":"aGk="}"#).unwrap();
        let from_seq: Payload = serde_json::from_str(r#"{"data":[104,105]}"#).unwrap();
        let missing: Payload = serde_json::from_str("{}").unwrap();
        let null: Payload = serde_json::from_str(r#"{"data":null}"#).unwrap();

        assert_eq!(from_str.data, Some(Bytes::from_static(b"hi")));
        assert_eq!(from_seq.data, Some(Bytes::from_static(b"hi")));
        assert_eq!(missing.data, None);
        assert_eq!(null.data, None);
    }

    #[test]
    fn test_option_serializes_as_base64() {
        let payload = Payload {
            data: Some(Bytes::from_static(b"hi")),
        };
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"data":"aGk="}"#);
    }

    #[test]
    fn test_invalid_base64_is_rejected() {
        let result: Result<Payload, _> = serde_json::from_str(r#"{"data":"!!!"}"#);
        assert!(result.is_err());
    }
}
