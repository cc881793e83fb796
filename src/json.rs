//! JSON encoding helpers

use crate::Optional;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Encode an option as JSON: `null` when absent, the value's encoding when present
pub fn to_json<T: Serialize>(opt: &Optional<T>) -> Result<String, serde_json::Error> {
    serde_json::to_string(opt)
}

/// Decode an option from JSON. `null` yields an absent value.
pub fn from_json<T: DeserializeOwned>(input: &str) -> Result<Optional<T>, serde_json::Error> {
    serde_json::from_str(input)
}

impl<T: DeserializeOwned> Optional<T> {
    /// Replace this option with the value decoded from `input`.
    ///
    /// The option is reset to absent before decoding, so a failed decode
    /// leaves it absent. The decoder's error is returned as is.
    ///
    /// ```
    /// use optional::Optional;
    ///
    /// let mut n = Optional::some(1_i64);
    /// assert!(n.unmarshal_json("\"abc\"").is_err());
    /// assert!(n.is_none());
    ///
    /// n.unmarshal_json("123").unwrap();
    /// assert_eq!(n, Optional::some(123));
    /// ```
    pub fn unmarshal_json(&mut self, input: &str) -> Result<(), serde_json::Error> {
        *self = Self::none();
        match from_json(input) {
            Ok(decoded) => {
                *self = decoded;
                log::trace!("Decoded optional from JSON: present={}", self.is_some());
                Ok(())
            }
            Err(e) => {
                log::debug!("Failed to decode optional from JSON: {}", e);
                Err(e)
            }
        }
    }
}
