use crate::error::Error;
use serde::Deserialize;

///
/// MapperConfig
///
/// Registry-wide settings, applied when descriptors are derived.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MapperConfig {
    /// Keyspace prefixed to table names whose schema does not name one.
    pub default_keyspace: Option<String>,

    /// Install the built-in converters (bytes/blob, enum/ordinal, null/zero).
    pub builtin_converters: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            default_keyspace: None,
            builtin_converters: true,
        }
    }
}

impl MapperConfig {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|err| Error::Config(err.to_string()))
    }

    #[must_use]
    pub fn with_default_keyspace(mut self, keyspace: impl Into<String>) -> Self {
        self.default_keyspace = Some(keyspace.into());
        self
    }
}
