use std::fmt::Display;
use std::str::FromStr;

use tracing::{debug, instrument};

use crate::storage::sled::error::SledStorageError;
use strum::AsRefStr;
use strum_macros::{Display, EnumString};

#[derive(Debug, EnumString, AsRefStr, Display, PartialEq, Eq, Copy, Clone)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum PrefixKind {
    Todo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct KeyPrefix {
    prefix: String,
}

impl KeyPrefix {
    pub fn from_kind(kind: PrefixKind) -> Self {
        Self {
            prefix: format!("{}:", kind.as_ref()),
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        self.prefix.as_str()
    }
}

impl std::fmt::Display for KeyPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.prefix.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Key {
    prefix: KeyPrefix,
    full_key: String,
}

impl Key {
    pub fn new(prefix: KeyPrefix, value: impl Display) -> Self {
        Self {
            full_key: format!("{}{}", prefix.as_str(), value),
            prefix,
        }
    }

    #[instrument(name = "Key::from_bytes", skip_all, level = "debug")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SledStorageError> {
        let full_key = std::str::from_utf8(bytes)
            .map_err(SledStorageError::Conversion)?
            .to_string();

        let parts: Vec<&str> = full_key.split(':').collect();

        if parts.len() == 2 && !parts.iter().any(|v| v.is_empty()) {
            let kind =
                PrefixKind::from_str(parts[0]).map_err(|_| SledStorageError::InvalidKey(full_key.clone()))?;
            let prefix = KeyPrefix::from_kind(kind);

            debug!(key = %full_key, prefix = %prefix, "created key from bytes");

            Ok(Self { prefix, full_key })
        } else {
            Err(SledStorageError::InvalidKey(full_key))
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.full_key.as_bytes()
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.full_key.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key() {
        let key1 = Key::new(KeyPrefix::from_kind(PrefixKind::Todo), "xxx");
        assert_eq!(key1.full_key, "todo:xxx");

        let key2 = Key::from_bytes("todo:xxx".as_bytes()).unwrap();
        assert_eq!(key2.prefix.as_str(), "todo:");
        assert_eq!(key1, key2);

        let key3 = Key::from_bytes("todo".as_bytes());
        assert!(key3.is_err());

        let key4 = Key::from_bytes("ddd:fff".as_bytes());
        assert!(key4.is_err());

        let key5 = Key::from_bytes("todo:".as_bytes());
        assert!(key5.is_err());
    }
}
