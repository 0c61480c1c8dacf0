mod key;
pub(crate) mod span_wrappers;

pub(crate) use key::{Key, KeyPrefix, PrefixKind};
