use tracing::{info, instrument, warn};

use crate::storage::sled::{
    error::SledStorageError, internal::Key, BincodeConfig, FromBytesWithConfig, ToBytesWithConfig,
};

#[instrument(name = "sled::insert_value_with_key", skip_all)]
pub(crate) fn insert_value_with_span(
    key: &Key,
    value: &[u8],
    tree: &sled::Tree,
) -> Result<(), SledStorageError> {
    info!(key = ?key, "insert value with key");
    let old_value = tree.insert(key.as_bytes(), value)?;
    if old_value.is_some() {
        warn!(key = %key, "insert replaced old value");
    }

    Ok(())
}

#[instrument(name = "sled::remove_value_with_key", skip_all)]
pub(crate) fn remove_value_with_span(key: &Key, tree: &sled::Tree) -> Result<(), SledStorageError> {
    info!(key = ?key, "remove value with key");
    if tree.remove(key.as_bytes())?.is_none() {
        // no-match removes are fine, the caller treats them as success
        info!(key = ?key, "removed nothing, key was absent");
    }
    Ok(())
}

#[instrument(name = "sled::get_value_by_key", skip_all)]
pub(crate) fn get_value_in_transaction_with_span(
    key: &Key,
    tree: &sled::transaction::TransactionalTree,
) -> Result<Option<sled::IVec>, SledStorageError> {
    info!(key = ?key, "get value with key");
    Ok(tree.get(key.as_bytes())?)
}

#[instrument(name = "sled::insert_value_with_key", skip_all)]
pub(crate) fn insert_value_in_transaction_with_span(
    key: &Key,
    value: &[u8],
    tree: &sled::transaction::TransactionalTree,
) -> Result<(), SledStorageError> {
    info!(key = ?key, "insert value with key");

    let old_value = tree.insert(key.as_bytes(), value)?;

    if old_value.is_some() {
        warn!(key = %key, "insert replaced old value");
    }
    Ok(())
}

#[instrument(name = "convert_value_to_bytes", skip_all)]
pub(crate) fn serialize_in_transaction_with_span(
    config: &BincodeConfig,
    value: &impl ToBytesWithConfig<Error = SledStorageError>,
) -> Result<Vec<u8>, SledStorageError> {
    value.to_bytes(config)
}

#[instrument(name = "convert_bytes_to_value", skip_all)]
pub(crate) fn deserialize_in_transaction_with_span<
    T: FromBytesWithConfig<Error = SledStorageError>,
>(
    config: &BincodeConfig,
    bytes: &[u8],
) -> Result<T, SledStorageError> {
    T::from_bytes(bytes, config)
}

#[instrument(name = "convert_bytes_to_value", skip_all)]
pub(crate) fn deserialize_in_span<T: FromBytesWithConfig<Error = SledStorageError>>(
    config: &BincodeConfig,
    bytes: &[u8],
) -> Result<T, SledStorageError> {
    T::from_bytes(bytes, config)
}

#[instrument(name = "convert_value_to_bytes", skip_all)]
pub(crate) fn serialize_in_span<T: ToBytesWithConfig<Error = SledStorageError>>(
    config: &BincodeConfig,
    value: &T,
) -> Result<Vec<u8>, SledStorageError> {
    value.to_bytes(config)
}

#[instrument(name = "sled::flush_tree", skip_all)]
pub(crate) fn flush_tree_in_span(
    tree: &sled::Tree,
    tree_name: &str,
) -> Result<(), SledStorageError> {
    info!(tree_name, "flush tree");
    tree.flush()?;
    Ok(())
}
