use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use tracing::trace;

use k8_types::Crd;
use k8_types::K8List;
use k8_types::K8Meta;
use k8_types::K8Obj;
use k8_types::Spec;

use crate::MetadataClient;
use crate::MetadataClientError;
use crate::NameSpace;

#[derive(Error, Debug)]
pub enum InMemoryError {
    #[error("Json error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("lock poison error")]
    LockPoisonError,
    #[error("not found")]
    NotFound,
}

type ReadPoisonError<'a> = PoisonError<RwLockReadGuard<'a, ItemStore>>;

impl<'a> From<ReadPoisonError<'a>> for InMemoryError {
    fn from(_error: ReadPoisonError<'a>) -> Self {
        Self::LockPoisonError
    }
}

type WritePoisonError<'a> = PoisonError<RwLockWriteGuard<'a, ItemStore>>;

impl<'a> From<WritePoisonError<'a>> for InMemoryError {
    fn from(_error: WritePoisonError<'a>) -> Self {
        Self::LockPoisonError
    }
}

impl MetadataClientError for InMemoryError {
    fn not_founded(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ItemKey {
    crd: &'static Crd,
    ns: String,
    name: String,
}

impl ItemKey {
    fn new<S>(metadata: &dyn K8Meta) -> Self
    where
        S: Spec,
    {
        ItemKey {
            crd: S::metadata(),
            ns: metadata.namespace().to_owned(),
            name: metadata.name().to_owned(),
        }
    }
}

/// items kept in insertion order, which is the order listing returns them
type ItemStore = Vec<(ItemKey, Value)>;

/// Metadata client backed by process memory.
/// Holds snapshots seeded with [`InMemoryClient::insert_item`].
#[derive(Debug, Default)]
pub struct InMemoryClient {
    store: Arc<RwLock<ItemStore>>,
}

impl InMemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// add item, replacing one with same kind, namespace and name in place
    pub fn insert_item<S>(&self, item: K8Obj<S>) -> Result<(), InMemoryError>
    where
        S: Spec,
    {
        let item_key = ItemKey::new::<S>(&item.metadata);
        let item_value = serde_json::to_value(&item)?;
        debug!("{}: storing '{}/{}'", S::label(), item_key.ns, item_key.name);
        let mut store = self.store.write()?;
        match store.iter_mut().find(|(key, _)| key == &item_key) {
            Some((_, value)) => *value = item_value,
            None => store.push((item_key, item_value)),
        }
        Ok(())
    }

    /// number of items stored across all kinds
    pub fn len(&self) -> Result<usize, InMemoryError> {
        Ok(self.store.read()?.len())
    }
}

#[async_trait]
impl MetadataClient for InMemoryClient {
    type MetadataClientError = InMemoryError;

    async fn retrieve_item<S, M>(&self, metadata: &M) -> Result<K8Obj<S>, Self::MetadataClientError>
    where
        S: Spec,
        M: K8Meta + Send + Sync,
    {
        let item_key = ItemKey::new::<S>(metadata);
        let store = self.store.read()?;
        let (_, item_value) = store
            .iter()
            .find(|(key, _)| key == &item_key)
            .ok_or(InMemoryError::NotFound)?;
        trace!("{}: found '{}/{}'", S::label(), item_key.ns, item_key.name);
        Ok(serde_json::from_value(item_value.clone())?)
    }

    async fn retrieve_items<S, N>(
        &self,
        namespace: N,
    ) -> Result<K8List<S>, Self::MetadataClientError>
    where
        S: Spec,
        N: Into<NameSpace> + Send + Sync,
    {
        let namespace = namespace.into();
        let crd = S::metadata();
        let store = self.store.read()?;

        let mut list = K8List::<S>::new();
        for (key, value) in store.iter() {
            if key.crd != crd {
                continue;
            }
            if let NameSpace::Named(ns) = &namespace {
                if &key.ns != ns {
                    continue;
                }
            }
            list.items.push(serde_json::from_value(value.clone())?);
        }

        debug!(
            "{}: listed {} items in namespace: {}",
            S::label(),
            list.items.len(),
            namespace
        );
        Ok(list)
    }
}
