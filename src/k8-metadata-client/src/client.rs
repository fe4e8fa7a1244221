use std::error::Error;
use std::fmt;

use async_trait::async_trait;

use k8_types::{K8List, K8Meta, K8Obj, Spec};

#[derive(Clone, Debug, PartialEq)]
pub enum NameSpace {
    All,
    Named(String),
}

impl NameSpace {
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn named(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for NameSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.named())
    }
}

impl From<String> for NameSpace {
    fn from(namespace: String) -> Self {
        NameSpace::Named(namespace)
    }
}

impl From<&str> for NameSpace {
    fn from(namespace: &str) -> Self {
        NameSpace::Named(namespace.to_owned())
    }
}

/// trait for metadata client error
pub trait MetadataClientError: Error + Send + Sync + 'static {
    /// requested item doesn't exist
    fn not_founded(&self) -> bool;
}

/// Read access to the cluster api.
/// Implementations own transport, authentication and namespace defaulting.
#[async_trait]
pub trait MetadataClient: Send + Sync {
    type MetadataClientError: MetadataClientError;

    /// retrieval a single item
    async fn retrieve_item<S, M>(
        &self,
        metadata: &M,
    ) -> Result<K8Obj<S>, Self::MetadataClientError>
    where
        S: Spec,
        M: K8Meta + Send + Sync;

    /// retrieve all items a single chunk
    /// this may cause client to hang if there are too many items
    async fn retrieve_items<S, N>(
        &self,
        namespace: N,
    ) -> Result<K8List<S>, Self::MetadataClientError>
    where
        S: Spec,
        N: Into<NameSpace> + Send + Sync;
}
