use thiserror::Error;

use k8_metadata_client::MetadataClientError;

use crate::RevisionError;

/// Failure of a locator query. `E` is the error of the underlying client.
#[derive(Error, Debug)]
pub enum LocatorError<E> {
    #[error("could not get {kind} '{name}' in namespace '{namespace}': not found")]
    NotFound {
        kind: &'static str,
        name: String,
        namespace: String,
    },
    #[error("no ReplicaSet owned by Deployment '{deployment}' in namespace '{namespace}'")]
    NoReplicaSet {
        deployment: String,
        namespace: String,
    },
    #[error("could not {context}: {source}")]
    Transport {
        context: &'static str,
        source: E,
    },
    #[error("could not retrieve replicaset: {0}")]
    RevisionParse(#[from] RevisionError),
}

impl<E> LocatorError<E>
where
    E: MetadataClientError,
{
    /// named resource, or a ReplicaSet owned by it, doesn't exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NoReplicaSet { .. })
    }

    /// map failure of a single item lookup, keeping not found apart from transport errors
    pub(crate) fn from_retrieve(
        context: &'static str,
        kind: &'static str,
        name: &str,
        namespace: &str,
        source: E,
    ) -> Self {
        if source.not_founded() {
            Self::NotFound {
                kind,
                name: name.to_owned(),
                namespace: namespace.to_owned(),
            }
        } else {
            Self::transport(context, source)
        }
    }

    pub(crate) fn transport(context: &'static str, source: E) -> Self {
        Self::Transport { context, source }
    }
}
