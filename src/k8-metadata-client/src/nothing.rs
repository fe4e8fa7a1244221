// implementation of metadata client that can't reach any cluster
// it is used for testing how callers surface transport failures
use async_trait::async_trait;
use thiserror::Error;

use k8_types::K8List;
use k8_types::K8Meta;
use k8_types::K8Obj;
use k8_types::Spec;

use crate::MetadataClient;
use crate::MetadataClientError;
use crate::NameSpace;

#[derive(Error, Debug)]
pub enum DoNothingError {
    #[error("api server unavailable")]
    Unavailable,
}

impl MetadataClientError for DoNothingError {
    fn not_founded(&self) -> bool {
        false
    }
}

pub struct DoNothingClient();

#[async_trait]
impl MetadataClient for DoNothingClient {
    type MetadataClientError = DoNothingError;

    async fn retrieve_item<S, M>(
        &self,
        _metadata: &M,
    ) -> Result<K8Obj<S>, Self::MetadataClientError>
    where
        S: Spec,
        M: K8Meta + Send + Sync,
    {
        Err(DoNothingError::Unavailable)
    }

    async fn retrieve_items<S, N>(
        &self,
        _namespace: N,
    ) -> Result<K8List<S>, Self::MetadataClientError>
    where
        S: Spec,
        N: Into<NameSpace> + Send + Sync,
    {
        Err(DoNothingError::Unavailable)
    }
}
