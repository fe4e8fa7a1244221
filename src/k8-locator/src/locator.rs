use tracing::debug;
use tracing::trace;

use k8_metadata_client::{MetadataClient, SharedClient};
use k8_types::app::deployment::DeploymentSpec;
use k8_types::app::replica_set::ReplicaSetSpec;
use k8_types::app::stateful_set::StatefulSetSpec;
use k8_types::core::pod::PodSpec;
use k8_types::{ItemMeta, Spec};

use crate::objects::{Deployment, Pod, ReplicaSet, StatefulSet};
use crate::revision::pick_more_recent;
use crate::{LocatorConfig, LocatorError};

type LocatorResult<T, C> = Result<T, LocatorError<<C as MetadataClient>::MetadataClientError>>;

/// Finds workloads and the objects they own through a metadata client.
/// Read only; every query is a fresh request to the client.
pub struct ResourceLocator<C> {
    client: SharedClient<C>,
    config: LocatorConfig,
}

impl<C> Clone for ResourceLocator<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            config: self.config.clone(),
        }
    }
}

impl<C> ResourceLocator<C>
where
    C: MetadataClient,
{
    pub fn new(client: SharedClient<C>, config: impl Into<LocatorConfig>) -> Self {
        Self {
            client,
            config: config.into(),
        }
    }

    /// namespace used by lookups by name
    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }

    pub fn client(&self) -> &SharedClient<C> {
        &self.client
    }

    /// get the deployment with a specific name
    pub async fn get_deployment(&self, name: &str) -> LocatorResult<Deployment, C> {
        let namespace = self.namespace();
        debug!(%name, %namespace, "retrieving Deployment");
        self.client
            .retrieve_item::<DeploymentSpec, _>(&ItemMeta::new(name, namespace))
            .await
            .map_err(|err| {
                LocatorError::from_retrieve(
                    "get Deployment",
                    DeploymentSpec::label(),
                    name,
                    namespace,
                    err,
                )
            })
    }

    /// get the statefulset with a specific name
    pub async fn get_stateful_set(&self, name: &str) -> LocatorResult<StatefulSet, C> {
        let namespace = self.namespace();
        debug!(%name, %namespace, "retrieving StatefulSet");
        self.client
            .retrieve_item::<StatefulSetSpec, _>(&ItemMeta::new(name, namespace))
            .await
            .map_err(|err| {
                LocatorError::from_retrieve(
                    "get StatefulSet",
                    StatefulSetSpec::label(),
                    name,
                    namespace,
                    err,
                )
            })
    }

    /// pods owned by the replicaset, in listing order
    pub async fn find_pods(&self, replica_set: &ReplicaSet) -> LocatorResult<Vec<Pod>, C> {
        let namespace = self.namespace_of(&replica_set.metadata.namespace);
        let owner = &replica_set.metadata.name;

        let pods = self
            .client
            .retrieve_items::<PodSpec, _>(namespace)
            .await
            .map_err(|err| LocatorError::transport("list pods", err))?;

        let owned: Vec<Pod> = pods
            .items
            .into_iter()
            .filter(|pod| pod.metadata.is_owned_by(ReplicaSetSpec::label(), owner))
            .collect();

        debug!(
            replica_set = %owner,
            %namespace,
            pods = owned.len(),
            "found pods owned by ReplicaSet"
        );
        Ok(owned)
    }

    /// most recent replicaset owned by the deployment
    pub async fn get_replica_set(&self, deployment: &Deployment) -> LocatorResult<ReplicaSet, C> {
        let namespace = self.namespace_of(&deployment.metadata.namespace);
        let owner = &deployment.metadata.name;

        let replica_sets = self
            .client
            .retrieve_items::<ReplicaSetSpec, _>(namespace)
            .await
            .map_err(|err| LocatorError::transport("list replicasets", err))?;

        let mut most_recent: Option<ReplicaSet> = None;
        for replica_set in replica_sets.items {
            if !replica_set.metadata.is_owned_by(DeploymentSpec::label(), owner) {
                continue;
            }
            trace!(candidate = %replica_set.metadata.name, deployment = %owner, "owned replicaset");
            most_recent = Some(pick_more_recent(most_recent, replica_set)?);
        }

        match most_recent {
            Some(replica_set) => {
                debug!(
                    deployment = %owner,
                    replica_set = %replica_set.metadata.name,
                    "resolved most recent ReplicaSet"
                );
                Ok(replica_set)
            }
            None => Err(LocatorError::NoReplicaSet {
                deployment: owner.to_owned(),
                namespace: namespace.to_owned(),
            }),
        }
    }

    /// most recent replicaset owned by the deployment with a specific name
    pub async fn get_replica_set_by_name(
        &self,
        deployment_name: &str,
    ) -> LocatorResult<ReplicaSet, C> {
        let deployment = self.get_deployment(deployment_name).await?;
        self.get_replica_set(&deployment).await
    }

    /// objects built outside the cluster may carry no namespace
    fn namespace_of<'a>(&'a self, namespace: &'a str) -> &'a str {
        if namespace.is_empty() {
            self.namespace()
        } else {
            namespace
        }
    }
}
