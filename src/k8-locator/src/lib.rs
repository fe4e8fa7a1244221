//! Locate Deployments, StatefulSets, and the ReplicaSets and Pods they own.
//!
//! Every query is a single read against a [`MetadataClient`] followed by
//! owner reference filtering done on the client side.

mod config;
mod error;
mod locator;
pub mod revision;

pub use self::config::LocatorConfig;
pub use self::error::LocatorError;
pub use self::locator::ResourceLocator;
pub use self::revision::RevisionError;

pub use k8_metadata_client::{MetadataClient, SharedClient};

/// snapshot aliases for the objects the locator returns
pub mod objects {
    use k8_types::app::deployment::DeploymentSpec;
    use k8_types::app::replica_set::ReplicaSetSpec;
    use k8_types::app::stateful_set::StatefulSetSpec;
    use k8_types::core::pod::PodSpec;
    use k8_types::K8Obj;

    pub type Deployment = K8Obj<DeploymentSpec>;
    pub type StatefulSet = K8Obj<StatefulSetSpec>;
    pub type ReplicaSet = K8Obj<ReplicaSetSpec>;
    pub type Pod = K8Obj<PodSpec>;
}
