use serde::Deserialize;
use serde::Serialize;

use crate::core::pod::PodSpec;
use crate::{Crd, CrdNames, DefaultHeader, Int32OrString, LabelSelector, Spec, Status, TemplateSpec};

const STATEFUL_SET_API: Crd = Crd {
    group: "apps",
    version: "v1",
    names: CrdNames {
        kind: "StatefulSet",
        plural: "statefulsets",
        singular: "statefulset",
    },
};

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StatefulSetSpec {
    pub min_ready_seconds: Option<i32>,
    pub pod_management_policy: Option<PodManagementPolicy>,
    pub replicas: Option<i32>,
    pub revision_history_limit: Option<i32>,
    pub selector: LabelSelector,
    pub service_name: String,
    pub template: TemplateSpec<PodSpec>,
    pub update_strategy: Option<StatefulSetUpdateStrategy>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
pub enum PodManagementPolicy {
    OrderedReady,
    Parallel,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StatefulSetUpdateStrategy {
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub rolling_update: Option<RollingUpdateStatefulSetStrategy>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RollingUpdateStatefulSetStrategy {
    pub max_unavailable: Option<Int32OrString>,
    pub partition: Option<i32>,
}

impl Spec for StatefulSetSpec {
    type Status = StatefulSetStatus;
    type Header = DefaultHeader;

    fn metadata() -> &'static Crd {
        &STATEFUL_SET_API
    }
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StatefulSetStatus {
    pub available_replicas: Option<i32>,
    pub collision_count: Option<i32>,
    pub current_replicas: Option<i32>,
    pub current_revision: Option<String>,
    pub observed_generation: Option<i64>,
    pub ready_replicas: Option<i32>,
    pub replicas: i32,
    pub update_revision: Option<String>,
    pub updated_replicas: Option<i32>,
}

impl Status for StatefulSetStatus {}
