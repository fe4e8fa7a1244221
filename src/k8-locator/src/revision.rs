//! Rollout revision of a ReplicaSet, as recorded by the deployment controller.

use std::num::ParseIntError;

use thiserror::Error;
use tracing::trace;

use crate::objects::ReplicaSet;

/// annotation the deployment controller stamps on every ReplicaSet it creates
pub const REVISION_ANNOTATION: &str = "deployment.kubernetes.io/revision";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RevisionError {
    #[error("replicaset '{replica_set}' has no '{}' annotation", REVISION_ANNOTATION)]
    Missing { replica_set: String },
    #[error("error parsing replicaset '{replica_set}' revision '{value}': {source}")]
    Invalid {
        replica_set: String,
        value: String,
        source: ParseIntError,
    },
}

/// parse the revision annotation as a base 10 integer
pub fn revision_of(replica_set: &ReplicaSet) -> Result<i64, RevisionError> {
    let value = replica_set
        .metadata
        .annotation(REVISION_ANNOTATION)
        .ok_or_else(|| RevisionError::Missing {
            replica_set: replica_set.metadata.name.clone(),
        })?;
    value.parse::<i64>().map_err(|source| RevisionError::Invalid {
        replica_set: replica_set.metadata.name.clone(),
        value: value.to_owned(),
        source,
    })
}

/// One step of the most recent reduction.
/// An empty `best` is the identity and the candidate is taken without parsing.
/// Otherwise both revisions are parsed and `best` wins ties.
pub fn pick_more_recent(
    best: Option<ReplicaSet>,
    candidate: ReplicaSet,
) -> Result<ReplicaSet, RevisionError> {
    let best = match best {
        Some(best) => best,
        None => return Ok(candidate),
    };

    let best_revision = revision_of(&best)?;
    let candidate_revision = revision_of(&candidate)?;

    trace!(
        best = %best.metadata.name,
        best_revision,
        candidate = %candidate.metadata.name,
        candidate_revision,
        "comparing replicaset revisions"
    );

    if best_revision >= candidate_revision {
        Ok(best)
    } else {
        Ok(candidate)
    }
}

#[cfg(test)]
mod test {

    use k8_types::app::replica_set::ReplicaSetSpec;
    use k8_types::{K8Obj, ObjectMeta};

    use crate::objects::ReplicaSet;

    use super::{pick_more_recent, revision_of, RevisionError, REVISION_ANNOTATION};

    fn replica_set(name: &str, revision: Option<&str>) -> ReplicaSet {
        let mut metadata = ObjectMeta::new(name, "default");
        if let Some(revision) = revision {
            metadata = metadata.set_annotation(REVISION_ANNOTATION, revision);
        }
        K8Obj::new(name, ReplicaSetSpec::default()).set_metadata(metadata)
    }

    #[test]
    fn test_revision_parse() {
        assert_eq!(revision_of(&replica_set("a", Some("12"))), Ok(12));
        assert_eq!(revision_of(&replica_set("a", Some("+3"))), Ok(3));
        assert_eq!(
            revision_of(&replica_set("a", None)),
            Err(RevisionError::Missing {
                replica_set: "a".to_owned()
            })
        );
        assert!(matches!(
            revision_of(&replica_set("a", Some("v2"))),
            Err(RevisionError::Invalid { value, .. }) if value == "v2"
        ));
        assert!(matches!(
            revision_of(&replica_set("a", Some(""))),
            Err(RevisionError::Invalid { .. })
        ));
    }

    #[test]
    fn test_empty_best_takes_candidate_unparsed() {
        let picked = pick_more_recent(None, replica_set("legacy", None)).expect("identity");
        assert_eq!(picked.metadata.name, "legacy");
    }

    #[test]
    fn test_higher_revision_wins() {
        let picked = pick_more_recent(
            Some(replica_set("old", Some("2"))),
            replica_set("new", Some("10")),
        )
        .expect("pick");
        assert_eq!(picked.metadata.name, "new");

        let picked = pick_more_recent(
            Some(replica_set("new", Some("10"))),
            replica_set("old", Some("2")),
        )
        .expect("pick");
        assert_eq!(picked.metadata.name, "new");
    }

    #[test]
    fn test_tie_keeps_best() {
        let picked = pick_more_recent(
            Some(replica_set("first", Some("4"))),
            replica_set("second", Some("4")),
        )
        .expect("pick");
        assert_eq!(picked.metadata.name, "first");
    }

    #[test]
    fn test_parse_failure_names_replicaset() {
        let err = pick_more_recent(
            Some(replica_set("good", Some("4"))),
            replica_set("broken", Some("four")),
        )
        .expect_err("should fail");
        assert!(matches!(
            &err,
            RevisionError::Invalid { replica_set, value, .. } if replica_set == "broken" && value == "four"
        ));
    }
}
