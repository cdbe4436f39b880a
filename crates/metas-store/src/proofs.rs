//! Proof-attachment assembly.
//!
//! Per-goal uploads are independent, unordered operations performed before
//! the submission is written.  A partial failure must not abort the
//! submission: failed uploads are logged and omitted, and the submission is
//! created with whatever succeeded.

use std::collections::BTreeMap;

use uuid::Uuid;

/// Outcome of one per-goal file upload, as reported by the external upload
/// service.
#[derive(Debug, Clone)]
pub struct ProofUpload {
    pub goal_id: Uuid,
    /// `Ok(file_ref)` with the opaque identifier, or `Err(reason)`.
    pub result: Result<String, String>,
}

/// Fold upload outcomes into the submission's `proof_files` map.
///
/// Failures are logged at `warn` and dropped; a fully-failed batch yields an
/// empty map, never an error.
pub fn collect_proofs(uploads: Vec<ProofUpload>) -> BTreeMap<String, Vec<String>> {
    let mut out: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for upload in uploads {
        match upload.result {
            Ok(file_ref) => {
                out.entry(upload.goal_id.to_string())
                    .or_default()
                    .push(file_ref);
            }
            Err(reason) => {
                tracing::warn!(
                    goal = %upload.goal_id,
                    %reason,
                    "proof upload failed; submitting without it"
                );
            }
        }
    }
    out
}
