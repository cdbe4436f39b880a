//! metas-contest
//!
//! Contestation lifecycle:
//! - Explicit state machine (`Pending -> Resolved | Dismissed`, terminal)
//! - Insertion-ordered ledger with the pending-pair lookup contract
//! - Validation of reason and resolution text at the write boundary

mod ledger;

pub use ledger::{ContestError, ContestationDraft, ContestationLedger};
