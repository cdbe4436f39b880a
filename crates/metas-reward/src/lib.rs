//! metas-reward
//!
//! Goal completion & reward computation:
//! - Calendar period bucketing (daily through yearly, ISO weeks)
//! - Per-goal-type completion evaluators, ratios always in [0, 1]
//! - Cent-exact monetary conversion via metas-money
//! - Contestation netting: pending blocks, resolved forfeits, dismissed
//!   restores
//! - Pure deterministic logic (no IO, no time, no cached state)

mod engine;
mod evaluator;
mod period;

pub use engine::{compute, compute_monthly, RewardRequest};
pub use evaluator::{completion_ratio, has_answer};
pub use period::{period_key, Window};
