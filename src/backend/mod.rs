//! Bundler backend
//!
//! Emitters consume [`GenerationPlan`]s produced by the planner. The companion source
//! generator itself lives outside this crate; the emitters here render plans for it and for
//! people.
//!
//! ## Module Organization
//!
//! - `json.rs` - machine-readable plan output
//! - `summary.rs` - indented human-readable listing
//! - `writer.rs` - indentation-aware string builder

#![deny(clippy::unwrap_used)]

pub mod json;
pub mod summary;
pub mod writer;

use thiserror::Error;

use crate::plan::GenerationPlan;

pub use json::JsonEmitter;
pub use summary::SummaryEmitter;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to serialize plan: {0}")]
    Json(#[from] serde_json::Error),
}

/// A consumer of generation plans.
pub trait Emitter {
    type Output;

    /// Accept one plan. Plans arrive in candidate order.
    fn emit(&mut self, plan: &GenerationPlan) -> Result<(), EmitError>;

    fn finish(self) -> Result<Self::Output, EmitError>;
}

/// Feed every plan to `emitter` and finish it.
pub fn emit_all<E: Emitter>(
    mut emitter: E,
    plans: &[GenerationPlan],
) -> Result<E::Output, EmitError> {
    for plan in plans {
        emitter.emit(plan)?;
    }
    emitter.finish()
}
