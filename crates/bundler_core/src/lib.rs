//! Provide the canonical vocabulary shared by the Bundler planner and its tooling.
//!
//! This crate is intentionally small and dependency-free. It contains the fixed tables the planner
//! classifies against, and the deterministic naming helpers that derive container keys and accessor
//! names from field identifiers.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global state, and no planner-specific types.
//! - Current scope: platform type registry (qualified names + supertypes), primitive kinds and their
//!   boxed counterparts, the container operation catalog, naming conventions and case conversion.

pub mod lang;
pub mod naming;
