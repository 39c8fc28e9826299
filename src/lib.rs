#![forbid(unsafe_code)]
//! Bundler companion planner
//!
//! Decides how every field of a `@Bundler`-annotated model travels through a flat key/value
//! container: which typed container operation stores it, how the generated companion reads it
//! from an instance and how it writes it back when rebuilding one. This crate provides the
//! front end (declaration manifests, type hierarchy), the planner, plan emitters and the CLI.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Collaborators**: A panic raised by a [`frontend::symbols::DeclarationView`] implementation is caught at the
//!   per-model boundary and reported as an internal error for that model only.

pub mod backend;
pub mod cli;
pub mod frontend;
pub mod plan;
pub mod processor;

pub use frontend::manifest::ManifestUniverse;
pub use frontend::types::TypeRef;
pub use plan::{GenerationPlan, PlanError, PlannerConfig, Rejection};
pub use processor::{ProcessOutcome, Processor};
