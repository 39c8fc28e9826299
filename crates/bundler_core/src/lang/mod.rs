//! Bundler vocabulary registries.
//!
//! This module is the "front door" for the fixed vocabulary the planner works against: the
//! platform types it knows by name, the primitive kinds, and the container operations.
//!
//! The design goal is to avoid stringly-typed checks scattered across the planner. Callers work
//! with **stable IDs** (e.g. `PrimitiveId`, `OperationId`) and look up spellings/metadata via
//! registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no symbol-table types, no IO, no side effects.
//! - Classification rules live in the planner; registries provide spellings and metadata for
//!   shared use (resolution, diagnostics, the `catalog` listing).
//!
//! ## Examples
//! ```rust
//! use bundler_core::lang::operations::{self, OperationId};
//!
//! assert_eq!(operations::catalog_lookup("java.lang.Integer"), Some(OperationId::Int));
//! assert_eq!(operations::as_str(OperationId::Int), "Int");
//! ```

pub mod conventions;
pub mod operations;
pub mod platform;
pub mod primitives;
