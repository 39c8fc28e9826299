//! Bundler front end
//!
//! This module contains everything that turns host declarations into planner inputs:
//! - `types`: semantic type descriptions and their source-spelling parser
//! - `symbols`: declaration/type-query traits the planner consumes
//! - `hierarchy`: supertype graph and assignability
//! - `manifest`: JSON declaration manifests implementing the traits

pub mod hierarchy;
pub mod manifest;
pub mod symbols;
pub mod types;
