//! Shared planner conventions (well-known prefixes and suffixes).

/// Prefix of every container key constant (`ARG_USER_NAME`).
pub const CONTAINER_KEY_PREFIX: &str = "ARG_";

/// Convention: accessor method prefix looked up for read strategies.
pub const GETTER_PREFIX: &str = "get";

/// Convention: mutator method prefix looked up for write strategies.
pub const SETTER_PREFIX: &str = "set";

/// Prefix of the companion's static per-field helper that reads from the container.
pub const GET_HELPER_PREFIX: &str = "get";

/// Prefix of the companion's static per-field helper that writes to the container.
pub const PUT_HELPER_PREFIX: &str = "put";

/// Prefix of the generated companion type name (`BundlerPoint`).
pub const COMPANION_PREFIX: &str = "Bundler";

/// Suffix appended to a catalog operation when the field is an array of the catalog type.
pub const ARRAY_SUFFIX: &str = "Array";

/// Simple name of the annotation that marks a model for generation.
pub const ANNOTATION_NAME: &str = "Bundler";
