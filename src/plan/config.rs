//! Planner configuration

/// How many failures to collect before rejecting a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagnosticMode {
    /// Stop at the first failing check.
    #[default]
    FirstFailure,
    /// Check every field and every model-level rule, then report all failures together.
    AllFailures,
}

/// Planner configuration
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub diagnostics: DiagnosticMode,
    /// Reject models in which two fields derive the same container key.
    pub check_key_collisions: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            diagnostics: DiagnosticMode::FirstFailure,
            check_key_collisions: true,
        }
    }
}

impl PlannerConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_diagnostics(mut self, mode: DiagnosticMode) -> Self {
        self.diagnostics = mode;
        self
    }

    pub fn with_key_collision_check(mut self, enabled: bool) -> Self {
        self.check_key_collisions = enabled;
        self
    }

    pub fn collects_all_failures(&self) -> bool {
        self.diagnostics == DiagnosticMode::AllFailures
    }
}
