//! Processing loop over annotated declarations.
//!
//! The capability catalog is built once per run; every candidate is then planned on its own.
//! A rejected model, including one whose collaborator panicked, never prevents the others from
//! being planned.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{error, info, warn};

use crate::frontend::manifest::ManifestUniverse;
use crate::frontend::symbols::{DeclarationView, SymbolError, TypeQueries};
use crate::plan::capabilities::CapabilityCatalog;
use crate::plan::{GenerationPlan, ModelDescriptor, PlanError, PlannerConfig, Rejection, Stage};

/// Results of one run: plans for accepted models and rejections for the others, each in
/// candidate order.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutcome {
    pub plans: Vec<GenerationPlan>,
    pub rejections: Vec<Rejection>,
}

impl ProcessOutcome {
    pub fn is_success(&self) -> bool {
        self.rejections.is_empty()
    }

    pub fn plan(&self, model: &str) -> Option<&GenerationPlan> {
        self.plans.iter().find(|p| p.model == model)
    }

    pub fn rejection(&self, model: &str) -> Option<&Rejection> {
        self.rejections.iter().find(|r| r.model == model)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Processor {
    config: PlannerConfig,
}

impl Processor {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan every candidate declaration.
    ///
    /// ## Errors
    /// Only run-level failures: the host cannot resolve the platform marker types. Per-model
    /// failures are reported in [`ProcessOutcome::rejections`].
    #[tracing::instrument(skip_all)]
    pub fn process<'a, D>(
        &self,
        types: &dyn TypeQueries,
        candidates: impl IntoIterator<Item = &'a D>,
    ) -> Result<ProcessOutcome, SymbolError>
    where
        D: DeclarationView + ?Sized + 'a,
    {
        let catalog = CapabilityCatalog::build(types)?;
        let mut outcome = ProcessOutcome::default();

        for declaration in candidates {
            match self.plan_model(declaration, &catalog) {
                Ok(plan) => {
                    info!(
                        model = %plan.model,
                        companion = %plan.companion,
                        fields = plan.fields.len(),
                        "model planned"
                    );
                    outcome.plans.push(plan);
                }
                Err(rejection) => {
                    if rejection.has_internal_error() {
                        error!(model = %rejection.model, "internal error while planning model");
                    } else {
                        warn!(
                            model = %rejection.model,
                            errors = rejection.len(),
                            first = %rejection.first(),
                            "model rejected"
                        );
                    }
                    outcome.rejections.push(rejection);
                }
            }
        }

        info!(
            planned = outcome.plans.len(),
            rejected = outcome.rejections.len(),
            "processing finished"
        );
        Ok(outcome)
    }

    /// Plan every annotated declaration of a manifest.
    pub fn process_manifest(
        &self,
        universe: &ManifestUniverse,
    ) -> Result<ProcessOutcome, SymbolError> {
        self.process(universe, universe.annotated())
    }

    /// Plan one model, converting a collaborator panic into an internal error.
    pub fn plan_model<D: DeclarationView + ?Sized>(
        &self,
        declaration: &D,
        catalog: &CapabilityCatalog,
    ) -> Result<GenerationPlan, Rejection> {
        let parsed = panic::catch_unwind(AssertUnwindSafe(|| {
            ModelDescriptor::parse(declaration, catalog, &self.config)
        }));
        match parsed {
            Ok(result) => result.map(ModelDescriptor::into_plan),
            Err(payload) => {
                let model = panic::catch_unwind(AssertUnwindSafe(|| {
                    declaration.qualified_name().to_string()
                }))
                .unwrap_or_else(|_| String::from("<unknown>"));
                Err(Rejection::new(
                    model,
                    Stage::Discovered,
                    PlanError::Internal {
                        message: panic_message(payload.as_ref()),
                    },
                ))
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("collaborator panicked")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::symbols::{ConstructorInfo, DeclKind, FieldInfo, MethodInfo};

    struct Exploding;

    impl DeclarationView for Exploding {
        fn qualified_name(&self) -> &str {
            "com.example.Exploding"
        }
        fn package_name(&self) -> &str {
            "com.example"
        }
        fn kind(&self) -> DeclKind {
            DeclKind::Class
        }
        fn enumerate_fields(&self) -> Result<Vec<FieldInfo>, SymbolError> {
            panic!("symbol table corrupted")
        }
        fn enumerate_constructors(&self) -> Result<Vec<ConstructorInfo>, SymbolError> {
            Ok(Vec::new())
        }
        fn enumerate_methods(&self) -> Result<Vec<MethodInfo>, SymbolError> {
            Ok(Vec::new())
        }
    }

    struct Failing;

    impl DeclarationView for Failing {
        fn qualified_name(&self) -> &str {
            "com.example.Failing"
        }
        fn package_name(&self) -> &str {
            "com.example"
        }
        fn kind(&self) -> DeclKind {
            DeclKind::Class
        }
        fn enumerate_fields(&self) -> Result<Vec<FieldInfo>, SymbolError> {
            Ok(Vec::new())
        }
        fn enumerate_constructors(&self) -> Result<Vec<ConstructorInfo>, SymbolError> {
            Err(SymbolError::Query("constructors unavailable".to_string()))
        }
        fn enumerate_methods(&self) -> Result<Vec<MethodInfo>, SymbolError> {
            Ok(Vec::new())
        }
    }

    fn universe() -> ManifestUniverse {
        ManifestUniverse::from_json_str(
            r#"{ "types": [
                { "name": "com.example.Point", "annotated": true,
                  "fields": [{ "name": "x", "type": "int", "visibility": "public" }],
                  "constructors": [{ "visibility": "public", "params": [{ "name": "x", "type": "int" }] }] }
            ] }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_panicking_collaborator_is_isolated() {
        let universe = universe();
        let point = universe.declaration("com.example.Point").unwrap();
        let candidates: Vec<&dyn DeclarationView> = vec![&Exploding, point];

        let outcome = Processor::default()
            .process(&universe, candidates.iter().copied())
            .unwrap();

        assert_eq!(outcome.plans.len(), 1);
        assert_eq!(outcome.plans[0].model, "com.example.Point");
        let rejection = outcome.rejection("com.example.Exploding").unwrap();
        assert!(rejection.has_internal_error());
        assert_eq!(
            rejection.first(),
            &PlanError::Internal {
                message: "symbol table corrupted".to_string()
            }
        );
    }

    #[test]
    fn test_symbol_errors_become_internal_rejections() {
        let universe = universe();
        let candidates: Vec<&dyn DeclarationView> = vec![&Failing];
        let outcome = Processor::default()
            .process(&universe, candidates.iter().copied())
            .unwrap();

        let rejection = outcome.rejection("com.example.Failing").unwrap();
        assert_eq!(rejection.stage, Stage::FieldsCollected);
        assert!(matches!(rejection.first(), PlanError::Internal { message } if message.contains("constructors unavailable")));
    }

    #[test]
    fn test_process_manifest_uses_annotated_only() {
        let universe = ManifestUniverse::from_json_str(
            r#"{ "types": [
                { "name": "com.example.Plain" },
                { "name": "com.example.Empty", "annotated": true }
            ] }"#,
        )
        .unwrap();
        let outcome = Processor::default().process_manifest(&universe).unwrap();
        assert!(outcome.is_success());
        assert_eq!(outcome.plans.len(), 1);
        assert_eq!(outcome.plans[0].companion, "BundlerEmpty");
        assert!(outcome.plans[0].fields.is_empty());
    }
}
