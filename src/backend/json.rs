//! JSON plan output.

use serde_json::Value;

use super::{EmitError, Emitter};
use crate::plan::GenerationPlan;

/// Collects plans into a pretty-printed JSON array.
#[derive(Debug, Default)]
pub struct JsonEmitter {
    plans: Vec<Value>,
}

impl JsonEmitter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Emitter for JsonEmitter {
    type Output = String;

    fn emit(&mut self, plan: &GenerationPlan) -> Result<(), EmitError> {
        self.plans.push(serde_json::to_value(plan)?);
        Ok(())
    }

    fn finish(self) -> Result<String, EmitError> {
        let mut out = serde_json::to_string_pretty(&Value::Array(self.plans))?;
        out.push('\n');
        Ok(out)
    }
}
