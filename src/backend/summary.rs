//! Human-readable plan listing.
//!
//! One block per model, one line per field:
//!
//! ```text
//! com.example.Point => com.example.BundlerPoint (constructor)
//!     x: int -> Int as ARG_X (read: field, write: constructor arg 0)
//! ```

use super::writer::IndentWriter;
use super::{EmitError, Emitter};
use crate::plan::{FieldPlan, GenerationPlan};

#[derive(Debug, Default)]
pub struct SummaryEmitter {
    writer: IndentWriter,
}

impl SummaryEmitter {
    pub fn new() -> Self {
        Self {
            writer: IndentWriter::new(),
        }
    }

    fn field_line(field: &FieldPlan) -> String {
        format!(
            "{}: {} -> {} as {} (read: {}, write: {})",
            field.name,
            field.declared_type,
            field.operation,
            field.container_key,
            field.read,
            field.write
        )
    }
}

impl Emitter for SummaryEmitter {
    type Output = String;

    fn emit(&mut self, plan: &GenerationPlan) -> Result<(), EmitError> {
        if !self.writer.is_empty() {
            self.writer.newline();
        }
        self.writer.writeln(&format!(
            "{} => {} ({})",
            plan.model,
            plan.companion_qualified_name(),
            plan.write_mode
        ));
        self.writer.indent();
        if plan.fields.is_empty() {
            self.writer.writeln("(no fields)");
        }
        for field in &plan.fields {
            self.writer.writeln(&Self::field_line(field));
        }
        self.writer.dedent();
        Ok(())
    }

    fn finish(self) -> Result<String, EmitError> {
        Ok(self.writer.finish())
    }
}
