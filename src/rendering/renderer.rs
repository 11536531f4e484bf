//! Module Renderer
//!
//! Per-module driver: composes the formatter operations for everything
//! the upstream analysis and code generation produced, then materializes
//! the patch buffer once. Modules share no state, so whole-module
//! rendering is parallelized with rayon.

use rayon::prelude::*;

use crate::analysis::{CompiledClass, ExportInfo, ImportRequest, RedundantDecoratorMap,
                      SwitchableDeclaration};
use crate::ast::ParsedModule;
use crate::rendering::error::RenderingError;
use crate::rendering::formatter::RenderingFormatter;
use crate::rendering::patch_buffer::PatchBuffer;

/// Everything to render into one module: the decorators to strip, the
/// generated definition text per class, the switch markers to flip and
/// the statement blocks to add.
#[derive(Debug, Default)]
pub struct RenderJob {
    pub decorators_to_remove: RedundantDecoratorMap,
    pub definitions: Vec<(CompiledClass, String)>,
    pub switchable_declarations: Vec<SwitchableDeclaration>,
    pub constants: String,
    pub imports: Vec<ImportRequest>,
    pub exports: Vec<ExportInfo>,
}

/// Applies one [`RenderJob`] per module and produces the rewritten text.
#[derive(Debug, Default)]
pub struct Renderer {
    formatter: RenderingFormatter,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            formatter: RenderingFormatter::new(),
        }
    }

    /// Render one module. A structural error from a definition injection
    /// aborts the whole module; the formatter's contract only aborts the
    /// single injection, but a partially rendered module is of no use to
    /// the migration pipeline.
    pub fn render_module(
        &self,
        module: &ParsedModule,
        job: &RenderJob,
    ) -> Result<String, RenderingError> {
        let mut output = PatchBuffer::new(&module.text);
        self.formatter
            .remove_decorators(&mut output, module, &job.decorators_to_remove);
        for (class, definitions) in &job.definitions {
            self.formatter
                .add_definitions(&mut output, module, class, definitions)?;
        }
        self.formatter.rewrite_switchable_declarations(
            &mut output,
            module,
            &job.switchable_declarations,
        );
        self.formatter
            .add_constants(&mut output, &job.constants, module);
        self.formatter.add_imports(&mut output, &job.imports, module);
        self.formatter.add_exports(&mut output, module, &job.exports);
        Ok(output.materialize())
    }

    /// Render many modules in parallel. Each module owns its patch
    /// buffer, so no coordination is needed.
    pub fn render_modules(
        &self,
        jobs: &[(&ParsedModule, RenderJob)],
    ) -> Vec<Result<String, RenderingError>> {
        jobs.par_iter()
            .map(|(module, job)| self.render_module(*module, job))
            .collect()
    }
}
