//! Rendering Formatter
//!
//! The five edit operations over one compiled module, targeting the
//! function-wrapped emission format: decorator removal, definition
//! injection, import/export/constant block management and switch-marker
//! rewriting. Each operation only appends edits to the patch buffer, so
//! callers may interleave them freely before materializing.

use crate::analysis::{CompiledClass, ExportInfo, ImportRequest, RedundantDecoratorMap,
                      SwitchableDeclaration};
use crate::ast::{NodeId, NodeKind, ParsedModule, Span};
use crate::constants::{POST_R3_MARKER, PRE_R3_MARKER};
use crate::rendering::error::RenderingError;
use crate::rendering::patch_buffer::PatchBuffer;
use crate::utils::path::{relative_import_specifier, strip_extension};

/// Formats edits for modules emitted in the legacy function-wrapped
/// flavour. Stateless; one instance can serve any number of modules.
#[derive(Debug, Default)]
pub struct RenderingFormatter;

impl RenderingFormatter {
    pub fn new() -> Self {
        RenderingFormatter
    }

    /// Strip the given decorator entries from their containers.
    ///
    /// A container losing only some of its entries keeps a syntactically
    /// valid element list: each removed entry takes exactly one adjacent
    /// separating comma with it. A container losing all of its entries is
    /// removed wholesale, as the entire enclosing statement — this covers
    /// both the `decorators = [...]` assignment and the helper-call
    /// reassignment, including any chained write-back prefix.
    pub fn remove_decorators(
        &self,
        output: &mut PatchBuffer,
        module: &ParsedModule,
        decorators_to_remove: &RedundantDecoratorMap,
    ) {
        for (&container, nodes) in decorators_to_remove {
            if nodes.is_empty() {
                continue;
            }
            let items = match container_elements(module, container) {
                Some(items) => items,
                None => continue,
            };
            if items.len() == nodes.len() {
                if let Some(statement) = module.tree.enclosing_statement(container) {
                    let end = module.tree.span(statement).end;
                    output.remove(module.full_start(statement), end);
                }
            } else {
                for &node in nodes {
                    let is_last = items.last() == Some(&node);
                    let span = entry_removal_span(module, node, is_last);
                    output.remove(span.start, span.end);
                }
            }
        }
    }

    /// Insert generated definition text immediately before the `return`
    /// statement of the class's invoked-function wrapper.
    pub fn add_definitions(
        &self,
        output: &mut PatchBuffer,
        module: &ParsedModule,
        class: &CompiledClass,
        definitions: &str,
    ) -> Result<(), RenderingError> {
        let body = module.tree.iife_body(class.declaration).ok_or_else(|| {
            RenderingError::ClassNotWrappedInIife {
                name: class.name.clone(),
                path: module.path.clone(),
            }
        })?;
        let return_statement = module
            .tree
            .children(body)
            .iter()
            .copied()
            .find(|&child| module.tree.kind(child) == NodeKind::ReturnStatement)
            .ok_or_else(|| RenderingError::MissingReturnStatement {
                name: class.name.clone(),
                path: module.path.clone(),
            })?;
        output.insert_before(
            module.full_start(return_statement),
            format!("\n{}", definitions),
        );
        Ok(())
    }

    /// Insert namespace imports directly after the module's leading
    /// import block, in request order. Repeated calls accumulate in call
    /// order, still ahead of any constants block at the same anchor.
    pub fn add_imports(
        &self,
        output: &mut PatchBuffer,
        imports: &[ImportRequest],
        module: &ParsedModule,
    ) {
        let insertion_point = end_of_imports(module);
        for import in imports {
            output.insert_before(
                insertion_point,
                format!("import * as {} from '{}';\n", import.qualifier, import.specifier),
            );
        }
    }

    /// Append export statements at the end of the module, one per
    /// request. Exports of identifiers defined in the module itself get
    /// no `from` clause; all others re-export from a relative specifier.
    /// `alias` only matters to the type-declaration renderer and never
    /// shows up here.
    pub fn add_exports(
        &self,
        output: &mut PatchBuffer,
        module: &ParsedModule,
        exports: &[ExportInfo],
    ) {
        for export in exports {
            let statement = if strip_extension(&export.from) == strip_extension(&module.path) {
                format!("\nexport {{{}}};", export.identifier)
            } else {
                let specifier = relative_import_specifier(&module.path, &export.from);
                format!("\nexport {{{}}} from '{}';", export.identifier, specifier)
            };
            output.append(statement);
        }
    }

    /// Insert a raw constant statement block directly after the module's
    /// original leading import block, separated from the preceding
    /// statement by one blank line.
    pub fn add_constants(&self, output: &mut PatchBuffer, constants: &str, module: &ParsedModule) {
        if constants.is_empty() {
            return;
        }
        let insertion_point = end_of_imports(module);
        output.insert_after(insertion_point, format!("\n{}\n", constants));
    }

    /// Flip switchable declarations from the legacy-runtime variant to
    /// the new-runtime one. Only initializers exactly matching the
    /// `<name>__PRE_R3__` suffix convention are rewritten; anything else
    /// is left untouched.
    pub fn rewrite_switchable_declarations(
        &self,
        output: &mut PatchBuffer,
        module: &ParsedModule,
        declarations: &[SwitchableDeclaration],
    ) {
        for switchable in declarations {
            let children = module.tree.children(switchable.declaration);
            let (name_node, initializer) = match (children.first(), children.last()) {
                (Some(&name), Some(&init)) if name != init => (name, init),
                _ => continue,
            };
            if module.tree.kind(initializer) != NodeKind::Identifier {
                continue;
            }
            let declared_name = module.node_text(name_node);
            let expected = format!("{}{}", declared_name, PRE_R3_MARKER);
            if switchable.initializer_name != expected
                || module.node_text(initializer) != expected
            {
                continue;
            }
            let span = module.tree.span(initializer);
            output.overwrite(
                span.start,
                span.end,
                format!("{}{}", declared_name, POST_R3_MARKER),
            );
        }
    }
}

/// The decorator entry nodes held by a container: an array literal's
/// elements, or a call expression's arguments.
fn container_elements(module: &ParsedModule, container: NodeId) -> Option<&[NodeId]> {
    let children = module.tree.children(container);
    match module.tree.kind(container) {
        NodeKind::ArrayLiteral => Some(children),
        NodeKind::CallExpression => children.get(1..),
        _ => None,
    }
}

/// The span to delete for one removed entry: the entry itself plus one
/// separating comma — the following one, or the preceding one when the
/// entry closes the container.
fn entry_removal_span(module: &ParsedModule, node: NodeId, is_last: bool) -> Span {
    let span = module.tree.span(node);
    let bytes = module.text.as_bytes();
    if !is_last {
        let mut end = span.end;
        while end < bytes.len() && bytes[end].is_ascii_whitespace() {
            end += 1;
        }
        if end < bytes.len() && bytes[end] == b',' {
            return Span::new(span.start, end + 1);
        }
    } else {
        let mut start = span.start;
        while start > 0 && bytes[start - 1].is_ascii_whitespace() {
            start -= 1;
        }
        if start > 0 && bytes[start - 1] == b',' {
            return Span::new(start - 1, span.end);
        }
    }
    span
}

/// Position directly after the module's contiguous leading import block:
/// the post-trivia start of the first top-level non-import statement, or
/// the end of the text when every statement is an import.
fn end_of_imports(module: &ParsedModule) -> usize {
    let root = module.tree.root();
    for &statement in module.tree.children(root) {
        if module.tree.kind(statement) != NodeKind::ImportDeclaration {
            return module.tree.span(statement).start;
        }
    }
    module.text.len()
}
