//! Analysis Data Model
//!
//! Read-only shapes produced by the upstream decoration and switch-marker
//! analyzers. The rewrite engine consumes these to locate its edit
//! anchors; it never mutates them.

use indexmap::IndexMap;

use crate::ast::NodeId;

/// A class discovered in the compiled output, together with the legacy
/// decorator metadata attached to it (if any).
#[derive(Debug, Clone)]
pub struct CompiledClass {
    /// Name of the class, as it appears in the compiled output.
    pub name: String,
    /// The class's declaration node. For the wrapped emission shapes this
    /// is the outer variable declaration holding the invoked wrapper.
    pub declaration: NodeId,
    /// Decorators the analysis matched on this class, in container order.
    pub decorators: Option<Vec<Decorator>>,
}

/// One decorator entry inside a decorator container.
///
/// Both legacy encodings — the `decorators = [...]` array assignment and
/// the helper-call reassignment — reduce to the same pair of references:
/// the entry's own node and the container holding all entries for the
/// owning class.
#[derive(Debug, Clone)]
pub struct Decorator {
    /// Identifier of the decorator expression (e.g. `Directive`).
    pub name: String,
    /// The decorator entry's own node.
    pub node: NodeId,
    /// The enclosing container construct shared by all of the class's
    /// decorator entries.
    pub container: NodeId,
}

/// A variable declaration participating in the runtime-variant switch
/// convention: its initializer names a suffixed sibling declaration.
#[derive(Debug, Clone)]
pub struct SwitchableDeclaration {
    /// The variable declaration node; its children are the declared-name
    /// identifier followed by the initializer identifier.
    pub declaration: NodeId,
    /// Identifier currently assigned as the declaration's initializer.
    pub initializer_name: String,
}

/// Request to bind a namespace import of `specifier` to `qualifier`.
#[derive(Debug, Clone)]
pub struct ImportRequest {
    pub specifier: String,
    pub qualifier: String,
}

/// Request to (re-)export `identifier` from the module being rendered.
#[derive(Debug, Clone)]
pub struct ExportInfo {
    /// Absolute path of the module defining the identifier; may be the
    /// module being rendered itself.
    pub from: String,
    /// Absolute path of the defining type-declaration file. Only the
    /// companion type-declaration renderer reads this.
    pub dts_from: Option<String>,
    /// The exported identifier.
    pub identifier: String,
    /// Alias used by the companion type-declaration renderer; never
    /// consulted when rendering plain source.
    pub alias: Option<String>,
}

/// Batch of decorator removals: container node to the entry nodes that
/// must be stripped from it. Iteration follows caller insertion order.
pub type RedundantDecoratorMap = IndexMap<NodeId, Vec<NodeId>>;
