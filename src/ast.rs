//! Parsed Module AST View
//!
//! A minimal, offset-addressed view over the syntax tree of one compiled
//! module, as supplied by the upstream parser. Nodes live in an arena and
//! are addressed by [`NodeId`]; each node carries the classification, byte
//! span and parent/child links the rewrite engine needs. The arena never
//! changes after parsing, so node identity is stable for the whole
//! migration pass over a module.

use smallvec::SmallVec;

/// Byte range in the original module text, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }
}

/// Stable identity of a node within one [`SourceTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

/// Syntactic classification of a node, as reported by the parser.
///
/// Only the shapes the rewrite engine must recognize are distinguished;
/// everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Program,
    ImportDeclaration,
    ExportDeclaration,
    ExpressionStatement,
    VariableStatement,
    VariableDeclaration,
    FunctionDeclaration,
    FunctionExpression,
    ParenthesizedExpression,
    CallExpression,
    ArrayLiteral,
    ObjectLiteral,
    Block,
    ReturnStatement,
    Identifier,
    Other,
}

impl NodeKind {
    /// Whether nodes of this kind are statements of a program or block body.
    pub fn is_statement(self) -> bool {
        matches!(
            self,
            NodeKind::ImportDeclaration
                | NodeKind::ExportDeclaration
                | NodeKind::ExpressionStatement
                | NodeKind::VariableStatement
                | NodeKind::FunctionDeclaration
                | NodeKind::ReturnStatement
        )
    }
}

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    span: Span,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
}

/// Arena of syntax nodes for one module. Node 0 is always the `Program`
/// root spanning the whole text.
#[derive(Debug)]
pub struct SourceTree {
    nodes: Vec<NodeData>,
}

impl SourceTree {
    pub fn new(program_span: Span) -> Self {
        SourceTree {
            nodes: vec![NodeData {
                kind: NodeKind::Program,
                span: program_span,
                parent: None,
                children: SmallVec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a child node under `parent`, in source order.
    pub fn add_child(&mut self, parent: NodeId, kind: NodeKind, span: Span) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            kind,
            span,
            parent: Some(parent),
            children: SmallVec::new(),
        });
        self.nodes[parent.0 as usize].children.push(id);
        id
    }

    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.nodes[id.0 as usize].kind
    }

    pub fn span(&self, id: NodeId) -> Span {
        self.nodes[id.0 as usize].span
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0 as usize].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0 as usize].children
    }

    /// The nearest statement node enclosing `id`, including `id` itself.
    pub fn enclosing_statement(&self, id: NodeId) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(node) = current {
            if self.kind(node).is_statement() {
                return Some(node);
            }
            current = self.parent(node);
        }
        None
    }

    /// The block body of the invoked-function wrapper associated with a
    /// class declaration, or `None` if the declaration is not wrapped.
    ///
    /// Handles both ways the analysis pass can hand us the class: as the
    /// outer variable declaration whose initializer is the wrapper call
    /// (`var A = (function() { ... }());`), or as the inner declaration
    /// sitting inside the wrapper body.
    pub fn iife_body(&self, declaration: NodeId) -> Option<NodeId> {
        if self.kind(declaration) == NodeKind::VariableDeclaration {
            if let Some(&initializer) = self.children(declaration).last() {
                if let Some(body) = self.invoked_wrapper_body(initializer) {
                    return Some(body);
                }
            }
        }
        let mut current = self.parent(declaration);
        while let Some(node) = current {
            if self.kind(node) == NodeKind::FunctionExpression && self.is_invoked(node) {
                return self.body_block(node);
            }
            current = self.parent(node);
        }
        None
    }

    /// Peel any parenthesized wrappers down to the inner expression.
    fn skip_parens(&self, mut id: NodeId) -> NodeId {
        while self.kind(id) == NodeKind::ParenthesizedExpression {
            match self.children(id).first() {
                Some(&inner) => id = inner,
                None => break,
            }
        }
        id
    }

    /// Treat `expr` as `(function() { ... }())` and return the function body.
    fn invoked_wrapper_body(&self, expr: NodeId) -> Option<NodeId> {
        let call = self.skip_parens(expr);
        if self.kind(call) != NodeKind::CallExpression {
            return None;
        }
        let &callee = self.children(call).first()?;
        let function = self.skip_parens(callee);
        if self.kind(function) != NodeKind::FunctionExpression {
            return None;
        }
        self.body_block(function)
    }

    fn body_block(&self, function: NodeId) -> Option<NodeId> {
        self.children(function)
            .iter()
            .copied()
            .find(|&child| self.kind(child) == NodeKind::Block)
    }

    /// Whether a function expression is called at its definition site,
    /// possibly through parentheses.
    fn is_invoked(&self, function: NodeId) -> bool {
        let mut node = function;
        loop {
            let parent = match self.parent(node) {
                Some(parent) => parent,
                None => return false,
            };
            match self.kind(parent) {
                NodeKind::ParenthesizedExpression => node = parent,
                NodeKind::CallExpression => return self.children(parent).first() == Some(&node),
                _ => return false,
            }
        }
    }
}

/// One compiled module: absolute path, immutable source text and the
/// syntax tree over it. All edits are recorded against the text through a
/// patch buffer; the module itself is never mutated.
#[derive(Debug)]
pub struct ParsedModule {
    pub path: String,
    pub text: String,
    pub tree: SourceTree,
}

impl ParsedModule {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let tree = SourceTree::new(Span::new(0, text.len()));
        ParsedModule {
            path: path.into(),
            text,
            tree,
        }
    }

    /// The source text covered by a node's span.
    pub fn node_text(&self, id: NodeId) -> &str {
        let span = self.tree.span(id);
        &self.text[span.start..span.end]
    }

    /// A node's start extended backwards over the preceding whitespace
    /// run, mirroring the "full start" (start of leading trivia) that the
    /// legacy emitters separate statements with.
    pub fn full_start(&self, id: NodeId) -> usize {
        let bytes = self.text.as_bytes();
        let mut pos = self.tree.span(id).start;
        while pos > 0 && bytes[pos - 1].is_ascii_whitespace() {
            pos -= 1;
        }
        pos
    }
}
