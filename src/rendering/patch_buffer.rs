//! Patch Buffer
//!
//! An ordered collection of pending text edits over one immutable source
//! string. Edits are recorded against offsets into the *original* text
//! and applied in a single materialization step, so callers never have to
//! re-derive node offsets after an edit.
//!
//! At distinct offsets, edits apply in offset order. At the same offset
//! the tie-break is fixed: insert-before edits, then insert-after edits,
//! then removals, each group in issue order. The import block manager
//! issues insert-before edits and the constant appender insert-after
//! edits at their shared anchor, so newly added imports always land
//! between the original import block and any constants block regardless
//! of call order.
//!
//! Overlapping removals are a caller precondition violation and are not
//! detected.

#[derive(Debug)]
enum EditKind {
    InsertBefore(String),
    InsertAfter(String),
    Remove { end: usize },
}

#[derive(Debug)]
struct Edit {
    offset: usize,
    sequence: usize,
    kind: EditKind,
}

impl Edit {
    /// Rank applied between edits sharing an anchor offset.
    fn tier(&self) -> u8 {
        match self.kind {
            EditKind::InsertBefore(_) => 0,
            EditKind::InsertAfter(_) => 1,
            EditKind::Remove { .. } => 2,
        }
    }
}

/// Pending edits over one module's text. Created per module, filled by
/// the rendering operations in any order, and consumed exactly once by
/// [`PatchBuffer::materialize`].
#[derive(Debug)]
pub struct PatchBuffer<'s> {
    source: &'s str,
    edits: Vec<Edit>,
}

impl<'s> PatchBuffer<'s> {
    pub fn new(source: &'s str) -> Self {
        PatchBuffer {
            source,
            edits: Vec::new(),
        }
    }

    /// The immutable text this buffer edits.
    pub fn source(&self) -> &'s str {
        self.source
    }

    fn push(&mut self, offset: usize, kind: EditKind) {
        let sequence = self.edits.len();
        self.edits.push(Edit {
            offset,
            sequence,
            kind,
        });
    }

    /// Insert `text` at `offset`, ahead of any insert-after content
    /// anchored there.
    pub fn insert_before(&mut self, offset: usize, text: impl Into<String>) {
        self.push(offset, EditKind::InsertBefore(text.into()));
    }

    /// Insert `text` at `offset`, behind any insert-before content
    /// anchored there.
    pub fn insert_after(&mut self, offset: usize, text: impl Into<String>) {
        self.push(offset, EditKind::InsertAfter(text.into()));
    }

    /// Drop the original text in `start..end` from the output.
    pub fn remove(&mut self, start: usize, end: usize) {
        self.push(start, EditKind::Remove { end });
    }

    /// Replace the original text in `start..end` with `text`.
    pub fn overwrite(&mut self, start: usize, end: usize, text: impl Into<String>) {
        self.insert_before(start, text);
        self.remove(start, end);
    }

    /// Insert `text` at the absolute end of the output.
    pub fn append(&mut self, text: impl Into<String>) {
        self.insert_after(self.source.len(), text);
    }

    /// Apply all recorded edits and produce the final text.
    pub fn materialize(self) -> String {
        let mut edits = self.edits;
        edits.sort_by_key(|edit| (edit.offset, edit.tier(), edit.sequence));

        let mut output = String::with_capacity(self.source.len());
        let mut cursor = 0usize;
        for edit in edits {
            if edit.offset > cursor {
                output.push_str(&self.source[cursor..edit.offset]);
                cursor = edit.offset;
            }
            match edit.kind {
                EditKind::InsertBefore(text) | EditKind::InsertAfter(text) => {
                    output.push_str(&text);
                }
                EditKind::Remove { end } => cursor = cursor.max(end),
            }
        }
        output.push_str(&self.source[cursor..]);
        output
    }
}
