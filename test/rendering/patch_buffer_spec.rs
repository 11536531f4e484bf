//! Patch Buffer Tests
//!
//! Composition properties of the deferred edit batch: offset ordering,
//! the fixed same-offset tie-break, and byte-identity of untouched
//! regions.

use compat_compiler::rendering::PatchBuffer;

const SOURCE: &str = "import {A} from './a';\nvar one = 1;\nvar two = 2;\nexport {one};";

#[test]
fn regions_not_covered_by_any_edit_are_byte_identical() {
    let mut buffer = PatchBuffer::new(SOURCE);
    buffer.remove(23, 36); // "var one = 1;\n"
    let result = buffer.materialize();
    assert!(result.starts_with("import {A} from './a';\n"));
    assert!(result.ends_with("var two = 2;\nexport {one};"));
}

#[test]
fn edits_at_distinct_offsets_apply_in_offset_order() {
    let mut buffer = PatchBuffer::new(SOURCE);
    buffer.insert_before(49, "var three = 3;\n");
    buffer.insert_before(23, "var zero = 0;\n");
    assert_eq!(
        buffer.materialize(),
        "import {A} from './a';\nvar zero = 0;\nvar one = 1;\nvar two = 2;\nvar three = 3;\nexport {one};"
    );
}

#[test]
fn insert_before_wins_over_insert_after_at_a_shared_anchor_regardless_of_call_order() {
    let mut first = PatchBuffer::new(SOURCE);
    first.insert_before(23, "IMPORTS;");
    first.insert_after(23, "CONSTANTS;");

    let mut second = PatchBuffer::new(SOURCE);
    second.insert_after(23, "CONSTANTS;");
    second.insert_before(23, "IMPORTS;");

    let expected = "import {A} from './a';\nIMPORTS;CONSTANTS;var one = 1;\nvar two = 2;\nexport {one};";
    assert_eq!(first.materialize(), expected);
    assert_eq!(second.materialize(), expected);
}

#[test]
fn insertions_at_a_removal_boundary_survive_the_removal() {
    let mut buffer = PatchBuffer::new(SOURCE);
    buffer.remove(23, 36);
    buffer.insert_before(36, "var replacement = 0;\n");
    assert_eq!(
        buffer.materialize(),
        "import {A} from './a';\nvar replacement = 0;\nvar two = 2;\nexport {one};"
    );
}

#[test]
fn overwrite_composes_with_surrounding_insertions() {
    let mut buffer = PatchBuffer::new("var flag = off;");
    buffer.overwrite(11, 14, "on");
    buffer.append(" // switched");
    assert_eq!(buffer.materialize(), "var flag = on; // switched");
}
