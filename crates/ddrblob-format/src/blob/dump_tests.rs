//! Tests for the blob report.

use super::*;
use crate::Colors;

fn builder(order: ByteOrder) -> BlobBuilder {
    BlobBuilder::new(order).sizes(4, 8)
}

fn render(builder: &BlobBuilder) -> String {
    let blob = Blob::from_bytes(builder.build()).unwrap();
    dump(&blob, Colors::OFF).unwrap()
}

#[test]
fn dump_sorts_structures_by_name() {
    let mut b = builder(ByteOrder::Native);
    b.structure(StructBuilder::new("Zebra", 16))
        .structure(StructBuilder::new("Apple", 8));

    insta::assert_snapshot!(render(&b), @r"
    Blob Header:
     coreVersion: 1
     sizeofBool: 4
     sizeofUDATA: 8
     bitfieldFormat: 1
     structDataSize: 40
     stringTableDataSize: 16
     structureCount: 2

    == STRINGS ==
        1:        0 [5] Zebra
        2:        8 [5] Apple

    == STRUCTS ==

    Struct name: Apple
     no superName
     sizeOf: 8
     fieldCount: 0
     constCount: 0

    Struct name: Zebra
     no superName
     sizeOf: 16
     fieldCount: 0
     constCount: 0
    ");
}

#[test]
fn dump_fields_and_constants() {
    let mut b = builder(ByteOrder::Native);
    b.structure(
        StructBuilder::new("J9Class", 24)
            .super_name("J9Object")
            .field("romClass", "J9ROMClass*", 8)
            .constant("J9ClassFlags", 0x10),
    );

    insta::assert_snapshot!(render(&b), @r"
    Blob Header:
     coreVersion: 1
     sizeofBool: 4
     sizeofUDATA: 8
     bitfieldFormat: 1
     structDataSize: 44
     stringTableDataSize: 58
     structureCount: 1

    == STRINGS ==
        1:        0 [7] J9Class
        2:        a [8] J9Object
        3:       14 [8] romClass
        4:       1e [11] J9ROMClass*
        5:       2c [12] J9ClassFlags

    == STRUCTS ==

    Struct name: J9Class
     superName: J9Object
     sizeOf: 24
     fieldCount: 1
     constCount: 1
     Field declaredName: romClass
      declaredType: J9ROMClass*
      offset: 8
     Constant name: J9ClassFlags
      value: 16
    ");
}

#[test]
fn dump_is_independent_of_byte_order() {
    let build = |order| {
        let mut b = builder(order);
        b.structure(
            StructBuilder::new("Beta", 8)
                .field("x", "I32", 0)
                .field("y", "I32", 4)
                .constant("MAX", u64::MAX - 1),
        )
        .structure(StructBuilder::new("Alpha", 4).super_name("Beta"));
        render(&b)
    };

    let native = build(ByteOrder::Native);
    assert_eq!(native, build(ByteOrder::Swapped));
    assert!(native.contains(&format!("  value: {}\n", u64::MAX - 1)));
}

#[test]
fn sort_is_stable_for_equal_names() {
    let mut b = builder(ByteOrder::Native);
    b.structure(StructBuilder::new("Dup", 1))
        .structure(StructBuilder::new("Alpha", 2))
        .structure(StructBuilder::new("Dup", 3));
    let blob = Blob::from_bytes(b.build()).unwrap();

    let mut structures = blob.decode_structures().unwrap();
    sort_structures(&mut structures);

    let order: Vec<_> = structures
        .iter()
        .map(|st| (st.name.to_string(), st.size))
        .collect();
    assert_eq!(
        order,
        vec![
            ("Alpha".to_string(), 2),
            ("Dup".to_string(), 1),
            ("Dup".to_string(), 3),
        ]
    );
}

#[test]
fn sort_compares_bytes_not_prefixes() {
    let mut b = builder(ByteOrder::Native);
    b.structure(StructBuilder::new("J9ClassLoader", 0))
        .structure(StructBuilder::new("J9Class", 0))
        .structure(StructBuilder::new("J9class", 0));
    let blob = Blob::from_bytes(b.build()).unwrap();

    let mut structures = blob.decode_structures().unwrap();
    sort_structures(&mut structures);

    let names: Vec<_> = structures.iter().map(|st| st.name.to_string()).collect();
    assert_eq!(names, ["J9Class", "J9ClassLoader", "J9class"]);
}

#[test]
fn dump_strings_keeps_partial_output() {
    let mut b = builder(ByteOrder::Native);
    b.intern("first");
    b.intern("second");
    let mut bytes = b.build();
    // Inflate the second entry's length past the table end.
    let at = bytes.len() - 8;
    bytes[at..at + 2].copy_from_slice(&500u16.to_ne_bytes());
    let blob = Blob::from_bytes(bytes).unwrap();

    let mut out = String::new();
    let err = dump_strings(&mut out, &blob.strings(), Colors::OFF).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CorruptBlob);
    assert!(out.contains("[5] first"));
    assert!(!out.contains("second"));
}

#[test]
fn dump_fails_on_corrupt_structures() {
    let mut b = builder(ByteOrder::Native);
    b.structure(StructBuilder::new("S", 4));
    let mut bytes = b.build();
    let mut header = b.header();
    header.structure_count = 5;
    bytes[..HEADER_SIZE].copy_from_slice(&header.encode(ByteOrder::Native));
    let blob = Blob::from_bytes(bytes).unwrap();

    let err = dump(&blob, Colors::OFF).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CorruptBlob);
}

#[test]
fn dump_header_alone() {
    let header = builder(ByteOrder::Native).header();
    let mut out = String::new();
    dump_header(&mut out, &header, Colors::OFF);

    insta::assert_snapshot!(out, @r"
    Blob Header:
     coreVersion: 1
     sizeofBool: 4
     sizeofUDATA: 8
     bitfieldFormat: 1
     structDataSize: 0
     stringTableDataSize: 0
     structureCount: 0
    ");
}

#[test]
fn dump_with_colors() {
    let mut b = builder(ByteOrder::Native);
    b.structure(StructBuilder::new("Colored", 1));
    let blob = Blob::from_bytes(b.build()).unwrap();

    let out = dump(&blob, Colors::ON).unwrap();
    assert!(out.contains("\x1b[34m== STRINGS ==\x1b[0m"));
    assert!(out.contains("Struct name: \x1b[34mColored\x1b[0m"));
    assert!(out.contains("\x1b[32mColored\x1b[0m"));
}
