//! Human-readable blob report.
//!
//! Sections, in order: header block, string table listing, structures
//! sorted by name. Each section writer appends to a `String` so callers can
//! flush what was produced before a later section fails.

use std::fmt::Write as _;

use crate::Colors;

use super::error::BlobError;
use super::header::Header;
use super::storage::Blob;
use super::strings::StringTable;
use super::structs::Structure;

/// Render the full report for a blob.
pub fn dump(blob: &Blob, colors: Colors) -> Result<String, BlobError> {
    let mut out = String::new();

    dump_header(&mut out, blob.header(), colors);
    dump_strings(&mut out, &blob.strings(), colors)?;

    let mut structures = blob.decode_structures()?;
    sort_structures(&mut structures);
    dump_structures(&mut out, &structures, colors);

    Ok(out)
}

/// Stable sort by the byte-wise order of structure names.
pub fn sort_structures(structures: &mut [Structure<'_>]) {
    structures.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
}

pub fn dump_header(out: &mut String, header: &Header, colors: Colors) {
    let c = &colors;

    writeln!(out, "{}Blob Header:{}", c.blue, c.reset).unwrap();
    writeln!(out, " coreVersion: {}", header.core_version).unwrap();
    writeln!(out, " sizeofBool: {}", header.sizeof_bool).unwrap();
    writeln!(out, " sizeofUDATA: {}", header.sizeof_udata).unwrap();
    writeln!(out, " bitfieldFormat: {}", header.bitfield_format).unwrap();
    writeln!(out, " structDataSize: {}", header.struct_data_size).unwrap();
    writeln!(out, " stringTableDataSize: {}", header.string_table_data_size).unwrap();
    writeln!(out, " structureCount: {}", header.structure_count).unwrap();
}

/// List the string table in table order.
///
/// Line format: `<index>: <hex offset> [<length>] <text>`. Entries before a
/// corrupt one are kept in `out`.
pub fn dump_strings(
    out: &mut String,
    strings: &StringTable<'_>,
    colors: Colors,
) -> Result<(), BlobError> {
    let c = &colors;

    writeln!(out, "\n{}== STRINGS =={}", c.blue, c.reset).unwrap();
    for entry in strings.entries() {
        let entry = entry?;
        let s = entry.string;
        writeln!(
            out,
            "{}{:5}: {:8x}{} [{}] {}{s}{}",
            c.dim,
            entry.index,
            s.offset(),
            c.reset,
            s.len(),
            c.green,
            c.reset
        )
        .unwrap();
    }
    Ok(())
}

/// List structures in the given order, each with its fields then constants.
pub fn dump_structures(out: &mut String, structures: &[Structure<'_>], colors: Colors) {
    let c = &colors;

    writeln!(out, "\n{}== STRUCTS =={}", c.blue, c.reset).unwrap();
    for st in structures {
        writeln!(out, "\nStruct name: {}{}{}", c.blue, st.name, c.reset).unwrap();
        match &st.super_name {
            Some(super_name) => writeln!(out, " superName: {super_name}").unwrap(),
            None => writeln!(out, " {}no superName{}", c.dim, c.reset).unwrap(),
        }
        writeln!(out, " sizeOf: {}", st.size).unwrap();
        writeln!(out, " fieldCount: {}", st.fields.len()).unwrap();
        writeln!(out, " constCount: {}", st.constants.len()).unwrap();

        for field in &st.fields {
            writeln!(out, " Field declaredName: {}", field.name).unwrap();
            writeln!(out, "  declaredType: {}", field.type_name).unwrap();
            writeln!(out, "  offset: {}", field.offset).unwrap();
        }

        for constant in &st.constants {
            writeln!(out, " Constant name: {}", constant.name).unwrap();
            writeln!(out, "  value: {}", constant.value).unwrap();
        }
    }
}
