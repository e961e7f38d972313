//! The `ddrblob` report command.
//!
//! The header is written before the rest of the blob is validated, and each
//! later section is flushed as soon as it is rendered, so a corrupt blob
//! still shows everything that could be decoded ahead of the failure.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ddrblob_format::{
    Blob, BlobError, ByteStorage, Colors, Header, dump_header, dump_strings, dump_structures,
    sort_structures,
};

pub struct DumpArgs {
    pub blob_path: PathBuf,
    pub color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("cannot open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Blob(#[from] BlobError),
    #[error("failed to write report: {0}")]
    Output(io::Error),
}

pub fn run(args: DumpArgs) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = dump_blob(&args.blob_path, Colors::new(args.color), &mut out) {
        let _ = out.flush();
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Write the report for the blob at `path` to `out`.
pub fn dump_blob(path: &Path, colors: Colors, out: &mut impl Write) -> Result<(), DumpError> {
    let storage = ByteStorage::from_file(path).map_err(|source| DumpError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("read {} bytes from {}", storage.len(), path.display());

    let mut section = String::new();

    let decoded = Header::decode(&storage)?;
    dump_header(&mut section, &decoded.header, colors);
    flush_section(out, &mut section)?;

    let blob = Blob::from_decoded(storage, decoded)?;

    let strings = dump_strings(&mut section, &blob.strings(), colors);
    flush_section(out, &mut section)?;
    strings?;

    let mut structures = blob.decode_structures()?;
    sort_structures(&mut structures);
    dump_structures(&mut section, &structures, colors);
    flush_section(out, &mut section)?;

    Ok(())
}

fn flush_section(out: &mut impl Write, section: &mut String) -> Result<(), DumpError> {
    out.write_all(section.as_bytes())
        .and_then(|()| out.flush())
        .map_err(DumpError::Output)?;
    section.clear();
    Ok(())
}
