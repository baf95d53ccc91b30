//! Zip assembly for the report package.
//!
//! Entries are added in the fixed category-table order so two runs over the
//! same data produce structurally identical archives; the order carries no
//! meaning for the Treasury portal but keeps the output testable.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("failed to add archive entry '{name}': {source}")]
    Entry {
        name: String,
        source: zip::result::ZipError,
    },
    #[error("failed to write archive entry '{name}': {source}")]
    Write {
        name: String,
        source: std::io::Error,
    },
    #[error("failed to finalize archive: {0}")]
    Finish(#[from] zip::result::ZipError),
}

/// Collect named CSV entries into one immutable archive buffer. The buffer
/// is only produced once every entry has been written; a failure part-way
/// yields an error, never a partial archive.
pub fn build_archive(entries: &[(String, Vec<u8>)]) -> Result<Vec<u8>, ArchiveError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, bytes) in entries {
        let entry_name = format!("{name}.csv");
        writer
            .start_file(entry_name.clone(), options)
            .map_err(|source| ArchiveError::Entry {
                name: entry_name.clone(),
                source,
            })?;
        writer
            .write_all(bytes)
            .map_err(|source| ArchiveError::Write {
                name: entry_name,
                source,
            })?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}
