//! Template merge and CSV encoding for one bulk-upload file.
//!
//! The Treasury portal's parser mandates CRLF line endings and a UTF-8 byte
//! order mark, and it cannot cope with line breaks embedded in cells, so
//! breaks are replaced with a literal `" -- "` marker before encoding.

use super::categories::CategoryDef;
use super::projector::Row;

/// Marker substituted for any embedded line-break sequence inside a cell.
const LINE_BREAK_MARKER: &str = " -- ";

/// UTF-8 byte order mark prefixed to every produced file.
const BOM: &[u8] = "\u{feff}".as_bytes();

/// A width mismatch is a configuration defect (template or schema edited out
/// of step), never expected in correct operation; it aborts the whole report.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error(
        "{category}: row {row} has {found} columns, schema expects {expected}; \
         template and schema are out of step"
    )]
    WidthMismatch {
        category: String,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{category}: failed to encode csv: {source}")]
    Encode {
        category: String,
        source: csv::Error,
    },
}

/// Prepend the category's template header rows to the projected data rows
/// and encode the merged matrix. Every row must match the schema width.
pub fn serialize_sheet(
    def: &CategoryDef,
    template: &[Row],
    data: &[Row],
) -> Result<Vec<u8>, SheetError> {
    let expected = def.columns.len();
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    for (index, row) in template.iter().chain(data.iter()).enumerate() {
        if row.len() != expected {
            return Err(SheetError::WidthMismatch {
                category: def.name.to_string(),
                row: index,
                expected,
                found: row.len(),
            });
        }

        let cells: Vec<String> = row
            .iter()
            .map(|cell| scrub_line_breaks(cell.as_deref().unwrap_or("")))
            .collect();
        writer.write_record(&cells).map_err(|source| SheetError::Encode {
            category: def.name.to_string(),
            source,
        })?;
    }

    let encoded = writer
        .into_inner()
        .map_err(|err| SheetError::Encode {
            category: def.name.to_string(),
            source: err.into_error().into(),
        })?;

    let mut bytes = Vec::with_capacity(BOM.len() + encoded.len());
    bytes.extend_from_slice(BOM);
    bytes.extend_from_slice(&encoded);
    Ok(bytes)
}

fn scrub_line_breaks(cell: &str) -> String {
    if !cell.contains('\n') && !cell.contains('\r') {
        return cell.to_string();
    }

    let mut scrubbed = String::with_capacity(cell.len());
    let mut chars = cell.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                scrubbed.push_str(LINE_BREAK_MARKER);
            }
            '\n' => scrubbed.push_str(LINE_BREAK_MARKER),
            other => scrubbed.push(other),
        }
    }
    scrubbed
}
