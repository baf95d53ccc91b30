//! Deterministic cell formatters applied before any value enters a report
//! row. Invalid input is nulled out rather than surfaced as an error; dirty
//! upstream data is expected and must never abort a report run.

use super::domain::{FieldValue, RecordKind};

/// Numeric values render with exactly two decimal places; anything that is
/// not a number (or numeric text) becomes blank.
pub fn currency(value: Option<&FieldValue>) -> Option<String> {
    match value? {
        FieldValue::Number(amount) => Some(format!("{amount:.2}")),
        FieldValue::Text(text) => text.trim().parse::<f64>().ok().map(|amount| format!("{amount:.2}")),
        _ => None,
    }
}

/// Uppercase the first character, leaving the rest of the string unchanged.
pub fn capitalize_first_letter(value: Option<&FieldValue>) -> Option<String> {
    let text = value?.render()?;
    let mut chars = text.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().collect::<String>() + chars.as_str())
}

/// Join a multi-valued field with the Treasury portal's `;` delimiter.
/// Delimited text is normalized the same way so both shapes round-trip.
pub fn multiselect(value: Option<&FieldValue>) -> Option<String> {
    let joined = match value? {
        FieldValue::List(values) => values
            .iter()
            .filter_map(FieldValue::render)
            .map(|entry| entry.trim().to_string())
            .filter(|entry| !entry.is_empty())
            .collect::<Vec<_>>()
            .join(";"),
        FieldValue::Text(text) => text
            .split(';')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .collect::<Vec<_>>()
            .join(";"),
        _ => return None,
    };
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// Taxpayer identification number: nine digits, dashes tolerated on input.
pub fn tin(value: Option<&FieldValue>) -> Option<String> {
    let text = value?.render()?;
    let digits: String = text.chars().filter(|c| *c != '-').collect();
    fixed_digits(&digits, 9)
}

/// Five-digit ZIP code.
pub fn zip(value: Option<&FieldValue>) -> Option<String> {
    fixed_digits(&value?.render()?, 5)
}

/// Four-digit ZIP+4 suffix.
pub fn zip4(value: Option<&FieldValue>) -> Option<String> {
    fixed_digits(&value?.render()?, 4)
}

fn fixed_digits(text: &str, len: usize) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.len() == len && trimmed.chars().all(|c| c.is_ascii_digit()) {
        Some(trimmed.to_string())
    } else {
        None
    }
}

/// Treasury expenditure category group label for a project record kind.
pub fn ec_group(kind: RecordKind) -> Option<&'static str> {
    match kind {
        RecordKind::Ec1 => Some("1-Public Health"),
        RecordKind::Ec2 => Some("2-Negative Economic Impacts"),
        RecordKind::Ec3 => {
            Some("3-Public Health-Negative Economic Impact: Public Sector Capacity")
        }
        RecordKind::Ec4 => Some("4-Premium Pay"),
        RecordKind::Ec5 => Some("5-Infrastructure"),
        RecordKind::Ec7 => Some("7-Administrative"),
        _ => None,
    }
}
