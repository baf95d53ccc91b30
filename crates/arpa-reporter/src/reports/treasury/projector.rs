//! Classification and data-driven row projection.
//!
//! Projection is pure: no I/O, no panics on malformed input. Formatters null
//! out what they cannot use, so a dirty record still yields a row of the
//! right width.

use std::collections::BTreeMap;

use super::categories::{
    CategoryDef, Column, Membership, CATEGORIES, PAYMENTS_TO_INDIVIDUALS, SUB_AWARD_TYPE_FIELD,
};
use super::domain::{FieldValue, Record, RecordKind};
use super::format;

/// One projected row; `None` cells serialize as empty.
pub type Row = Vec<Option<String>>;

/// Find the category a record belongs to, if any. Records matching no
/// category are non-reportable and are dropped from the package, not
/// treated as errors.
pub fn classify(record: &Record) -> Option<&'static CategoryDef> {
    CATEGORIES.iter().find(|def| matches(def, record))
}

/// Membership test for one record against one category.
pub fn matches(def: &CategoryDef, record: &Record) -> bool {
    match def.membership {
        Membership::DetailedCodes(codes) => {
            record.kind.is_project()
                && record
                    .detailed_ec_code()
                    .map(|code| codes.contains(&code))
                    .unwrap_or(false)
        }
        Membership::Kind(kind) => record.kind == kind,
        Membership::AwardsAggregate {
            payments_to_individuals,
        } => {
            record.kind == RecordKind::Awards
                && is_payment_to_individuals(record) == payments_to_individuals
        }
        // subrecipients never come from the generic record set
        Membership::Subrecipient => false,
    }
}

fn is_payment_to_individuals(record: &Record) -> bool {
    matches!(
        record.field(SUB_AWARD_TYPE_FIELD),
        Some(FieldValue::Text(value)) if value == PAYMENTS_TO_INDIVIDUALS
    )
}

/// Project every eligible record into the category's fixed schema, in input
/// order. Returns an empty sequence when nothing matches; the caller omits
/// the category from the archive in that case.
pub fn project_records(def: &CategoryDef, records: &[Record]) -> Vec<Row> {
    records
        .iter()
        .filter(|record| matches(def, record))
        .map(|record| project_row(def, record))
        .collect()
}

fn project_row(def: &CategoryDef, record: &Record) -> Row {
    let code = record.detailed_ec_code();
    render_cells(def.columns, Some(record), code, &record.content)
}

/// Project one parsed subrecipient payload. Subrecipient content carries no
/// record kind or EC code, so those column kinds render blank.
pub fn project_subrecipient(
    def: &CategoryDef,
    content: &BTreeMap<String, FieldValue>,
) -> Row {
    render_cells(def.columns, None, None, content)
}

fn render_cells(
    columns: &[Column],
    record: Option<&Record>,
    code: Option<&str>,
    content: &BTreeMap<String, FieldValue>,
) -> Row {
    let field = |name: &str| content.get(name).filter(|value| !value.is_null());

    columns
        .iter()
        .map(|column| match column {
            Column::Blank => None,
            Column::EcGroup => record
                .and_then(|r| format::ec_group(r.kind))
                .map(str::to_string),
            Column::DetailedCode => code.map(str::to_string),
            Column::Field(name) => field(name).and_then(FieldValue::render),
            Column::Currency(name) => format::currency(field(name)),
            Column::CurrencyFallback(primary, fallback) => {
                format::currency(field(primary).or_else(|| field(fallback)))
            }
            Column::Capitalize(name) => format::capitalize_first_letter(field(name)),
            Column::Multiselect(name) => format::multiselect(field(name)),
            Column::Tin(name) => format::tin(field(name)),
            Column::Zip(name) => format::zip(field(name)),
            Column::Zip4(name) => format::zip4(field(name)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::treasury::domain::RecordKind;

    fn record(kind: RecordKind, subcategory: Option<&str>) -> Record {
        Record {
            kind,
            subcategory: subcategory.map(str::to_string),
            content: BTreeMap::new(),
        }
    }

    fn with_field(mut record: Record, name: &str, value: FieldValue) -> Record {
        record.content.insert(name.to_string(), value);
        record
    }

    fn category(name: &str) -> &'static CategoryDef {
        CATEGORIES
            .iter()
            .find(|def| def.name == name)
            .expect("known category")
    }

    #[test]
    fn project_record_classifies_by_exact_detailed_code() {
        let record = record(RecordKind::Ec3, Some("2.1 Something"));
        let def = classify(&record).expect("2.1 belongs to a category");
        assert_eq!(def.name, "project2128BulkUpload");
    }

    #[test]
    fn code_five_ten_routes_to_the_infrastructure_set() {
        let water = record(RecordKind::Ec5, Some("5.10 Drinking Water"));
        assert_eq!(classify(&water).map(|d| d.name), Some("project51518BulkUpload"));
        let broadband = record(RecordKind::Ec5, Some("5.19 Broadband"));
        assert_eq!(
            classify(&broadband).map(|d| d.name),
            Some("project519521BulkUpload")
        );
    }

    #[test]
    fn unmatched_code_matches_no_category() {
        let unknown = record(RecordKind::Ec2, Some("9.9 Unknown"));
        assert!(classify(&unknown).is_none());
        let uncoded = record(RecordKind::Ec2, None);
        assert!(classify(&uncoded).is_none());
    }

    #[test]
    fn awards_split_on_the_individuals_sentinel() {
        let individuals = with_field(
            record(RecordKind::Awards, None),
            SUB_AWARD_TYPE_FIELD,
            FieldValue::Text(PAYMENTS_TO_INDIVIDUALS.to_string()),
        );
        assert_eq!(
            classify(&individuals).map(|d| d.name),
            Some("paymentsIndividualsLT50000BulkUpload")
        );

        let aggregate = with_field(
            record(RecordKind::Awards, None),
            SUB_AWARD_TYPE_FIELD,
            FieldValue::Text("Aggregate of Awards Below $50,000".to_string()),
        );
        assert_eq!(
            classify(&aggregate).map(|d| d.name),
            Some("expendituresLT50000BulkUpload")
        );
    }

    #[test]
    fn record_belongs_to_at_most_one_category() {
        let samples = [
            record(RecordKind::Ec1, Some("1.11 Community Violence")),
            record(RecordKind::Ec5, Some("5.1 Clean Water")),
            record(RecordKind::Expenditures50k, None),
            record(RecordKind::Awards50k, None),
        ];
        for sample in &samples {
            let matching = CATEGORIES
                .iter()
                .filter(|def| matches(def, sample))
                .count();
            assert!(matching <= 1, "record matched {matching} categories");
        }
    }

    #[test]
    fn payments_to_individuals_projects_the_aggregate_row() {
        let mut record = record(RecordKind::Awards, None);
        record.content.insert(
            SUB_AWARD_TYPE_FIELD.to_string(),
            FieldValue::Text(PAYMENTS_TO_INDIVIDUALS.to_string()),
        );
        record.content.insert(
            "Project_Identification_Number__c".to_string(),
            FieldValue::Text("P1".to_string()),
        );
        record.content.insert(
            "Quarterly_Obligation_Amt_Aggregates__c".to_string(),
            FieldValue::Number(100.5),
        );
        record.content.insert(
            "Quarterly_Expenditure_Amt_Aggregates__c".to_string(),
            FieldValue::Number(50.0),
        );

        let def = category("paymentsIndividualsLT50000BulkUpload");
        let rows = project_records(def, std::slice::from_ref(&record));
        assert_eq!(
            rows,
            vec![vec![
                None,
                Some("P1".to_string()),
                Some("100.50".to_string()),
                Some("50.00".to_string()),
            ]]
        );

        // the same record must never leak into the sibling category
        let sibling = category("expendituresLT50000BulkUpload");
        assert!(project_records(sibling, std::slice::from_ref(&record)).is_empty());
    }

    #[test]
    fn projected_rows_match_the_schema_width() {
        let record = with_field(
            record(RecordKind::Ec2, Some("2.1 Household Assistance")),
            "Name",
            FieldValue::Text("Food Program".to_string()),
        );
        let def = category("project2128BulkUpload");
        let rows = project_records(def, std::slice::from_ref(&record));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), def.columns.len());
        assert_eq!(rows[0][0], None);
        assert_eq!(rows[0][1].as_deref(), Some("2-Negative Economic Impacts"));
        assert_eq!(rows[0][2].as_deref(), Some("2.1"));
        assert_eq!(rows[0][3].as_deref(), Some("Food Program"));
    }

    #[test]
    fn currency_fallback_consults_the_secondary_field() {
        let record = with_field(
            record(RecordKind::Ec2, Some("2.1 Household Assistance")),
            "Current_Period_Obligations__c",
            FieldValue::Number(12.0),
        );
        let def = category("project2128BulkUpload");
        let rows = project_records(def, std::slice::from_ref(&record));
        // column 12 is the Q3-2022-or-current-period obligations cell
        assert_eq!(rows[0][12].as_deref(), Some("12.00"));
    }

    #[test]
    fn zero_eligible_records_project_to_an_empty_sequence() {
        let def = category("project236BulkUpload");
        assert!(project_records(def, &[]).is_empty());
    }

    #[test]
    fn subrecipient_payload_projects_without_record_context() {
        let mut content = BTreeMap::new();
        content.insert(
            "Unique_Entity_Identifier__c".to_string(),
            FieldValue::Text("UEI123456789".to_string()),
        );
        content.insert("EIN__c".to_string(), FieldValue::Text("12-3456789".to_string()));
        content.insert("Name".to_string(), FieldValue::Text("Acme Housing".to_string()));

        let def = category("subRecipientBulkUpload");
        let row = project_subrecipient(def, &content);
        assert_eq!(row.len(), def.columns.len());
        assert_eq!(row[1].as_deref(), Some("UEI123456789"));
        assert_eq!(row[2].as_deref(), Some("123456789"));
        assert_eq!(row[3], None);
        assert_eq!(row[4].as_deref(), Some("Acme Housing"));
    }
}
