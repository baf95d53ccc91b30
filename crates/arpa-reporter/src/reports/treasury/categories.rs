//! The single source of truth for the 19 Treasury bulk-upload categories.
//!
//! Each entry pairs a membership rule with the category's literal, ordered
//! column schema. Column order is the regulator contract; any change here
//! changes the produced files. Detailed EC codes are enumerated as literal
//! strings on purpose: the regulator's scheme is not numerically contiguous
//! ("5.1" and "5.10" are unrelated codes), so membership is exact string
//! match, never a numeric range.

use super::domain::RecordKind;

/// How one cell of a projected row is produced from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Reserved blank cell (every schema starts with one; a second appears
    /// where the regulator template reserves a column the platform does not
    /// populate).
    Blank,
    /// Expenditure category group label derived from the record kind.
    EcGroup,
    /// The detailed EC code extracted from the record subcategory.
    DetailedCode,
    /// Raw content field, rendered as-is.
    Field(&'static str),
    /// Content field through the currency formatter.
    Currency(&'static str),
    /// Currency with a fallback field consulted when the primary is absent.
    CurrencyFallback(&'static str, &'static str),
    /// Content field with its first letter uppercased.
    Capitalize(&'static str),
    /// Multi-valued content field joined with the portal delimiter.
    Multiselect(&'static str),
    /// Nine-digit taxpayer identification number.
    Tin(&'static str),
    /// Five-digit ZIP code.
    Zip(&'static str),
    /// Four-digit ZIP+4 suffix.
    Zip4(&'static str),
}

/// Which records feed a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    /// Project records whose detailed EC code is in the literal set.
    DetailedCodes(&'static [&'static str]),
    /// Every record of the given kind.
    Kind(RecordKind),
    /// Aggregate award rows, split on the payments-to-individuals sentinel.
    AwardsAggregate { payments_to_individuals: bool },
    /// Sourced from the subrecipient collaborator, not the record set.
    Subrecipient,
}

/// One bulk-upload file of the report package.
#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub name: &'static str,
    pub membership: Membership,
    pub columns: &'static [Column],
}

/// Dropdown value separating individual payments from other sub-awards.
pub const PAYMENTS_TO_INDIVIDUALS: &str = "Payments to Individuals";

/// Discriminant field on aggregate award rows.
pub const SUB_AWARD_TYPE_FIELD: &str = "Sub_Award_Type_Aggregates_SLFRF__c";

use Column::*;

/// All categories, in the fixed order entries are written to the archive.
pub const CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        name: "project111210BulkUpload",
        membership: Membership::DetailedCodes(&["1.11", "2.10"]),
        columns: &[
            Blank,
            EcGroup,
            DetailedCode,
            Field("Name"),
            Field("Project_Identification_Number__c"),
            Field("Completion_Status__c"),
            Field("Cancellation_Reason__c"),
            Field("Project_Start_Date__c"),
            Field("Project_End_Date__c"),
            Currency("Adopted_Budget__c"),
            Currency("Total_Obligations__c"),
            Currency("Total_Expenditures__c"),
            CurrencyFallback("Q3_2022_Obligations__c", "Current_Period_Obligations__c"),
            CurrencyFallback("Q3_2022_Expenditures__c", "Current_Period_Expenditures__c"),
            Capitalize("Does_Project_Include_Capital_Expenditure__c"),
            Currency("Total_Cost_Capital_Expenditure__c"),
            Field("Type_of_Capital_Expenditure__c"),
            Field("Type_of_Capital_Expenditure_Other__c"),
            Field("Capital_Expenditure_Justification__c"),
            Field("Project_Description__c"),
            Currency("Program_Income_Earned__c"),
            Currency("Program_Income_Expended__c"),
            Field("Primary_Project_Demographics__c"),
            Field("Primary_Project_Demographics_Explanation__c"),
            Field("Secondary_Project_Demographics__c"),
            Field("Secondary_Proj_Demographics_Explanation__c"),
            Field("Tertiary_Project_Demographics__c"),
            Field("Tertiary_Proj_Demographics_Explanation__c"),
            Field("Structure_Objectives_of_Asst_Programs__c"),
            Field("Recipient_Approach_Description__c"),
            Field("Number_Workers_Enrolled_Sectoral__c"),
            Field("Number_Workers_Competing_Sectoral__c"),
            Field("Number_People_Summer_Youth__c"),
            Currency("Prog_Income_Earned_After_12_31_24__c"),
            Currency("Total_Prog_Income_Obl_Post_Q4_2024__c"),
            Currency("Total_Prog_Income_Exp_Post_Q4_2024__c"),
        ],
    },
    CategoryDef {
        name: "project18_229233BulkUpload",
        membership: Membership::DetailedCodes(&["1.8", "2.29", "2.30", "2.31", "2.32", "2.33"]),
        columns: &[
            Blank,
            EcGroup,
            DetailedCode,
            Field("Name"),
            Field("Project_Identification_Number__c"),
            Field("Completion_Status__c"),
            Field("Cancellation_Reason__c"),
            Field("Project_Start_Date__c"),
            Field("Project_End_Date__c"),
            Currency("Adopted_Budget__c"),
            Currency("Total_Obligations__c"),
            Currency("Total_Expenditures__c"),
            CurrencyFallback("Q3_2022_Obligations__c", "Current_Period_Obligations__c"),
            CurrencyFallback("Q3_2022_Expenditures__c", "Current_Period_Expenditures__c"),
            Capitalize("Does_Project_Include_Capital_Expenditure__c"),
            Currency("Total_Cost_Capital_Expenditure__c"),
            Field("Type_of_Capital_Expenditure__c"),
            Field("Type_of_Capital_Expenditure_Other__c"),
            Field("Capital_Expenditure_Justification__c"),
            Field("Project_Description__c"),
            Currency("Program_Income_Earned__c"),
            Currency("Program_Income_Expended__c"),
            Field("Primary_Project_Demographics__c"),
            Field("Primary_Project_Demographics_Explanation__c"),
            Field("Secondary_Project_Demographics__c"),
            Field("Secondary_Proj_Demographics_Explanation__c"),
            Field("Tertiary_Project_Demographics__c"),
            Field("Tertiary_Proj_Demographics_Explanation__c"),
            Field("Structure_Objectives_of_Asst_Programs__c"),
            Field("Recipient_Approach_Description__c"),
            Field("Small_Businesses_Served__c"),
            Currency("Prog_Income_Earned_After_12_31_24__c"),
            Currency("Total_Prog_Income_Obl_Post_Q4_2024__c"),
            Currency("Total_Prog_Income_Exp_Post_Q4_2024__c"),
        ],
    },
    CategoryDef {
        name: "project19_234BulkUpload",
        membership: Membership::DetailedCodes(&["1.9", "2.34"]),
        columns: &[
            Blank,
            EcGroup,
            DetailedCode,
            Field("Name"),
            Field("Project_Identification_Number__c"),
            Field("Completion_Status__c"),
            Field("Cancellation_Reason__c"),
            Field("Project_Start_Date__c"),
            Field("Project_End_Date__c"),
            Currency("Adopted_Budget__c"),
            Currency("Total_Obligations__c"),
            Currency("Total_Expenditures__c"),
            CurrencyFallback("Q3_2022_Obligations__c", "Current_Period_Obligations__c"),
            CurrencyFallback("Q3_2022_Expenditures__c", "Current_Period_Expenditures__c"),
            Capitalize("Does_Project_Include_Capital_Expenditure__c"),
            Currency("Total_Cost_Capital_Expenditure__c"),
            Field("Type_of_Capital_Expenditure__c"),
            Field("Type_of_Capital_Expenditure_Other__c"),
            Field("Capital_Expenditure_Justification__c"),
            Field("Project_Description__c"),
            Currency("Program_Income_Earned__c"),
            Currency("Program_Income_Expended__c"),
            Field("Primary_Project_Demographics__c"),
            Field("Primary_Project_Demographics_Explanation__c"),
            Field("Secondary_Project_Demographics__c"),
            Field("Secondary_Proj_Demographics_Explanation__c"),
            Field("Tertiary_Project_Demographics__c"),
            Field("Tertiary_Proj_Demographics_Explanation__c"),
            Field("Structure_Objectives_of_Asst_Programs__c"),
            Field("Recipient_Approach_Description__c"),
            Field("Number_Non_Profits_Served__c"),
            Currency("Prog_Income_Earned_After_12_31_24__c"),
            Currency("Total_Prog_Income_Obl_Post_Q4_2024__c"),
            Currency("Total_Prog_Income_Exp_Post_Q4_2024__c"),
        ],
    },
    CategoryDef {
        name: "project211214BulkUpload",
        membership: Membership::DetailedCodes(&["2.11", "2.12", "2.13", "2.14"]),
        columns: &[
            Blank,
            EcGroup,
            DetailedCode,
            Field("Name"),
            Field("Project_Identification_Number__c"),
            Field("Completion_Status__c"),
            Field("Cancellation_Reason__c"),
            Field("Project_Start_Date__c"),
            Field("Project_End_Date__c"),
            Currency("Adopted_Budget__c"),
            Currency("Total_Obligations__c"),
            Currency("Total_Expenditures__c"),
            CurrencyFallback("Q3_2022_Obligations__c", "Current_Period_Obligations__c"),
            CurrencyFallback("Q3_2022_Expenditures__c", "Current_Period_Expenditures__c"),
            Capitalize("Does_Project_Include_Capital_Expenditure__c"),
            Currency("Total_Cost_Capital_Expenditure__c"),
            Field("Type_of_Capital_Expenditure__c"),
            Field("Type_of_Capital_Expenditure_Other__c"),
            Field("Capital_Expenditure_Justification__c"),
            Field("Project_Description__c"),
            Currency("Program_Income_Earned__c"),
            Currency("Program_Income_Expended__c"),
            Field("Primary_Project_Demographics__c"),
            Field("Primary_Project_Demographics_Explanation__c"),
            Field("Secondary_Project_Demographics__c"),
            Field("Secondary_Proj_Demographics_Explanation__c"),
            Field("Tertiary_Project_Demographics__c"),
            Field("Tertiary_Proj_Demographics_Explanation__c"),
            Field("Structure_Objectives_of_Asst_Programs__c"),
            Field("Recipient_Approach_Description__c"),
            Field("School_ID_or_District_ID__c"),
            Field("Number_Children_Served_Childcare__c"),
            Field("Number_Families_Served_Home_Visiting__c"),
            Currency("Prog_Income_Earned_After_12_31_24__c"),
            Currency("Total_Prog_Income_Obl_Post_Q4_2024__c"),
            Currency("Total_Prog_Income_Exp_Post_Q4_2024__c"),
        ],
    },
    CategoryDef {
        name: "project2128BulkUpload",
        membership: Membership::DetailedCodes(&[
            "2.1", "2.2", "2.3", "2.4", "2.5", "2.6", "2.7", "2.8",
        ]),
        columns: &[
            Blank,
            EcGroup,
            DetailedCode,
            Field("Name"),
            Field("Project_Identification_Number__c"),
            Field("Completion_Status__c"),
            Field("Cancellation_Reason__c"),
            Field("Project_Start_Date__c"),
            Field("Project_End_Date__c"),
            Currency("Adopted_Budget__c"),
            Currency("Total_Obligations__c"),
            Currency("Total_Expenditures__c"),
            CurrencyFallback("Q3_2022_Obligations__c", "Current_Period_Obligations__c"),
            CurrencyFallback("Q3_2022_Expenditures__c", "Current_Period_Expenditures__c"),
            Capitalize("Does_Project_Include_Capital_Expenditure__c"),
            Currency("Total_Cost_Capital_Expenditure__c"),
            Field("Type_of_Capital_Expenditure__c"),
            Field("Type_of_Capital_Expenditure_Other__c"),
            Field("Capital_Expenditure_Justification__c"),
            Field("Project_Description__c"),
            Currency("Program_Income_Earned__c"),
            Currency("Program_Income_Expended__c"),
            Field("Primary_Project_Demographics__c"),
            Field("Primary_Project_Demographics_Explanation__c"),
            Field("Secondary_Project_Demographics__c"),
            Field("Secondary_Proj_Demographics_Explanation__c"),
            Field("Tertiary_Project_Demographics__c"),
            Field("Tertiary_Proj_Demographics_Explanation__c"),
            Field("Structure_Objectives_of_Asst_Programs__c"),
            Field("Recipient_Approach_Description__c"),
            Field("Individuals_Served__c"),
            Field("Number_Households_Eviction_Prevention__c"),
            Field("Number_Affordable_Housing_Units__c"),
            Currency("Prog_Income_Earned_After_12_31_24__c"),
            Currency("Total_Prog_Income_Obl_Post_Q4_2024__c"),
            Currency("Total_Prog_Income_Exp_Post_Q4_2024__c"),
        ],
    },
    CategoryDef {
        name: "project215218BulkUpload",
        membership: Membership::DetailedCodes(&["2.15", "2.16", "2.17", "2.18"]),
        columns: &[
            Blank,
            EcGroup,
            DetailedCode,
            Field("Name"),
            Field("Project_Identification_Number__c"),
            Field("Completion_Status__c"),
            Field("Cancellation_Reason__c"),
            Field("Project_Start_Date__c"),
            Field("Project_End_Date__c"),
            Currency("Adopted_Budget__c"),
            Currency("Total_Obligations__c"),
            Currency("Total_Expenditures__c"),
            CurrencyFallback("Q3_2022_Obligations__c", "Current_Period_Obligations__c"),
            CurrencyFallback("Q3_2022_Expenditures__c", "Current_Period_Expenditures__c"),
            Capitalize("Does_Project_Include_Capital_Expenditure__c"),
            Currency("Total_Cost_Capital_Expenditure__c"),
            Field("Type_of_Capital_Expenditure__c"),
            Field("Type_of_Capital_Expenditure_Other__c"),
            Field("Capital_Expenditure_Justification__c"),
            Field("Project_Description__c"),
            Currency("Program_Income_Earned__c"),
            Currency("Program_Income_Expended__c"),
            Field("Primary_Project_Demographics__c"),
            Field("Primary_Project_Demographics_Explanation__c"),
            Field("Secondary_Project_Demographics__c"),
            Field("Secondary_Proj_Demographics_Explanation__c"),
            Field("Tertiary_Project_Demographics__c"),
            Field("Tertiary_Proj_Demographics_Explanation__c"),
            Field("Structure_Objectives_of_Asst_Programs__c"),
            Field("Recipient_Approach_Description__c"),
            Field("Number_Households_Eviction_Prevention__c"),
            Field("Number_Affordable_Housing_Units__c"),
            Currency("Prog_Income_Earned_After_12_31_24__c"),
            Currency("Total_Prog_Income_Obl_Post_Q4_2024__c"),
            Currency("Total_Prog_Income_Exp_Post_Q4_2024__c"),
        ],
    },
    CategoryDef {
        name: "project224227BulkUpload",
        membership: Membership::DetailedCodes(&["2.24", "2.25", "2.26", "2.27"]),
        columns: &[
            Blank,
            EcGroup,
            DetailedCode,
            Field("Name"),
            Field("Project_Identification_Number__c"),
            Field("Completion_Status__c"),
            Field("Cancellation_Reason__c"),
            Field("Project_Start_Date__c"),
            Field("Project_End_Date__c"),
            Currency("Adopted_Budget__c"),
            Currency("Total_Obligations__c"),
            Currency("Total_Expenditures__c"),
            CurrencyFallback("Q3_2022_Obligations__c", "Current_Period_Obligations__c"),
            CurrencyFallback("Q3_2022_Expenditures__c", "Current_Period_Expenditures__c"),
            Capitalize("Does_Project_Include_Capital_Expenditure__c"),
            Currency("Total_Cost_Capital_Expenditure__c"),
            Field("Type_of_Capital_Expenditure__c"),
            Field("Type_of_Capital_Expenditure_Other__c"),
            Field("Capital_Expenditure_Justification__c"),
            Field("Project_Description__c"),
            Currency("Program_Income_Earned__c"),
            Currency("Program_Income_Expended__c"),
            Field("Primary_Project_Demographics__c"),
            Field("Primary_Project_Demographics_Explanation__c"),
            Field("Secondary_Project_Demographics__c"),
            Field("Secondary_Proj_Demographics_Explanation__c"),
            Field("Tertiary_Project_Demographics__c"),
            Field("Tertiary_Proj_Demographics_Explanation__c"),
            Field("Structure_Objectives_of_Asst_Programs__c"),
            Field("Recipient_Approach_Description__c"),
            Field("School_ID_or_District_ID__c"),
            Field("Number_Students_Tutoring_Programs__c"),
            Currency("Prog_Income_Earned_After_12_31_24__c"),
            Currency("Total_Prog_Income_Obl_Post_Q4_2024__c"),
            Currency("Total_Prog_Income_Exp_Post_Q4_2024__c"),
        ],
    },
    CategoryDef {
        name: "project236BulkUpload",
        membership: Membership::DetailedCodes(&["2.36"]),
        columns: &[
            Blank,
            EcGroup,
            DetailedCode,
            Field("Name"),
            Field("Project_Identification_Number__c"),
            Field("Completion_Status__c"),
            Field("Cancellation_Reason__c"),
            Field("Project_Start_Date__c"),
            Field("Project_End_Date__c"),
            Currency("Adopted_Budget__c"),
            Currency("Total_Obligations__c"),
            Currency("Total_Expenditures__c"),
            CurrencyFallback("Q3_2022_Obligations__c", "Current_Period_Obligations__c"),
            CurrencyFallback("Q3_2022_Expenditures__c", "Current_Period_Expenditures__c"),
            Capitalize("Does_Project_Include_Capital_Expenditure__c"),
            Currency("Total_Cost_Capital_Expenditure__c"),
            Field("Type_of_Capital_Expenditure__c"),
            Field("Type_of_Capital_Expenditure_Other__c"),
            Field("Capital_Expenditure_Justification__c"),
            Field("Project_Description__c"),
            Currency("Program_Income_Earned__c"),
            Currency("Program_Income_Expended__c"),
            Field("Primary_Project_Demographics__c"),
            Field("Primary_Project_Demographics_Explanation__c"),
            Field("Secondary_Project_Demographics__c"),
            Field("Secondary_Proj_Demographics_Explanation__c"),
            Field("Tertiary_Project_Demographics__c"),
            Field("Tertiary_Proj_Demographics_Explanation__c"),
            Field("Structure_Objectives_of_Asst_Programs__c"),
            Field("Recipient_Approach_Description__c"),
            Field("Industry_Experienced_8_Percent_Loss__c"),
            Currency("Prog_Income_Earned_After_12_31_24__c"),
            Currency("Total_Prog_Income_Obl_Post_Q4_2024__c"),
            Currency("Total_Prog_Income_Exp_Post_Q4_2024__c"),
        ],
    },
    CategoryDef {
        name: "project31BulkUpload",
        membership: Membership::DetailedCodes(&["3.1"]),
        columns: &[
            Blank,
            EcGroup,
            DetailedCode,
            Field("Name"),
            Field("Project_Identification_Number__c"),
            Field("Completion_Status__c"),
            Field("Cancellation_Reason__c"),
            Field("Project_Start_Date__c"),
            Field("Project_End_Date__c"),
            Currency("Adopted_Budget__c"),
            Currency("Total_Obligations__c"),
            Currency("Total_Expenditures__c"),
            CurrencyFallback("Q3_2022_Obligations__c", "Current_Period_Obligations__c"),
            CurrencyFallback("Q3_2022_Expenditures__c", "Current_Period_Expenditures__c"),
            Capitalize("Does_Project_Include_Capital_Expenditure__c"),
            Currency("Total_Cost_Capital_Expenditure__c"),
            Field("Type_of_Capital_Expenditure__c"),
            Field("Type_of_Capital_Expenditure_Other__c"),
            Field("Capital_Expenditure_Justification__c"),
            Field("Project_Description__c"),
            Currency("Program_Income_Earned__c"),
            Currency("Program_Income_Expended__c"),
            Field("Structure_Objectives_of_Asst_Programs__c"),
            Field("Recipient_Approach_Description__c"),
            Field("Payroll_Public_Health_Safety__c"),
            Currency("Prog_Income_Earned_After_12_31_24__c"),
            Currency("Total_Prog_Income_Obl_Post_Q4_2024__c"),
            Currency("Total_Prog_Income_Exp_Post_Q4_2024__c"),
        ],
    },
    CategoryDef {
        name: "project32BulkUpload",
        membership: Membership::DetailedCodes(&["3.2"]),
        columns: &[
            Blank,
            EcGroup,
            DetailedCode,
            Field("Name"),
            Field("Project_Identification_Number__c"),
            Field("Completion_Status__c"),
            Field("Cancellation_Reason__c"),
            Field("Project_Start_Date__c"),
            Field("Project_End_Date__c"),
            Currency("Adopted_Budget__c"),
            Currency("Total_Obligations__c"),
            Currency("Total_Expenditures__c"),
            CurrencyFallback("Q3_2022_Obligations__c", "Current_Period_Obligations__c"),
            CurrencyFallback("Q3_2022_Expenditures__c", "Current_Period_Expenditures__c"),
            Capitalize("Does_Project_Include_Capital_Expenditure__c"),
            Currency("Total_Cost_Capital_Expenditure__c"),
            Field("Type_of_Capital_Expenditure__c"),
            Field("Type_of_Capital_Expenditure_Other__c"),
            Field("Capital_Expenditure_Justification__c"),
            Field("Project_Description__c"),
            Currency("Program_Income_Earned__c"),
            Currency("Program_Income_Expended__c"),
            Field("Structure_Objectives_of_Asst_Programs__c"),
            Field("Recipient_Approach_Description__c"),
            Field("Number_of_FTEs_Rehired__c"),
            Currency("Prog_Income_Earned_After_12_31_24__c"),
            Currency("Total_Prog_Income_Obl_Post_Q4_2024__c"),
            Currency("Total_Prog_Income_Exp_Post_Q4_2024__c"),
        ],
    },
    CategoryDef {
        name: "project4142BulkUpload",
        membership: Membership::DetailedCodes(&["4.1", "4.2"]),
        columns: &[
            Blank,
            EcGroup,
            DetailedCode,
            Field("Name"),
            Field("Project_Identification_Number__c"),
            Field("Completion_Status__c"),
            Field("Cancellation_Reason__c"),
            Field("Project_Start_Date__c"),
            Field("Project_End_Date__c"),
            Currency("Adopted_Budget__c"),
            Currency("Total_Obligations__c"),
            Currency("Total_Expenditures__c"),
            CurrencyFallback("Q3_2022_Obligations__c", "Current_Period_Obligations__c"),
            CurrencyFallback("Q3_2022_Expenditures__c", "Current_Period_Expenditures__c"),
            Field("Project_Description__c"),
            Currency("Program_Income_Earned__c"),
            Currency("Program_Income_Expended__c"),
            Multiselect("Sectors_Critical_to_Health_Well_Being__c"),
            Field("Workers_Served__c"),
            Field("Premium_Pay_Narrative__c"),
            Field("Number_of_Workers_K_12__c"),
            Currency("Prog_Income_Earned_After_12_31_24__c"),
            Currency("Total_Prog_Income_Obl_Post_Q4_2024__c"),
            Currency("Total_Prog_Income_Exp_Post_Q4_2024__c"),
        ],
    },
    CategoryDef {
        name: "project51518BulkUpload",
        membership: Membership::DetailedCodes(&[
            "5.1", "5.2", "5.3", "5.4", "5.5", "5.6", "5.7", "5.8", "5.9", "5.10", "5.11",
            "5.12", "5.13", "5.14", "5.15", "5.16", "5.17", "5.18",
        ]),
        columns: &[
            Blank,
            EcGroup,
            DetailedCode,
            Field("Name"),
            Field("Project_Identification_Number__c"),
            Field("Completion_Status__c"),
            Field("Cancellation_Reason__c"),
            Field("Project_Start_Date__c"),
            Field("Project_End_Date__c"),
            Currency("Adopted_Budget__c"),
            Currency("Total_Obligations__c"),
            Currency("Total_Expenditures__c"),
            CurrencyFallback("Q3_2022_Obligations__c", "Current_Period_Obligations__c"),
            CurrencyFallback("Q3_2022_Expenditures__c", "Current_Period_Expenditures__c"),
            Field("Project_Description__c"),
            Currency("Program_Income_Earned__c"),
            Currency("Program_Income_Expended__c"),
            Field("Proj_Actual_Construction_Start_Date__c"),
            Field("Initiation_of_Operations_Date__c"),
            Field("Location__c"),
            Field("Location_Detail__c"),
            Field("National_Pollutant_Discharge_Number__c"),
            Field("Public_Water_System_PWS_ID_number__c"),
            Field("Median_Household_Income_Service_Area__c"),
            Currency("Lowest_Quintile_Income__c"),
            Currency("Prog_Income_Earned_After_12_31_24__c"),
            Currency("Total_Prog_Income_Obl_Post_Q4_2024__c"),
            Currency("Total_Prog_Income_Exp_Post_Q4_2024__c"),
        ],
    },
    CategoryDef {
        name: "project519521BulkUpload",
        membership: Membership::DetailedCodes(&["5.19", "5.20", "5.21"]),
        columns: &[
            Blank,
            EcGroup,
            DetailedCode,
            Field("Name"),
            Field("Project_Identification_Number__c"),
            Field("Completion_Status__c"),
            Field("Cancellation_Reason__c"),
            Field("Project_Start_Date__c"),
            Field("Project_End_Date__c"),
            Currency("Adopted_Budget__c"),
            Currency("Total_Obligations__c"),
            Currency("Total_Expenditures__c"),
            CurrencyFallback("Q3_2022_Obligations__c", "Current_Period_Obligations__c"),
            CurrencyFallback("Q3_2022_Expenditures__c", "Current_Period_Expenditures__c"),
            Field("Project_Description__c"),
            Currency("Program_Income_Earned__c"),
            Currency("Program_Income_Expended__c"),
            Field("Proj_Actual_Construction_Start_Date__c"),
            Field("Initiation_of_Operations_Date__c"),
            Capitalize("Is_project_designed_to_meet_100_mbps__c"),
            Field("Project_not_met_100_mbps_explanation__c"),
            Capitalize("Is_project_designed_to_exceed_100_mbps__c"),
            Capitalize("Is_project_designed_provide_hh_service__c"),
            Field("Confirm_Service_Provider__c"),
            Field("Technology_Type_Planned__c"),
            Field("Technology_Type_Planned_Other__c"),
            Field("Technology_Type_Actual__c"),
            Field("Technology_Type_Actual_Other__c"),
            Field("Total_Miles_of_Fiber_Deployed__c"),
            Field("Total_Miles_of_Fiber_Deployed_Actual__c"),
            Field("Planned_Funded_Locations_Served__c"),
            Field("Actual_Funded_Locations_Served__c"),
            Field("Planned_Funded_Locations_25_3_Below__c"),
            Field("Planned_Funded_Locations_Between_25_100__c"),
            Field("Planned_Funded_Locations_Minimum_100_100__c"),
            Field("Actual_Funded_Locations_Minimum_100_100__c"),
            Field("Planned_Funded_Locations_Minimum_100_20__c"),
            Field("Actual_Funded_Locations_Minimum_100_20__c"),
            Field("Planned_Sum_Speed_Types_Explanation__c"),
            Field("Actual_Sum_Speed_Types_Explanation__c"),
            Field("Planned_Funded_Locations_Residential__c"),
            Field("Actual_Funded_Locations_Residential__c"),
            Field("Planned_Funded_Locations_Total_Housing__c"),
            Field("Actual_Funded_Locations_Total_Housing__c"),
            Field("Planned_Funded_Locations_Business__c"),
            Field("Actual_Funded_Locations_Business__c"),
            Field("Planned_Funded_Locations_Community__c"),
            Field("Actual_Funded_Locations_Community__c"),
            Field("Planned_Funded_Locations_Explanation__c"),
            Field("Actual_Funded_Locations_Explanation__c"),
            Currency("Prog_Income_Earned_After_12_31_24__c"),
            Currency("Total_Prog_Income_Obl_Post_Q4_2024__c"),
            Currency("Total_Prog_Income_Exp_Post_Q4_2024__c"),
        ],
    },
    CategoryDef {
        name: "projectBaselineBulkUploadTemplate",
        membership: Membership::DetailedCodes(&[
            "1.1", "1.2", "1.3", "1.4", "1.5", "1.6", "1.7", "1.10", "1.12", "1.13", "1.14",
            "2.9", "2.19", "2.20", "2.21", "2.22", "2.23", "2.28", "2.35", "2.37", "3.3",
            "3.4", "3.5", "7.1", "7.2", "7.3",
        ]),
        columns: &[
            Blank,
            EcGroup,
            DetailedCode,
            Field("Name"),
            Field("Project_Identification_Number__c"),
            Field("Completion_Status__c"),
            Field("Cancellation_Reason__c"),
            Field("Project_Start_Date__c"),
            Field("Project_End_Date__c"),
            Currency("Adopted_Budget__c"),
            Currency("Total_Obligations__c"),
            Currency("Total_Expenditures__c"),
            CurrencyFallback("Q3_2022_Obligations__c", "Current_Period_Obligations__c"),
            CurrencyFallback("Q3_2022_Expenditures__c", "Current_Period_Expenditures__c"),
            Capitalize("Does_Project_Include_Capital_Expenditure__c"),
            Currency("Total_Cost_Capital_Expenditure__c"),
            Field("Type_of_Capital_Expenditure__c"),
            Field("Type_of_Capital_Expenditure_Other__c"),
            Field("Capital_Expenditure_Justification__c"),
            Field("Project_Description__c"),
            Currency("Program_Income_Earned__c"),
            Currency("Program_Income_Expended__c"),
            Field("Primary_Project_Demographics__c"),
            Field("Primary_Project_Demographics_Explanation__c"),
            Field("Secondary_Project_Demographics__c"),
            Field("Secondary_Proj_Demographics_Explanation__c"),
            Field("Tertiary_Project_Demographics__c"),
            Field("Tertiary_Proj_Demographics_Explanation__c"),
            Field("Structure_Objectives_of_Asst_Programs__c"),
            Field("Recipient_Approach_Description__c"),
            Field("Admin_Estimated_Expended__c"),
            Field("Admin_Actual_Expended__c"),
            Field("Admin_Expended_Description__c"),
            Field("Admin_Expended_Justification__c"),
            Currency("Prog_Income_Earned_After_12_31_24__c"),
            Currency("Total_Prog_Income_Obl_Post_Q4_2024__c"),
            Currency("Total_Prog_Income_Exp_Post_Q4_2024__c"),
        ],
    },
    CategoryDef {
        name: "expendituresGT50000BulkUpload",
        membership: Membership::Kind(RecordKind::Expenditures50k),
        columns: &[
            Blank,
            Field("Sub_Award_Lookup__c"),
            Field("Expenditure_Start__c"),
            Field("Expenditure_End__c"),
            Currency("Expenditure_Amount__c"),
        ],
    },
    CategoryDef {
        name: "expendituresLT50000BulkUpload",
        membership: Membership::AwardsAggregate {
            payments_to_individuals: false,
        },
        columns: &[
            Blank,
            Field("Project_Identification_Number__c"),
            Field(SUB_AWARD_TYPE_FIELD),
            Currency("Quarterly_Obligation_Amt_Aggregates__c"),
            Currency("Quarterly_Expenditure_Amt_Aggregates__c"),
        ],
    },
    CategoryDef {
        name: "paymentsIndividualsLT50000BulkUpload",
        membership: Membership::AwardsAggregate {
            payments_to_individuals: true,
        },
        columns: &[
            Blank,
            Field("Project_Identification_Number__c"),
            Currency("Quarterly_Obligation_Amt_Aggregates__c"),
            Currency("Quarterly_Expenditure_Amt_Aggregates__c"),
        ],
    },
    CategoryDef {
        name: "subawardBulkUpload",
        membership: Membership::Kind(RecordKind::Awards50k),
        columns: &[
            Blank,
            Field("Recipient_UEI__c"),
            Tin("Recipient_EIN__c"),
            Field("Project_Identification_Number__c"),
            Field("Award_No__c"),
            Field("Entity_Type_2__c"),
            Field("Award_Type__c"),
            Currency("Award_Amount__c"),
            Field("Award_Date__c"),
            Field("Primary_Sector__c"),
            Field("If_Other__c"),
            Field("Period_of_Performance_Start__c"),
            Field("Period_of_Performance_End__c"),
            Field("Place_of_Performance_Address_1__c"),
            Field("Place_of_Performance_Address_2__c"),
            Field("Place_of_Performance_Address_3__c"),
            Field("Place_of_Performance_City__c"),
            Field("State_Abbreviated__c"),
            Zip("Place_of_Performance_Zip__c"),
            Zip4("Place_of_Performance_Zip_4__c"),
            Field("Purpose_of_Funds__c"),
            Field("Description__c"),
            Field("Edited_Subaward_Amount_Explanation__c"),
            Field("Loan_Expiration_Date__c"),
            Field("IAA_Basic_Conditions__c"),
            Field("IAA_Requirements_Attestation__c"),
            Currency("Personnel_Exp_Exceeding_Estimate__c"),
            Currency("Personnel_Obligations_Pursuant_Estimate__c"),
            Currency("Contract_Expenditures_Exceeding_Estimate__c"),
            Currency("Contract_Obligations_Pursuant_Estimate__c"),
        ],
    },
    CategoryDef {
        name: "subRecipientBulkUpload",
        membership: Membership::Subrecipient,
        columns: &[
            Blank,
            Field("Unique_Entity_Identifier__c"),
            Tin("EIN__c"),
            // Treasury reserves a recipient profile id column the platform
            // does not track yet.
            Blank,
            Field("Name"),
            Multiselect("Entity_Type_2__c"),
            Field("POC_Email_Address__c"),
            Field("Address__c"),
            Field("Address_2__c"),
            Field("Address_3__c"),
            Field("City__c"),
            Field("State_Abbreviated__c"),
            Zip("Zip__c"),
            Zip4("Zip_4__c"),
            Field("Country__c"),
            Capitalize("Registered_in_Sam_gov__c"),
            Field("Federal_Funds_80_or_More_of_Revenue__c"),
            Field("Derives_25_Million_or_More_from_Federal__c"),
            Currency("Total_Compensation_for_Officers_Public__c"),
            Field("Officer_Name__c"),
            Currency("Officer_Total_Comp__c"),
            Field("Officer_2_Name__c"),
            Currency("Officer_2_Total_Comp__c"),
            Field("Officer_3_Name__c"),
            Currency("Officer_3_Total_Comp__c"),
            Field("Officer_4_Name__c"),
            Currency("Officer_4_Total_Comp__c"),
            Field("Officer_5_Name__c"),
            Currency("Officer_5_Total_Comp__c"),
        ],
    },
];
