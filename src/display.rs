//! Display and tooltip text for the mutant copies annotation
//!

use crate::mutant_copies::collection_estimate_mutant_copies;
use crate::mutation::{ClinicalDataIndex, MutationRecord};

/// Display value when mutant copies can't be computed
pub const UNAVAILABLE_DISPLAY_VALUE: &str = "NA";

/// Tooltip text when mutant copies can't be computed
pub const UNAVAILABLE_TOOL_TIP: &str = "Missing data values, mutant copies can not be computed";

/// True for total copy number values screened out before display
///
/// This matches only the upstream "unknown" markers: a missing value, the -1 sentinel, and
/// zero. Other values pass through, including negative values other than -1.
pub fn invalid_total_copy_number(value: Option<i64>) -> bool {
    matches!(value, None | Some(-1) | Some(0))
}

/// Mutant and total copy counts for the first record, when computable
///
/// Both presentation entry points derive from this one result so their outputs can never
/// disagree for the same inputs.
fn mutant_copies_over_total_copies(
    records: &[MutationRecord],
    clinical_data_index: Option<&ClinicalDataIndex>,
) -> Option<(i64, i64)> {
    let record = records.first()?;
    if invalid_total_copy_number(record.total_copy_number) {
        return None;
    }
    let total_copy_number = record.total_copy_number?;
    let mutant_copies = collection_estimate_mutant_copies(records, clinical_data_index)?;
    Some((mutant_copies, total_copy_number))
}

/// Short display value for one mutation record, such as "2/4"
///
/// Only the first record of `records` is consulted. "NA" is returned whenever the mutant
/// copy estimate or the total copy number is unavailable.
pub fn get_display_value(
    records: &[MutationRecord],
    clinical_data_index: Option<&ClinicalDataIndex>,
) -> String {
    match mutant_copies_over_total_copies(records, clinical_data_index) {
        Some((mutant_copies, total_copy_number)) => {
            format!("{mutant_copies}/{total_copy_number}")
        }
        None => UNAVAILABLE_DISPLAY_VALUE.to_string(),
    }
}

/// Tooltip sentence explaining the display value for one mutation record
pub fn get_mutant_copies_tool_tip(
    records: &[MutationRecord],
    clinical_data_index: Option<&ClinicalDataIndex>,
) -> String {
    match mutant_copies_over_total_copies(records, clinical_data_index) {
        Some((mutant_copies, total_copy_number)) => {
            format!("{mutant_copies} out of {total_copy_number} copies of this gene are mutated")
        }
        None => UNAVAILABLE_TOOL_TIP.to_string(),
    }
}
