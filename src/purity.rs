//! Tumor purity lookup from the clinical data index
//!

use crate::mutation::{ClinicalDataIndex, FACETS_PURITY_ATTRIBUTE};

/// Look up a sample's FACETS tumor purity estimate
///
/// The first FACETS_PURITY entry for the sample is used when more than one is present.
///
/// Returns None without error when no index is provided, the sample is missing from the
/// index, the sample has no FACETS_PURITY attribute, or the attribute value does not
/// parse as a number.
///
pub fn tumor_purity(
    sample_id: &str,
    clinical_data_index: Option<&ClinicalDataIndex>,
) -> Option<f64> {
    let sample_data = clinical_data_index?.get(sample_id)?;
    let purity_datum = sample_data
        .iter()
        .find(|x| x.clinical_attribute_id == FACETS_PURITY_ATTRIBUTE)?;
    purity_datum.value.parse::<f64>().ok()
}
