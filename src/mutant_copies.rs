//! Mutant copy count estimation
//!

use crate::allele_fraction::variant_allele_fraction;
use crate::mutation::{ClinicalDataIndex, MutationRecord};
use crate::purity::tumor_purity;

/// Estimate how many of the sample's gene copies at the record's locus carry the mutation
///
/// The raw estimate scales the variant allele fraction by tumor purity and total copy
/// number, rounds to the nearest integer (half away from zero), then clamps into
/// `[1, total_copy_number]`: a mutation that is observed at all implies at least one
/// mutant copy, and the mutant copy count can't exceed the total copy count.
///
/// Returns None when the sample's purity can't be resolved, the total copy number is
/// missing, or the allele fraction is non-finite (zero read depth).
///
pub fn estimate_mutant_copies(
    record: &MutationRecord,
    clinical_data_index: Option<&ClinicalDataIndex>,
) -> Option<i64> {
    let total_copy_number = record.total_copy_number?;
    let purity = tumor_purity(&record.sample_id, clinical_data_index)?;
    let variant_allele_fraction = variant_allele_fraction(record);
    if !variant_allele_fraction.is_finite() {
        return None;
    }

    let raw = (variant_allele_fraction / purity) * total_copy_number as f64;
    let mutant_copies = std::cmp::max(1, std::cmp::min(total_copy_number, raw.round() as i64));
    Some(mutant_copies)
}

/// Adapter for callers holding a record collection
///
/// Only the first record is consulted; an empty collection yields None.
pub fn collection_estimate_mutant_copies(
    records: &[MutationRecord],
    clinical_data_index: Option<&ClinicalDataIndex>,
) -> Option<i64> {
    estimate_mutant_copies(records.first()?, clinical_data_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutation::ClinicalDatum;

    fn get_test_record(
        tumor_ref_count: u32,
        tumor_alt_count: u32,
        total_copy_number: Option<i64>,
    ) -> MutationRecord {
        MutationRecord {
            sample_id: "SAMPLE-01".to_string(),
            tumor_ref_count,
            tumor_alt_count,
            total_copy_number,
        }
    }

    fn get_test_index(purity: &str) -> ClinicalDataIndex {
        let mut index = ClinicalDataIndex::new();
        index.insert(
            "SAMPLE-01".to_string(),
            vec![ClinicalDatum {
                sample_id: "SAMPLE-01".to_string(),
                clinical_attribute_id: "FACETS_PURITY".to_string(),
                value: purity.to_string(),
            }],
        );
        index
    }

    #[test]
    fn test_estimate_mutant_copies() {
        // vaf 0.5, purity 0.5, total CN 4 -> raw 4 -> 4
        let index = get_test_index("0.5");
        let record = get_test_record(10, 10, Some(4));
        assert_eq!(estimate_mutant_copies(&record, Some(&index)), Some(4));

        // vaf 0.25, purity 0.5, total CN 4 -> raw 2 -> 2
        let record = get_test_record(30, 10, Some(4));
        assert_eq!(estimate_mutant_copies(&record, Some(&index)), Some(2));
    }

    #[test]
    fn test_estimate_mutant_copies_clamps_to_total() {
        // vaf 1, purity 0.25, total CN 10 -> raw 40 -> clamped to 10
        let index = get_test_index("0.25");
        let record = get_test_record(0, 5, Some(10));
        assert_eq!(estimate_mutant_copies(&record, Some(&index)), Some(10));
    }

    #[test]
    fn test_estimate_mutant_copies_clamps_to_one() {
        // vaf 0.05, purity 1, total CN 4 -> raw 0.2 -> rounds to 0 -> clamped to 1
        let index = get_test_index("1.0");
        let record = get_test_record(95, 5, Some(4));
        assert_eq!(estimate_mutant_copies(&record, Some(&index)), Some(1));
    }

    #[test]
    fn test_estimate_mutant_copies_unresolved_purity() {
        let record = get_test_record(10, 10, Some(4));
        assert_eq!(estimate_mutant_copies(&record, None), None);
    }

    #[test]
    fn test_estimate_mutant_copies_zero_depth() {
        let index = get_test_index("0.5");
        let record = get_test_record(0, 0, Some(4));
        assert_eq!(estimate_mutant_copies(&record, Some(&index)), None);
    }

    #[test]
    fn test_estimate_mutant_copies_missing_total_copy_number() {
        let index = get_test_index("0.5");
        let record = get_test_record(10, 10, None);
        assert_eq!(estimate_mutant_copies(&record, Some(&index)), None);
    }

    #[test]
    fn test_collection_estimate_mutant_copies() {
        let index = get_test_index("0.5");
        let records = vec![
            get_test_record(10, 10, Some(4)),
            get_test_record(0, 5, Some(10)),
        ];
        assert_eq!(
            collection_estimate_mutant_copies(&records, Some(&index)),
            Some(4)
        );
        assert_eq!(collection_estimate_mutant_copies(&[], Some(&index)), None);
    }
}
