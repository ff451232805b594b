//! Variant allele fraction estimation
//!

#![allow(dead_code)]

use crate::mutation::MutationRecord;

/// Fraction of tumor reads supporting the alternate allele at the record's locus
///
/// A record with zero read depth yields NaN; the downstream estimator decides how a
/// non-finite fraction propagates.
///
pub fn variant_allele_fraction(record: &MutationRecord) -> f64 {
    let ref_reads = record.tumor_ref_count as f64;
    let alt_reads = record.tumor_alt_count as f64;
    alt_reads / (ref_reads + alt_reads)
}

/// Adapter for callers holding a record collection
///
/// Only the first record is consulted. An empty collection yields a fraction of 0.
pub fn collection_variant_allele_fraction(records: &[MutationRecord]) -> f64 {
    match records.first() {
        Some(record) => variant_allele_fraction(record),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_record(tumor_ref_count: u32, tumor_alt_count: u32) -> MutationRecord {
        MutationRecord {
            sample_id: "SAMPLE-01".to_string(),
            tumor_ref_count,
            tumor_alt_count,
            total_copy_number: Some(2),
        }
    }

    #[test]
    fn test_variant_allele_fraction() {
        let vaf = variant_allele_fraction(&get_test_record(10, 10));
        approx::assert_ulps_eq!(vaf, 0.5, max_ulps = 4);

        let vaf = variant_allele_fraction(&get_test_record(0, 5));
        approx::assert_ulps_eq!(vaf, 1.0, max_ulps = 4);

        let vaf = variant_allele_fraction(&get_test_record(30, 10));
        approx::assert_ulps_eq!(vaf, 0.25, max_ulps = 4);
    }

    #[test]
    fn test_variant_allele_fraction_zero_depth() {
        let vaf = variant_allele_fraction(&get_test_record(0, 0));
        assert!(vaf.is_nan());
    }

    #[test]
    fn test_collection_variant_allele_fraction() {
        let records = vec![get_test_record(10, 10), get_test_record(0, 5)];

        // Only the first record counts:
        let vaf = collection_variant_allele_fraction(&records);
        approx::assert_ulps_eq!(vaf, 0.5, max_ulps = 4);

        let vaf = collection_variant_allele_fraction(&[]);
        approx::assert_ulps_eq!(vaf, 0.0, max_ulps = 4);
    }
}
