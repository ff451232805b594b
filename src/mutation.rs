//! Input record types for the mutation and clinical data tables
//!

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

use log::info;
use serde::Deserialize;
use unwrap::unwrap;

/// Clinical attribute id labeling a sample's FACETS tumor purity estimate
pub const FACETS_PURITY_ATTRIBUTE: &str = "FACETS_PURITY";

/// One variant call for one sample
///
/// Field names follow the upstream mutation API json shape
///
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationRecord {
    pub sample_id: String,

    /// Reference-allele read count at the variant locus in the tumor sample
    pub tumor_ref_count: u32,

    /// Alternate-allele read count at the variant locus in the tumor sample
    pub tumor_alt_count: u32,

    /// Total copy number called at the variant locus
    ///
    /// None reflects a json null from upstream. The upstream "unknown" sentinel value of -1 is
    /// carried through unchanged here and screened out at presentation time.
    pub total_copy_number: Option<i64>,
}

/// One (sample, attribute, value) triple from the clinical data table
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalDatum {
    pub sample_id: String,
    pub clinical_attribute_id: String,

    /// Attribute values are numeric strings for the attributes consulted here
    pub value: String,
}

/// Clinical data records grouped by sample id
pub type ClinicalDataIndex = HashMap<String, Vec<ClinicalDatum>>;

/// Read a json array of mutation records
pub fn read_mutation_records(filename: &str) -> Vec<MutationRecord> {
    info!("Reading mutation records from file: '{filename}'");

    let file = unwrap!(
        File::open(filename),
        "Unable to open mutation record json file: '{}'",
        filename
    );
    let reader = BufReader::new(file);
    unwrap!(
        serde_json::from_reader(reader),
        "Unable to parse mutation records from json file: '{}'",
        filename
    )
}

/// Read a json array of clinical data records and group it into a per-sample index
pub fn read_clinical_data_index(filename: &str) -> ClinicalDataIndex {
    info!("Reading clinical data from file: '{filename}'");

    let file = unwrap!(
        File::open(filename),
        "Unable to open clinical data json file: '{}'",
        filename
    );
    let reader = BufReader::new(file);
    let records: Vec<ClinicalDatum> = unwrap!(
        serde_json::from_reader(reader),
        "Unable to parse clinical data from json file: '{}'",
        filename
    );

    let mut index = ClinicalDataIndex::new();
    for record in records {
        index
            .entry(record.sample_id.clone())
            .or_default()
            .push(record);
    }
    index
}
