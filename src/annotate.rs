//! Annotate a mutation table with mutant copy estimates
//!

use std::fs::File;
use std::io::{BufWriter, Write};

use camino::Utf8Path;
use log::info;
use unwrap::unwrap;

use crate::cli;
use crate::display::{UNAVAILABLE_DISPLAY_VALUE, get_display_value, get_mutant_copies_tool_tip};
use crate::mutation::{ClinicalDataIndex, MutationRecord, read_clinical_data_index, read_mutation_records};
use crate::run_stats::{AnnotateRunStats, write_annotate_run_stats};

pub const ANNOTATION_FILENAME: &str = "mutant_copies.tsv";

/// Write the annotated mutation table in tsv format
///
/// Each input record is treated as its own single-record context, so no values are
/// aggregated across records even when several records share a sample id.
///
fn write_annotation_file(
    output_dir: &Utf8Path,
    mutation_records: &[MutationRecord],
    clinical_data_index: Option<&ClinicalDataIndex>,
    run_stats: &mut AnnotateRunStats,
) {
    let filename = output_dir.join(ANNOTATION_FILENAME);

    info!("Writing mutant copies annotation to file: '{filename}'");

    let f = unwrap!(
        File::create(&filename),
        "Unable to create mutant copies annotation file: '{}'",
        filename
    );
    let mut f = BufWriter::new(f);

    writeln!(f, "sample_id\tmutant_copies\tdescription").unwrap();

    for record in mutation_records {
        let context = std::slice::from_ref(record);
        let display_value = get_display_value(context, clinical_data_index);
        let tool_tip = get_mutant_copies_tool_tip(context, clinical_data_index);

        if display_value == UNAVAILABLE_DISPLAY_VALUE {
            run_stats.unavailable_record_count += 1;
        } else {
            run_stats.computed_record_count += 1;
        }

        writeln!(f, "{}\t{}\t{}", record.sample_id, display_value, tool_tip).unwrap();
    }
}

/// Run the full mutation table annotation step
///
pub fn run_annotate(settings: &cli::Settings) {
    let mutation_records = read_mutation_records(&settings.mutations_filename);
    let clinical_data_index = settings
        .clinical_data_filename
        .as_ref()
        .map(|x| read_clinical_data_index(x));

    let mut run_stats = AnnotateRunStats {
        mutation_record_count: mutation_records.len(),
        ..Default::default()
    };

    write_annotation_file(
        &settings.output_dir,
        &mutation_records,
        clinical_data_index.as_ref(),
        &mut run_stats,
    );

    write_annotate_run_stats(&settings.output_dir, &run_stats);

    info!(
        "Computed mutant copy estimates for {} of {} mutation records",
        run_stats.computed_record_count, run_stats.mutation_record_count
    );
}
