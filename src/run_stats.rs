//! Track stats for the whole mutcopies run
//!

use std::fs::File;

use camino::Utf8Path;
use log::info;
use serde::{Deserialize, Serialize};
use unwrap::unwrap;

pub const RUN_STATS_FILENAME: &str = "run_stats.json";

#[derive(Default, Deserialize, Serialize)]
pub struct AnnotateRunStats {
    pub mutation_record_count: usize,

    /// Count of records annotated with a computable mutant copies estimate
    pub computed_record_count: usize,

    /// Count of records annotated with the "NA" fallback
    pub unavailable_record_count: usize,
}

/// Write run_stats structure out in json format
pub fn write_annotate_run_stats(output_dir: &Utf8Path, run_stats: &AnnotateRunStats) {
    let filename = output_dir.join(RUN_STATS_FILENAME);

    info!("Writing run statistics to file: '{filename}'");

    let f = unwrap!(
        File::create(&filename),
        "Unable to create run statistics json file: '{}'",
        filename
    );

    serde_json::to_writer_pretty(&f, &run_stats).unwrap();
}
