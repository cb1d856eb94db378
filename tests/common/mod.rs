#![allow(dead_code)]

use chrono::NaiveDate;
use diesel::SqliteConnection;

use sequencing_runs_db::db;
use sequencing_runs_db::models::{LibraryFields, NewInstrumentIllumina, SequencingRunFields};

/// Fresh in-memory registry with the schema bootstrapped.
pub fn setup() -> SqliteConnection {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut conn = db::establish_connection(":memory:").expect("connection");
    db::initialize_schema(&mut conn).expect("schema");
    conn
}

pub fn miseq(instrument_id: &str) -> NewInstrumentIllumina {
    NewInstrumentIllumina {
        instrument_id: instrument_id.to_string(),
        instrument_model: String::from("MiSeq"),
        status: Some(String::from("active")),
    }
}

pub fn run_fields(instrument_id: &str, run_id: &str) -> SequencingRunFields {
    SequencingRunFields {
        instrument_id: instrument_id.to_string(),
        sequencing_run_id: run_id.to_string(),
        run_date: NaiveDate::from_ymd_opt(2023, 5, 12).unwrap(),
        cluster_count: 21_000_000,
        cluster_count_passed_filter: 19_500_000,
        error_rate: 0.62,
        q30_percent: 93.4,
    }
}

pub fn library_fields(library_id: &str, project: Option<&str>) -> LibraryFields {
    LibraryFields {
        library_id: library_id.to_string(),
        samplesheet_project_id: project.map(String::from),
        num_reads: 1_200_000,
        num_bases: 360_000_000,
        q30_rate: 0.94,
    }
}
