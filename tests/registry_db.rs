mod common;

use diesel::prelude::*;

use sequencing_runs_db::db;
use sequencing_runs_db::fastq::create_fastq_file;
use sequencing_runs_db::instrument::create_instrument_illumina;
use sequencing_runs_db::library::create_libraries_illumina;
use sequencing_runs_db::models::{NewFastqFile, NewProject, RunReference};
use sequencing_runs_db::project::create_project;
use sequencing_runs_db::schema::{
    fastq_file, instrument_illumina, project, sequenced_library_illumina, sequencing_run_illumina,
};
use sequencing_runs_db::sequencing_run::create_sequencing_run_illumina;
use sequencing_runs_db::Config;

use common::{library_fields, miseq, run_fields, setup};

#[test]
fn flush_empties_all_tables() {
    let mut conn = setup();

    create_instrument_illumina(&mut conn, &miseq("M00123")).expect("instrument");
    create_sequencing_run_illumina(
        &mut conn,
        &run_fields("M00123", "230512_M00123_0042_000000000-AGB1C"),
    )
    .expect("create run")
    .expect("run persisted");
    create_project(
        &mut conn,
        &NewProject {
            project_id: String::from("PRJ-1"),
        },
    )
    .expect("project");
    let run_ref = RunReference {
        instrument_id: String::from("M00123"),
        sequencing_run_id: String::from("230512_M00123_0042_000000000-AGB1C"),
    };
    create_libraries_illumina(&mut conn, &[library_fields("SAMPLE-01", Some("PRJ-1"))], &run_ref)
        .expect("batch");
    create_fastq_file(
        &mut conn,
        &NewFastqFile {
            read_type: String::from("R1"),
            filename: String::from("SAMPLE-01_S1_L001_R1_001.fastq.gz"),
            md5_checksum: String::from("5d41402abc4b2a76b9719d911017c592"),
            ..Default::default()
        },
    )
    .expect("fastq");

    db::flush(&mut conn).expect("flush");

    let instruments: i64 = instrument_illumina::table.count().get_result(&mut conn).expect("count");
    let runs: i64 = sequencing_run_illumina::table.count().get_result(&mut conn).expect("count");
    let projects: i64 = project::table.count().get_result(&mut conn).expect("count");
    let libraries: i64 = sequenced_library_illumina::table
        .count()
        .get_result(&mut conn)
        .expect("count");
    let fastqs: i64 = fastq_file::table.count().get_result(&mut conn).expect("count");

    assert_eq!(instruments, 0);
    assert_eq!(runs, 0);
    assert_eq!(projects, 0);
    assert_eq!(libraries, 0);
    assert_eq!(fastqs, 0);
}

#[test]
fn schema_bootstrap_is_idempotent() {
    let mut conn = setup();

    db::initialize_schema(&mut conn).expect("second init");
    create_instrument_illumina(&mut conn, &miseq("M00123")).expect("instrument survives");
}

#[test]
fn drop_then_reinitialize_yields_empty_registry() {
    let mut conn = setup();

    create_instrument_illumina(&mut conn, &miseq("M00123")).expect("instrument");
    db::drop_schema(&mut conn).expect("drop");
    db::initialize_schema(&mut conn).expect("init");

    let instruments: i64 = instrument_illumina::table.count().get_result(&mut conn).expect("count");
    assert_eq!(instruments, 0);
}

#[test]
fn config_reads_database_url_from_env() {
    std::env::set_var("DATABASE_URL", "registry.sqlite");
    let config = Config::from_env().expect("config");
    assert_eq!(config.database_url, "registry.sqlite");
}
