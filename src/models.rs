use crate::schema::{
    fastq_file, instrument_illumina, instrument_nanopore, project, sequenced_library_illumina,
    sequencing_run_illumina,
};

use diesel::prelude::*;

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Queryable, Selectable, Debug, Serialize, Clone, PartialEq)]
#[diesel(table_name = instrument_illumina)]
pub struct InstrumentIllumina {
    pub id: i32,
    pub instrument_id: String,
    pub instrument_model: String,
    pub status: Option<String>,
}

#[derive(Insertable, Debug, Serialize, Clone, Default)]
#[diesel(table_name = instrument_illumina)]
pub struct NewInstrumentIllumina {
    pub instrument_id: String,
    pub instrument_model: String,
    pub status: Option<String>,
}

#[derive(Queryable, Selectable, Debug, Serialize, Clone, PartialEq)]
#[diesel(table_name = instrument_nanopore)]
pub struct InstrumentNanopore {
    pub id: i32,
    pub instrument_id: String,
    pub instrument_model: String,
    pub status: Option<String>,
}

#[derive(Insertable, Debug, Serialize, Clone, Default)]
#[diesel(table_name = instrument_nanopore)]
pub struct NewInstrumentNanopore {
    pub instrument_id: String,
    pub instrument_model: String,
    pub status: Option<String>,
}

#[derive(Queryable, Selectable, Debug, Serialize, Clone, PartialEq)]
#[diesel(table_name = sequencing_run_illumina)]
pub struct SequencingRunIllumina {
    pub id: i32,
    pub instrument_id: i32,
    pub sequencing_run_id: String,
    pub run_date: NaiveDate,
    pub cluster_count: i64,
    pub cluster_count_passed_filter: i64,
    pub error_rate: f64,
    pub q30_percent: f64,
}

#[derive(Insertable, Debug, Serialize, Clone)]
#[diesel(table_name = sequencing_run_illumina)]
pub struct NewSequencingRunIllumina {
    pub instrument_id: i32,
    pub sequencing_run_id: String,
    pub run_date: NaiveDate,
    pub cluster_count: i64,
    pub cluster_count_passed_filter: i64,
    pub error_rate: f64,
    pub q30_percent: f64,
}

/// Caller-facing run submission. The instrument is referenced by its external
/// identifier and resolved to an internal key at creation time.
#[derive(Debug, Clone)]
pub struct SequencingRunFields {
    pub instrument_id: String,
    pub sequencing_run_id: String,
    pub run_date: NaiveDate,
    pub cluster_count: i64,
    pub cluster_count_passed_filter: i64,
    pub error_rate: f64,
    pub q30_percent: f64,
}

#[derive(Queryable, Selectable, Debug, Serialize, Clone, PartialEq)]
#[diesel(table_name = project)]
pub struct Project {
    pub id: i32,
    pub project_id: String,
}

#[derive(Insertable, Debug, Serialize, Clone, Default)]
#[diesel(table_name = project)]
pub struct NewProject {
    pub project_id: String,
}

#[derive(Queryable, Selectable, Debug, Serialize, Clone, PartialEq)]
#[diesel(table_name = sequenced_library_illumina)]
pub struct SequencedLibraryIllumina {
    pub id: i32,
    pub library_id: String,
    pub sequencing_run_id: i32,
    pub project_id: Option<i32>,
    pub samplesheet_project_id: Option<String>,
    pub num_reads: i64,
    pub num_bases: i64,
    pub q30_rate: f64,
}

#[derive(Insertable, Debug, Serialize, Clone)]
#[diesel(table_name = sequenced_library_illumina)]
pub struct NewSequencedLibraryIllumina {
    pub library_id: String,
    pub sequencing_run_id: i32,
    pub project_id: Option<i32>,
    pub samplesheet_project_id: Option<String>,
    pub num_reads: i64,
    pub num_bases: i64,
    pub q30_rate: f64,
}

/// One library record of a batch submission. `samplesheet_project_id` carries
/// the samplesheet's project code; the matching `Project` row, if any, is
/// attached during creation.
#[derive(Debug, Clone, Default)]
pub struct LibraryFields {
    pub library_id: String,
    pub samplesheet_project_id: Option<String>,
    pub num_reads: i64,
    pub num_bases: i64,
    pub q30_rate: f64,
}

/// External identifiers of the instrument and run a library batch belongs to.
#[derive(Debug, Clone)]
pub struct RunReference {
    pub instrument_id: String,
    pub sequencing_run_id: String,
}

#[derive(Queryable, Selectable, Debug, Serialize, Clone, PartialEq)]
#[diesel(table_name = fastq_file)]
pub struct FastqFile {
    pub id: i32,
    pub read_type: String,
    pub filename: String,
    pub md5_checksum: String,
    pub size_bytes: i64,
    pub total_reads: i64,
    pub total_bases: i64,
    pub mean_read_length: f64,
    pub max_read_length: i32,
    pub min_read_length: i32,
    pub q30_rate: f64,
}

#[derive(Insertable, Debug, Serialize, Clone, Default)]
#[diesel(table_name = fastq_file)]
pub struct NewFastqFile {
    pub read_type: String,
    pub filename: String,
    pub md5_checksum: String,
    pub size_bytes: i64,
    pub total_reads: i64,
    pub total_bases: i64,
    pub mean_read_length: f64,
    pub max_read_length: i32,
    pub min_read_length: i32,
    pub q30_rate: f64,
}
