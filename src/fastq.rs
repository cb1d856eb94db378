use diesel::prelude::*;

use log::debug;

use crate::error::Result;
use crate::models::{FastqFile, NewFastqFile};
use crate::schema::fastq_file;

/// Persists an output-file metadata record. No parent validation happens at
/// this layer; the record stands alone.
pub fn create_fastq_file(
    conn: &mut SqliteConnection,
    fastq: &NewFastqFile,
) -> Result<FastqFile> {
    debug!("Add fastq file {}", fastq.filename);
    let created = diesel::insert_into(fastq_file::table)
        .values(fastq)
        .get_result(conn)?;

    Ok(created)
}
