use diesel::prelude::*;

use log::debug;

use crate::error::Result;
use crate::instrument::get_instrument_illumina_by_id;
use crate::models::{NewSequencingRunIllumina, SequencingRunFields, SequencingRunIllumina};
use crate::schema::sequencing_run_illumina;

pub fn get_sequencing_runs_illumina(
    conn: &mut SqliteConnection,
) -> Result<Vec<SequencingRunIllumina>> {
    let runs = sequencing_run_illumina::table
        .order(sequencing_run_illumina::id.asc())
        .load(conn)?;

    Ok(runs)
}

/// Returns a pagination window of runs owned by the given instrument.
///
/// `None` means the instrument itself is unknown; an instrument with no runs
/// yields `Some` of an empty vector, so the two cases stay distinguishable.
pub fn get_sequencing_runs_illumina_by_instrument_id(
    conn: &mut SqliteConnection,
    instrument_id: &str,
    skip: i64,
    limit: i64,
) -> Result<Option<Vec<SequencingRunIllumina>>> {
    let instrument = match get_instrument_illumina_by_id(conn, instrument_id)? {
        Some(instrument) => instrument,
        None => return Ok(None),
    };

    let runs = sequencing_run_illumina::table
        .filter(sequencing_run_illumina::instrument_id.eq(instrument.id))
        .order(sequencing_run_illumina::id.asc())
        .offset(skip)
        .limit(limit)
        .load(conn)?;

    Ok(Some(runs))
}

pub fn get_sequencing_run_illumina_by_id(
    conn: &mut SqliteConnection,
    run_id: &str,
) -> Result<Option<SequencingRunIllumina>> {
    let run = sequencing_run_illumina::table
        .filter(sequencing_run_illumina::sequencing_run_id.eq(run_id))
        .first(conn)
        .optional()?;

    Ok(run)
}

/// Persists a new run linked to its owning instrument. Returns `None` without
/// writing anything if the referenced instrument does not exist.
pub fn create_sequencing_run_illumina(
    conn: &mut SqliteConnection,
    run: &SequencingRunFields,
) -> Result<Option<SequencingRunIllumina>> {
    let instrument = match get_instrument_illumina_by_id(conn, &run.instrument_id)? {
        Some(instrument) => instrument,
        None => {
            debug!(
                "Unknown instrument {}, refusing run {}",
                run.instrument_id, run.sequencing_run_id
            );
            return Ok(None);
        }
    };

    debug!("Add run {}", run.sequencing_run_id);
    let new_run = NewSequencingRunIllumina {
        instrument_id: instrument.id,
        sequencing_run_id: run.sequencing_run_id.clone(),
        run_date: run.run_date,
        cluster_count: run.cluster_count,
        cluster_count_passed_filter: run.cluster_count_passed_filter,
        error_rate: run.error_rate,
        q30_percent: run.q30_percent,
    };

    let created = diesel::insert_into(sequencing_run_illumina::table)
        .values(&new_run)
        .get_result(conn)?;

    Ok(Some(created))
}

/// Deletes a run by its external identifier and returns the removed record,
/// or `None` if no such run existed. Runs that still own library records are
/// protected by the foreign key and the delete fails.
pub fn delete_sequencing_run_illumina(
    conn: &mut SqliteConnection,
    run_id: &str,
) -> Result<Option<SequencingRunIllumina>> {
    let deleted: Option<SequencingRunIllumina> = diesel::delete(
        sequencing_run_illumina::table
            .filter(sequencing_run_illumina::sequencing_run_id.eq(run_id)),
    )
    .get_result(conn)
    .optional()?;

    if let Some(run) = &deleted {
        debug!("Deleted run {}", run.sequencing_run_id);
    }

    Ok(deleted)
}
