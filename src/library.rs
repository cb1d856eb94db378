use diesel::prelude::*;

use log::{debug, warn};

use crate::error::{RegistryError, Result};
use crate::instrument::get_instrument_illumina_by_id;
use crate::models::{
    LibraryFields, NewSequencedLibraryIllumina, RunReference, SequencedLibraryIllumina,
};
use crate::project::get_project_by_id;
use crate::schema::sequenced_library_illumina;
use crate::sequencing_run::get_sequencing_run_illumina_by_id;

/// Returns a pagination window of the libraries sequenced on the given run,
/// or `None` if the run itself is unknown.
pub fn get_libraries_by_sequencing_run_id(
    conn: &mut SqliteConnection,
    run_id: &str,
    skip: i64,
    limit: i64,
) -> Result<Option<Vec<SequencedLibraryIllumina>>> {
    let run = match get_sequencing_run_illumina_by_id(conn, run_id)? {
        Some(run) => run,
        None => return Ok(None),
    };

    let libraries = sequenced_library_illumina::table
        .filter(sequenced_library_illumina::sequencing_run_id.eq(run.id))
        .order(sequenced_library_illumina::id.asc())
        .offset(skip)
        .limit(limit)
        .load(conn)?;

    Ok(Some(libraries))
}

/// Returns a pagination window of the libraries associated with the given
/// project, or `None` if the project itself is unknown.
pub fn get_libraries_by_project_id(
    conn: &mut SqliteConnection,
    project_id: &str,
    skip: i64,
    limit: i64,
) -> Result<Option<Vec<SequencedLibraryIllumina>>> {
    let project = match get_project_by_id(conn, project_id)? {
        Some(project) => project,
        None => return Ok(None),
    };

    let libraries = sequenced_library_illumina::table
        .filter(sequenced_library_illumina::project_id.eq(project.id))
        .order(sequenced_library_illumina::id.asc())
        .offset(skip)
        .limit(limit)
        .load(conn)?;

    Ok(Some(libraries))
}

/// Persists a batch of sequenced libraries for one run.
///
/// The owning instrument and run are resolved independently by their external
/// identifiers; if either is missing, nothing is written and the result is
/// empty. The whole batch commits as one transaction. Project linkage is
/// best-effort: a library whose samplesheet project code matches no registered
/// project is stored with a null association.
pub fn create_libraries_illumina(
    conn: &mut SqliteConnection,
    libraries: &[LibraryFields],
    run: &RunReference,
) -> Result<Vec<SequencedLibraryIllumina>> {
    let instrument = get_instrument_illumina_by_id(conn, &run.instrument_id)?;
    let sequencing_run = get_sequencing_run_illumina_by_id(conn, &run.sequencing_run_id)?;

    let (instrument, sequencing_run) = match (instrument, sequencing_run) {
        (Some(instrument), Some(sequencing_run)) => (instrument, sequencing_run),
        _ => {
            warn!(
                "Refusing library batch: instrument {} or run {} not registered",
                run.instrument_id, run.sequencing_run_id
            );
            return Ok(Vec::new());
        }
    };

    debug!(
        "Add {} libraries for run {} on instrument {}",
        libraries.len(),
        sequencing_run.sequencing_run_id,
        instrument.instrument_id
    );

    let created = conn.transaction::<_, RegistryError, _>(|conn| {
        let mut created = Vec::with_capacity(libraries.len());
        for library in libraries {
            let project = match &library.samplesheet_project_id {
                Some(code) => get_project_by_id(conn, code)?,
                None => None,
            };

            let new_library = NewSequencedLibraryIllumina {
                library_id: library.library_id.clone(),
                sequencing_run_id: sequencing_run.id,
                project_id: project.map(|p| p.id),
                samplesheet_project_id: library.samplesheet_project_id.clone(),
                num_reads: library.num_reads,
                num_bases: library.num_bases,
                q30_rate: library.q30_rate,
            };

            let row = diesel::insert_into(sequenced_library_illumina::table)
                .values(&new_library)
                .get_result(conn)?;
            created.push(row);
        }
        Ok(created)
    })?;

    Ok(created)
}
