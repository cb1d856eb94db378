use diesel::connection::SimpleConnection;
use diesel::prelude::*;

use log::{error, info};

use crate::error::Result;

/// Opens a connection to the registry database. Foreign-key enforcement is
/// per-connection in SQLite, so the pragma is applied here rather than in the
/// schema.
pub fn establish_connection(url: &str) -> Result<SqliteConnection> {
    let mut conn = SqliteConnection::establish(url)?;
    conn.batch_execute("PRAGMA foreign_keys = ON;")?;
    Ok(conn)
}

/// Creates all registry tables if they do not exist yet.
pub fn initialize_schema(conn: &mut SqliteConnection) -> Result<()> {
    let init_sql = include_str!("../db/db-initialize.sql");
    conn.batch_execute(init_sql)?;
    info!("Registry schema initialized");
    Ok(())
}

/// Drops all registry tables.
pub fn drop_schema(conn: &mut SqliteConnection) -> Result<()> {
    let drop_sql = include_str!("../db/db-drop.sql");
    conn.batch_execute(drop_sql)?;
    Ok(())
}

/// Empties every table, children first so foreign keys stay satisfied.
pub fn flush(conn: &mut SqliteConnection) -> Result<()> {
    if let Err(e) = conn.transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::delete(crate::schema::fastq_file::table).execute(conn)?;
        diesel::delete(crate::schema::sequenced_library_illumina::table).execute(conn)?;
        diesel::delete(crate::schema::sequencing_run_illumina::table).execute(conn)?;
        diesel::delete(crate::schema::project::table).execute(conn)?;
        diesel::delete(crate::schema::instrument_illumina::table).execute(conn)?;
        diesel::delete(crate::schema::instrument_nanopore::table).execute(conn)?;
        Ok(())
    }) {
        error!("Could not flush db: {}", e);
        return Err(e.into());
    }
    Ok(())
}
