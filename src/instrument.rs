use diesel::prelude::*;

use log::debug;

use crate::error::Result;
use crate::models::{
    InstrumentIllumina, InstrumentNanopore, NewInstrumentIllumina, NewInstrumentNanopore,
};
use crate::schema::{instrument_illumina, instrument_nanopore};

pub fn get_instruments_illumina(conn: &mut SqliteConnection) -> Result<Vec<InstrumentIllumina>> {
    let instruments = instrument_illumina::table
        .order(instrument_illumina::id.asc())
        .load(conn)?;

    Ok(instruments)
}

pub fn get_instruments_nanopore(conn: &mut SqliteConnection) -> Result<Vec<InstrumentNanopore>> {
    let instruments = instrument_nanopore::table
        .order(instrument_nanopore::id.asc())
        .load(conn)?;

    Ok(instruments)
}

/// Looks up an Illumina instrument by its external identifier.
pub fn get_instrument_illumina_by_id(
    conn: &mut SqliteConnection,
    instrument_id: &str,
) -> Result<Option<InstrumentIllumina>> {
    let instrument = instrument_illumina::table
        .filter(instrument_illumina::instrument_id.eq(instrument_id))
        .first(conn)
        .optional()?;

    Ok(instrument)
}

pub fn get_instrument_nanopore_by_id(
    conn: &mut SqliteConnection,
    instrument_id: &str,
) -> Result<Option<InstrumentNanopore>> {
    let instrument = instrument_nanopore::table
        .filter(instrument_nanopore::instrument_id.eq(instrument_id))
        .first(conn)
        .optional()?;

    Ok(instrument)
}

/// Persists a new Illumina instrument and returns it with the internal key
/// populated. Duplicate external identifiers are rejected by the storage
/// layer's unique constraint.
pub fn create_instrument_illumina(
    conn: &mut SqliteConnection,
    instrument: &NewInstrumentIllumina,
) -> Result<InstrumentIllumina> {
    debug!("Add instrument {}", instrument.instrument_id);
    let created = diesel::insert_into(instrument_illumina::table)
        .values(instrument)
        .get_result(conn)?;

    Ok(created)
}

pub fn create_instrument_nanopore(
    conn: &mut SqliteConnection,
    instrument: &NewInstrumentNanopore,
) -> Result<InstrumentNanopore> {
    debug!("Add instrument {}", instrument.instrument_id);
    let created = diesel::insert_into(instrument_nanopore::table)
        .values(instrument)
        .get_result(conn)?;

    Ok(created)
}
