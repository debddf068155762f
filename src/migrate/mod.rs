use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::db::{prospect_repo, schema};
use crate::error::{ProspectError, ProspectResult};
use crate::model::Prospect;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub prospects: usize,
    pub contacted: usize,
    pub skipped: usize,
}

/// Imports a JSON array of prospects (camelCase keys) into a SQLite database.
pub fn import_json(json_path: &Path, db_path: &Path) -> ProspectResult<ImportStats> {
    let json_str = std::fs::read_to_string(json_path)?;
    let people: Vec<Prospect> = serde_json::from_str(&json_str)?;

    let conn = Connection::open(db_path)?;
    schema::initialize(&conn)?;

    import_prospects(&conn, &people)
}

/// Insert prospects in the given order. Ids already in the database are skipped.
pub fn import_prospects(conn: &Connection, people: &[Prospect]) -> ProspectResult<ImportStats> {
    let mut stats = ImportStats::default();
    for prospect in people {
        if prospect_repo::find_by_id(conn, prospect.id)?.is_some() {
            tracing::debug!(id = %prospect.id, "prospect already present, skipping");
            stats.skipped += 1;
            continue;
        }
        prospect_repo::insert(conn, prospect)?;
        stats.prospects += 1;
        if prospect.is_contacted {
            stats.contacted += 1;
        }
    }
    Ok(stats)
}

/// Writes every saved prospect to `json_path`. Returns how many were written.
/// The database must already exist; it is never created here.
pub fn export_json(db_path: &Path, json_path: &Path) -> ProspectResult<usize> {
    if !db_path.exists() {
        return Err(ProspectError::Other(format!(
            "Database file {} does not exist",
            db_path.display()
        )));
    }
    let conn = Connection::open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    schema::initialize(&conn)?;

    let people = prospect_repo::find_all(&conn)?;
    std::fs::write(json_path, export_prospects(&people)?)?;
    Ok(people.len())
}

pub fn export_prospects(people: &[Prospect]) -> ProspectResult<String> {
    Ok(serde_json::to_string_pretty(people)?)
}
