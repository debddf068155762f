use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::error::{ProspectError, ProspectResult};
use crate::model::{Id, Prospect};

pub fn insert(conn: &Connection, prospect: &Prospect) -> ProspectResult<()> {
    conn.execute(
        "INSERT INTO prospects (id, name, email_address, is_contacted, creation_date)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            prospect.id.value.to_string(),
            prospect.name,
            prospect.email_address,
            prospect.is_contacted as i32,
            prospect.creation_date.to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// Returns false if no row had that id.
pub fn set_contacted(conn: &Connection, id: Id<Prospect>, contacted: bool) -> ProspectResult<bool> {
    let changed = conn.execute(
        "UPDATE prospects SET is_contacted = ?1 WHERE id = ?2",
        params![contacted as i32, id.value.to_string()],
    )?;
    Ok(changed > 0)
}

pub fn find_by_id(conn: &Connection, id: Id<Prospect>) -> ProspectResult<Option<Prospect>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email_address, is_contacted, creation_date
         FROM prospects WHERE id = ?1",
    )?;

    let result = stmt.query_row(params![id.value.to_string()], |row| Ok(row_to_prospect(row)));

    match result {
        Ok(prospect) => Ok(Some(prospect?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// All prospects in the order they were first saved.
pub fn find_all(conn: &Connection) -> ProspectResult<Vec<Prospect>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email_address, is_contacted, creation_date
         FROM prospects ORDER BY rowid",
    )?;

    let people = stmt
        .query_map([], |row| Ok(row_to_prospect(row)))?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(people)
}

pub fn count(conn: &Connection) -> ProspectResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM prospects", [], |row| row.get(0))?;
    Ok(n as usize)
}

fn row_to_prospect(row: &rusqlite::Row) -> ProspectResult<Prospect> {
    let id_str: String = row.get(0)?;
    let created_str: String = row.get(4)?;

    Ok(Prospect {
        id: Id::parse(&id_str).map_err(|e| ProspectError::Other(format!("Invalid UUID: {}", e)))?,
        name: row.get(1)?,
        email_address: row.get(2)?,
        is_contacted: row.get::<_, i32>(3)? != 0,
        creation_date: DateTime::parse_from_rfc3339(&created_str)
            .map_err(|_| ProspectError::InvalidValue {
                field: "creation_date".into(),
                value: created_str.clone(),
            })?
            .with_timezone(&Utc),
    })
}
