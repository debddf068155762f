use rusqlite::Connection;

use crate::error::ProspectResult;

/// Initialize the database schema. Creates all tables if they don't exist.
pub fn initialize(conn: &Connection) -> ProspectResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS prospects (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            email_address TEXT NOT NULL,
            is_contacted INTEGER NOT NULL DEFAULT 0,
            creation_date TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS notification_settings (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS scheduled_reminders (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            subtitle TEXT NOT NULL,
            sound TEXT NOT NULL,
            trigger_hour INTEGER,
            trigger_minute INTEGER,
            repeats INTEGER NOT NULL DEFAULT 0,
            fire_at TEXT NOT NULL,
            delivered INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        ",
    )?;
    Ok(())
}

/// Create an in-memory connection for testing.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
