//! Schema for the account and mission tables.
//!
//! Column names and types are fixed; other deployments of the same schema
//! read these tables too.

use anyhow::{Context, Result};

use super::Database;

const DDL: &str = "
CREATE TABLE IF NOT EXISTS account (
    user_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT NOT NULL,
    password   TEXT NOT NULL,
    first_name TEXT NOT NULL,
    last_name  TEXT NOT NULL,
    ssn        TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS moon_mission (
    mission_id     INTEGER PRIMARY KEY,
    spacecraft     TEXT NOT NULL,
    launch_date    DATE NOT NULL,
    carrier_rocket TEXT NOT NULL,
    operator       TEXT NOT NULL,
    mission_type   TEXT NOT NULL,
    outcome        TEXT NOT NULL
);
";

/// Create both tables if they don't exist yet.
pub fn init_schema(db: &Database) -> Result<()> {
    db.connection()?
        .execute_batch(DDL)
        .context("Failed to initialize schema")
}
