//! Development-mode seeding.
//!
//! `--dev` (or `DEV_MODE=true`) points the console at a fresh database:
//! create the schema, load the embedded mission catalog, and add one
//! default operator account so login works. Seeding is idempotent — tables
//! that already hold rows are left alone.

use anyhow::{Context, Result};
use rusqlite::params;

use super::{init_schema, Database};
use crate::models::Mission;

/// Historical moon missions shipped with the binary.
const SEED_MISSIONS: &str = include_str!("seed_missions.json");

/// Default operator credentials for development databases.
/// Plaintext, like every other password in the `account` table.
const DEV_OPERATOR: (&str, &str, &str, &str, &str) =
    ("MisCon", "flyme2themoon", "Mission", "Control", "690716-0001");

/// Prepare a development database: schema, mission catalog, one operator.
pub fn seed(db: &Database) -> Result<()> {
    init_schema(db)?;
    seed_missions(db)?;
    seed_operator(db)?;
    Ok(())
}

fn seed_missions(db: &Database) -> Result<()> {
    let conn = db.connection()?;

    let count: i64 = conn.query_row("SELECT count(*) FROM moon_mission", [], |row| row.get(0))?;
    if count > 0 {
        return Ok(());
    }

    let missions: Vec<Mission> =
        serde_json::from_str(SEED_MISSIONS).context("Failed to parse embedded mission data")?;

    for m in &missions {
        conn.execute(
            "insert into moon_mission (mission_id, spacecraft, launch_date, carrier_rocket, operator, mission_type, outcome)
             values (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                m.id,
                m.spacecraft,
                m.launch_date,
                m.carrier_rocket,
                m.operator,
                m.mission_type,
                m.outcome
            ],
        )
        .with_context(|| format!("Failed to seed mission {}", m.spacecraft))?;
    }

    Ok(())
}

fn seed_operator(db: &Database) -> Result<()> {
    let conn = db.connection()?;

    let count: i64 = conn.query_row("SELECT count(*) FROM account", [], |row| row.get(0))?;
    if count > 0 {
        return Ok(());
    }

    let (name, password, first, last, ssn) = DEV_OPERATOR;
    conn.execute(
        "insert into account (name, password, first_name, last_name, ssn) values (?1, ?2, ?3, ?4, ?5)",
        params![name, password, first, last, ssn],
    )
    .context("Failed to seed default operator account")?;

    Ok(())
}
