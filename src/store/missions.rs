//! Read-only queries over the mission catalog.

use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension, Row};

use super::MissionRepo;
use crate::db::Database;
use crate::models::Mission;

/// Read-only access to the `moon_mission` table. The catalog is reference
/// data populated elsewhere; this store never writes to it.
pub struct MissionCatalog<'a> {
    db: &'a Database,
}

impl<'a> MissionCatalog<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }
}

fn map_mission(row: &Row<'_>) -> rusqlite::Result<Mission> {
    Ok(Mission {
        id: row.get("mission_id")?,
        spacecraft: row.get("spacecraft")?,
        launch_date: row.get("launch_date")?,
        carrier_rocket: row.get("carrier_rocket")?,
        operator: row.get("operator")?,
        mission_type: row.get("mission_type")?,
        outcome: row.get("outcome")?,
    })
}

impl MissionRepo for MissionCatalog<'_> {
    fn list_all(&self) -> Result<Vec<Mission>> {
        let conn = self.db.connection()?;
        let mut stmt = conn.prepare("select * from moon_mission")?;
        let missions = stmt
            .query_map([], map_mission)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to list missions")?;
        Ok(missions)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Mission>> {
        self.db
            .connection()?
            .query_row(
                "select * from moon_mission where mission_id = ?1",
                params![id],
                map_mission,
            )
            .optional()
            .context("Failed to query mission by id")
    }

    fn count_by_year(&self, year: i64) -> Result<i64> {
        self.db
            .connection()?
            .query_row(
                "select count(*) from moon_mission
                 where cast(strftime('%Y', launch_date) as integer) = ?1",
                params![year],
                |row| row.get(0),
            )
            .context("Failed to count missions by year")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_schema;
    use chrono::NaiveDate;

    fn test_db() -> Result<Database> {
        let db = Database::open_in_memory()?;
        init_schema(&db)?;
        Ok(db)
    }

    fn insert_mission(db: &Database, id: i64, spacecraft: &str, date: &str) -> Result<()> {
        db.connection()?.execute(
            "insert into moon_mission (mission_id, spacecraft, launch_date, carrier_rocket, operator, mission_type, outcome)
             values (?1, ?2, ?3, 'Saturn V', 'NASA', 'Crewed landing', 'Successful')",
            params![id, spacecraft, date],
        )?;
        Ok(())
    }

    #[test]
    fn test_empty_catalog() -> Result<()> {
        let db = test_db()?;
        let catalog = MissionCatalog::new(&db);

        assert!(catalog.list_all()?.is_empty());
        assert_eq!(catalog.find_by_id(1)?, None);
        assert_eq!(catalog.count_by_year(1969)?, 0);
        Ok(())
    }

    #[test]
    fn test_find_by_id_maps_all_columns() -> Result<()> {
        let db = test_db()?;
        insert_mission(&db, 6, "Apollo 11", "1969-07-16")?;
        let catalog = MissionCatalog::new(&db);

        let mission = catalog.find_by_id(6)?.unwrap();
        assert_eq!(mission.spacecraft, "Apollo 11");
        assert_eq!(
            mission.launch_date,
            NaiveDate::from_ymd_opt(1969, 7, 16).unwrap()
        );
        assert_eq!(mission.carrier_rocket, "Saturn V");
        assert_eq!(mission.operator, "NASA");
        assert_eq!(mission.mission_type, "Crewed landing");
        assert_eq!(mission.outcome, "Successful");
        Ok(())
    }

    #[test]
    fn test_count_by_year() -> Result<()> {
        let db = test_db()?;
        insert_mission(&db, 1, "Apollo 11", "1969-07-16")?;
        insert_mission(&db, 2, "Apollo 12", "1969-11-14")?;
        insert_mission(&db, 3, "Apollo 13", "1970-04-11")?;
        let catalog = MissionCatalog::new(&db);

        assert_eq!(catalog.count_by_year(1969)?, 2);
        assert_eq!(catalog.count_by_year(1970)?, 1);
        assert_eq!(catalog.count_by_year(1959)?, 0);
        Ok(())
    }

    #[test]
    fn test_list_all_returns_every_row() -> Result<()> {
        let db = test_db()?;
        insert_mission(&db, 1, "Apollo 11", "1969-07-16")?;
        insert_mission(&db, 2, "Apollo 12", "1969-11-14")?;
        let catalog = MissionCatalog::new(&db);

        assert_eq!(catalog.list_all()?.len(), 2);
        Ok(())
    }
}
