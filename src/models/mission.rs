use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One historical spaceflight record from the `moon_mission` table.
///
/// Reference data, pre-populated outside this tool and never mutated by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    /// `mission_id` column, externally assigned.
    pub id: i64,
    pub spacecraft: String,
    pub launch_date: NaiveDate,
    pub carrier_rocket: String,
    pub operator: String,
    pub mission_type: String,
    pub outcome: String,
}
