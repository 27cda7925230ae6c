//! Repository contracts over the account and mission tables.
//!
//! Two small traits, one SQLite-backed implementation each. Every operation
//! is a single synchronous round trip on its own connection; any data-access
//! fault comes back as `Err` and is fatal to the caller — no retry here.

mod accounts;
mod missions;

pub use accounts::AccountStore;
pub use missions::MissionCatalog;

use anyhow::Result;

use crate::models::{Account, Mission};

/// Typed operations over the `account` table.
pub trait AccountRepo {
    /// Exact, case-sensitive match on the account name.
    fn find_by_name(&self, name: &str) -> Result<Option<Account>>;

    /// Exact match on `user_id`.
    fn find_by_id(&self, id: i64) -> Result<Option<Account>>;

    fn name_exists(&self, name: &str) -> Result<bool> {
        Ok(self.find_by_name(name)?.is_some())
    }

    fn id_exists(&self, id: i64) -> Result<bool> {
        Ok(self.find_by_id(id)?.is_some())
    }

    /// True iff the account exists and its stored password equals `password`
    /// byte for byte. The table holds plaintext passwords and this is a
    /// plain comparison, inherited from the schema's existing users.
    fn match_credentials(&self, name: &str, password: &str) -> Result<bool>;

    /// Insert a new record. The id on the input is ignored; the store
    /// assigns one. Name uniqueness is the caller's problem — check before
    /// calling, and mind that check-then-insert is not atomic across
    /// concurrent processes.
    fn create(&self, account: &Account) -> Result<()>;

    /// Unconditional update by id; zero rows affected when the id is absent.
    fn update_password(&self, id: i64, new_password: &str) -> Result<()>;

    /// Unconditional delete by id; no-op when the id is absent.
    fn delete(&self, id: i64) -> Result<()>;

    /// Full table scan. Ordering is whatever SQLite returns.
    fn list_all(&self) -> Result<Vec<Account>>;
}

/// Read-only queries over the `moon_mission` table.
pub trait MissionRepo {
    /// Full table scan. Ordering is whatever SQLite returns.
    fn list_all(&self) -> Result<Vec<Mission>>;

    /// Exact match on `mission_id`.
    fn find_by_id(&self, id: i64) -> Result<Option<Mission>>;

    /// Missions whose launch date falls in the given calendar year.
    /// 0 for a year with no missions, never an error.
    fn count_by_year(&self, year: i64) -> Result<i64>;
}
