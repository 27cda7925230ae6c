//! SQLite-backed account store.

use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension, Row};

use super::AccountRepo;
use crate::db::Database;
use crate::models::Account;

/// CRUD and credential matching over the `account` table.
pub struct AccountStore<'a> {
    db: &'a Database,
}

impl<'a> AccountStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }
}

fn map_account(row: &Row<'_>) -> rusqlite::Result<Account> {
    Ok(Account {
        id: row.get("user_id")?,
        name: row.get("name")?,
        password: row.get("password")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        ssn: row.get("ssn")?,
    })
}

impl AccountRepo for AccountStore<'_> {
    fn find_by_name(&self, name: &str) -> Result<Option<Account>> {
        self.db
            .connection()?
            .query_row(
                "select * from account where name = ?1",
                params![name],
                map_account,
            )
            .optional()
            .context("Failed to query account by name")
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Account>> {
        self.db
            .connection()?
            .query_row(
                "select * from account where user_id = ?1",
                params![id],
                map_account,
            )
            .optional()
            .context("Failed to query account by id")
    }

    fn match_credentials(&self, name: &str, password: &str) -> Result<bool> {
        // Plaintext comparison against the stored password, exactly as the
        // rest of the schema's users do it. No hashing, no constant-time
        // compare. A known liability of this system, not to be patched
        // quietly from one client.
        let account = self.find_by_name(name)?;
        Ok(account.is_some_and(|a| a.password == password))
    }

    fn create(&self, account: &Account) -> Result<()> {
        self.db
            .connection()?
            .execute(
                "insert into account (name, password, first_name, last_name, ssn) values (?1, ?2, ?3, ?4, ?5)",
                params![
                    account.name,
                    account.password,
                    account.first_name,
                    account.last_name,
                    account.ssn
                ],
            )
            .context("Failed to insert account")?;
        Ok(())
    }

    fn update_password(&self, id: i64, new_password: &str) -> Result<()> {
        self.db
            .connection()?
            .execute(
                "update account set password = ?1 where user_id = ?2",
                params![new_password, id],
            )
            .context("Failed to update password")?;
        Ok(())
    }

    fn delete(&self, id: i64) -> Result<()> {
        self.db
            .connection()?
            .execute("delete from account where user_id = ?1", params![id])
            .context("Failed to delete account")?;
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<Account>> {
        let conn = self.db.connection()?;
        let mut stmt = conn.prepare("select * from account")?;
        let accounts = stmt
            .query_map([], map_account)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to list accounts")?;
        Ok(accounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_schema;

    fn test_store(db: &Database) -> AccountStore<'_> {
        AccountStore::new(db)
    }

    fn test_db() -> Result<Database> {
        let db = Database::open_in_memory()?;
        init_schema(&db)?;
        Ok(db)
    }

    fn sample() -> Account {
        Account::new("JohDoe", "hunter22", "John", "Doe", "990101-1234")
    }

    #[test]
    fn test_create_assigns_id_and_round_trips() -> Result<()> {
        let db = test_db()?;
        let store = test_store(&db);

        store.create(&sample())?;

        let found = store.find_by_name("JohDoe")?.unwrap();
        assert!(found.id > 0);
        assert_eq!(found.first_name, "John");
        assert_eq!(found.ssn, "990101-1234");
        assert_eq!(store.find_by_id(found.id)?, Some(found));
        Ok(())
    }

    #[test]
    fn test_find_absent_returns_none() -> Result<()> {
        let db = test_db()?;
        let store = test_store(&db);

        assert_eq!(store.find_by_name("Nobody")?, None);
        assert_eq!(store.find_by_id(42)?, None);
        assert!(!store.name_exists("Nobody")?);
        assert!(!store.id_exists(42)?);
        Ok(())
    }

    #[test]
    fn test_match_credentials_exact_only() -> Result<()> {
        let db = test_db()?;
        let store = test_store(&db);
        store.create(&sample())?;

        assert!(store.match_credentials("JohDoe", "hunter22")?);
        assert!(!store.match_credentials("JohDoe", "hunter2")?);
        assert!(!store.match_credentials("JohDoe", "Hunter22")?);
        assert!(!store.match_credentials("johdoe", "hunter22")?);
        assert!(!store.match_credentials("Nobody", "hunter22")?);
        Ok(())
    }

    #[test]
    fn test_update_password_switches_match() -> Result<()> {
        let db = test_db()?;
        let store = test_store(&db);
        store.create(&sample())?;
        let id = store.find_by_name("JohDoe")?.unwrap().id;

        store.update_password(id, "orbit-77")?;

        assert!(store.match_credentials("JohDoe", "orbit-77")?);
        assert!(!store.match_credentials("JohDoe", "hunter22")?);
        Ok(())
    }

    #[test]
    fn test_update_password_absent_id_is_noop() -> Result<()> {
        let db = test_db()?;
        let store = test_store(&db);
        store.create(&sample())?;

        store.update_password(9999, "whatever99")?;

        assert!(store.match_credentials("JohDoe", "hunter22")?);
        Ok(())
    }

    #[test]
    fn test_delete_removes_record() -> Result<()> {
        let db = test_db()?;
        let store = test_store(&db);
        store.create(&sample())?;
        let id = store.find_by_name("JohDoe")?.unwrap().id;

        store.delete(id)?;

        assert!(!store.id_exists(id)?);
        assert_eq!(store.find_by_id(id)?, None);

        // Deleting again is a no-op, not an error.
        store.delete(id)?;
        Ok(())
    }

    #[test]
    fn test_list_all() -> Result<()> {
        let db = test_db()?;
        let store = test_store(&db);
        assert!(store.list_all()?.is_empty());

        store.create(&sample())?;
        store.create(&Account::new("JanRoe", "secret9", "Jane", "Roe", "850615-4321"))?;

        let mut names: Vec<String> = store.list_all()?.into_iter().map(|a| a.name).collect();
        names.sort();
        assert_eq!(names, vec!["JanRoe", "JohDoe"]);
        Ok(())
    }

    #[test]
    fn test_input_id_is_ignored_on_create() -> Result<()> {
        let db = test_db()?;
        let store = test_store(&db);

        let mut account = sample();
        account.id = 12345;
        store.create(&account)?;

        let found = store.find_by_name("JohDoe")?.unwrap();
        assert_ne!(found.id, 12345);
        Ok(())
    }
}
