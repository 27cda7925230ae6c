use serde::{Deserialize, Serialize};

/// One operator credential record from the `account` table.
///
/// The backing schema stores the password in plaintext; this struct carries
/// it verbatim. Name uniqueness is a convention enforced by callers before
/// insert, not by the table itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// `user_id` column, assigned by the store on create. Ignored on input.
    pub id: i64,
    /// Account name, case-sensitive.
    pub name: String,
    /// Plaintext password, minimum 6 characters.
    pub password: String,
    /// Letters only, stored capitalized.
    pub first_name: String,
    /// Letters only, stored capitalized.
    pub last_name: String,
    /// `YYMMDD-XXXX`.
    pub ssn: String,
}

impl Account {
    /// Build a record for insertion. The id is a placeholder; the store
    /// assigns the real one.
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        ssn: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            password: password.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            ssn: ssn.into(),
        }
    }
}
