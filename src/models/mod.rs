//! Data records for the two tables the console works with.

mod account;
mod mission;

pub use account::Account;
pub use mission::Mission;
