use anyhow::Result;
use clap::Parser;

use moonlog::config::Config;
use moonlog::db::{seed, Database};
use moonlog::session::Session;
use moonlog::store::{AccountStore, MissionCatalog};

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Operator console for a historical moon-mission catalog", long_about = None)]
struct Cli {
    /// Database connection URL (overrides APP_DB_URL)
    #[arg(long)]
    database: Option<String>,

    /// Database username (overrides APP_DB_USER)
    #[arg(long)]
    db_user: Option<String>,

    /// Database password (overrides APP_DB_PASS)
    #[arg(long)]
    db_pass: Option<String>,

    /// Seed the schema and sample data before starting (or DEV_MODE=true)
    #[arg(long)]
    dev: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.database, cli.db_user, cli.db_pass, cli.dev)?;

    let db = Database::open(&config.database_url)?;
    if config.dev_mode {
        seed::seed(&db)?;
        println!("✓ Development database seeded");
    }

    let accounts = AccountStore::new(&db);
    let missions = MissionCatalog::new(&db);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.run(&accounts, &missions)
}
