use herodex_common::{config, db::Database};
use std::process::ExitCode;

#[derive(clap::Args, Debug)]
pub struct Run {
    #[command(subcommand)]
    pub(crate) command: Command,
    #[command(flatten)]
    pub(crate) database: config::Database,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Re-create the schema from scratch, dropping any existing data
    Create,
    /// Apply pending migrations
    Migrate,
    /// Load the sample fixtures
    Seed,
}

impl Run {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        use Command::*;
        match self.command {
            Create => {
                Database::bootstrap(&self.database).await?;
            }
            Migrate => {
                Database::new(&self.database).await?;
            }
            Seed => {
                let db = Database::new(&self.database).await?;
                crate::sample_data::sample_data(&db).await?;
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}
