use std::path::PathBuf;

#[derive(clap::Args, Debug, Clone)]
#[command(next_help_heading = "Database")]
#[group(id = "database")]
pub struct Database {
    /// Path of the SQLite database file
    #[arg(id = "db-path", long, env = "DB_PATH", default_value = "herodex.db")]
    pub path: PathBuf,
}

impl Database {
    /// The `sqlx` connection URL for this database, creating the file on
    /// first connect.
    pub fn url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.path.display())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn url_from_path() {
        let config = Database {
            path: PathBuf::from("data/herodex.db"),
        };
        assert_eq!(config.url(), "sqlite://data/herodex.db?mode=rwc");
    }
}
