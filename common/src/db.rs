use anyhow::Context;
use herodex_migration::{Migrator, MigratorTrait};
use sea_orm::{
    prelude::async_trait, ConnectOptions, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbBackend, DbErr, ExecResult, QueryResult, Statement, TransactionTrait,
};

/// Handle to the relational store.
///
/// Cheap to clone, passed explicitly into services instead of living in any
/// global state. Connecting always brings the schema up to date first.
#[derive(Clone, Debug)]
pub struct Database {
    db: DatabaseConnection,
}

impl Database {
    async fn connect(url: String, max_connections: u32) -> Result<Self, anyhow::Error> {
        log::info!("connect to {url}");

        let mut opt = ConnectOptions::new(url);
        opt.max_connections(max_connections);
        opt.sqlx_logging_level(log::LevelFilter::Trace);

        let db = sea_orm::Database::connect(opt)
            .await
            .context("connect to the database")?;

        Ok(Self { db })
    }

    /// Connect and apply any pending migrations.
    pub async fn new(database: &crate::config::Database) -> Result<Self, anyhow::Error> {
        let result = Self::connect(database.url(), 5).await?;

        log::debug!("applying migrations");
        Migrator::up(&result.db, None).await?;
        log::debug!("applied migrations");

        Ok(result)
    }

    /// Connect and re-create the schema from scratch, dropping any data.
    pub async fn bootstrap(database: &crate::config::Database) -> Result<Self, anyhow::Error> {
        log::warn!("bootstrapping database");

        let result = Self::connect(database.url(), 5).await?;
        Migrator::fresh(&result.db).await?;

        Ok(result)
    }

    /// An in-memory database for tests.
    ///
    /// Limited to a single pooled connection, as every new connection to
    /// `sqlite::memory:` would see its own empty database.
    pub async fn for_test() -> Result<Self, anyhow::Error> {
        let result = Self::connect("sqlite::memory:".into(), 1).await?;
        Migrator::up(&result.db, None).await?;

        Ok(result)
    }

    pub async fn begin(&self) -> Result<DatabaseTransaction, DbErr> {
        self.db.begin().await
    }

    pub async fn close(self) -> Result<(), DbErr> {
        self.db.close().await
    }
}

#[async_trait::async_trait]
impl ConnectionTrait for Database {
    fn get_database_backend(&self) -> DbBackend {
        self.db.get_database_backend()
    }

    async fn execute(&self, stmt: Statement) -> Result<ExecResult, DbErr> {
        self.db.execute(stmt).await
    }

    async fn execute_unprepared(&self, sql: &str) -> Result<ExecResult, DbErr> {
        self.db.execute_unprepared(sql).await
    }

    async fn query_one(&self, stmt: Statement) -> Result<Option<QueryResult>, DbErr> {
        self.db.query_one(stmt).await
    }

    async fn query_all(&self, stmt: Statement) -> Result<Vec<QueryResult>, DbErr> {
        self.db.query_all(stmt).await
    }
}
