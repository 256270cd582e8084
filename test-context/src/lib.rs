#![allow(clippy::expect_used)]

pub mod call;

use herodex_common::db::Database;
use test_context::AsyncTestContext;

/// Test fixture providing a migrated, empty in-memory database.
pub struct HerodexContext {
    pub db: Database,
}

impl AsyncTestContext for HerodexContext {
    async fn setup() -> HerodexContext {
        let db = Database::for_test()
            .await
            .expect("initializing the test database");

        HerodexContext { db }
    }

    async fn teardown(self) {
        self.db.close().await.expect("closing the test database");
    }
}
