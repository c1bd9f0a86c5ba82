use std::sync::Arc;

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// The unique index the market price upsert's ON CONFLICT clause targets.
/// Derived table schemas carry no indexes, so tests create it explicitly to
/// match the migrated schema.
pub fn market_price_type_region_index() -> IndexCreateStatement {
    Index::create()
        .name("uq_market_price_type_region")
        .table(entity::market_price::Entity)
        .col(entity::market_price::Column::TypeId)
        .col(entity::market_price::Column::RegionId)
        .unique()
        .to_owned()
}

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub state: TestAppState,
    pub session: Session,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            state: TestAppState { db },
            session,
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    pub async fn with_indexes(&self, stmts: Vec<IndexCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Every table the asset aggregation engine reads.
#[macro_export]
macro_rules! test_setup_with_asset_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Region),
                schema.create_table_from_entity(entity::prelude::Constellation),
                schema.create_table_from_entity(entity::prelude::SolarSystem),
                schema.create_table_from_entity(entity::prelude::Station),
                schema.create_table_from_entity(entity::prelude::EveCharacter),
                schema.create_table_from_entity(entity::prelude::EveCorporation),
                schema.create_table_from_entity(entity::prelude::CorporationDivision),
                schema.create_table_from_entity(entity::prelude::AssetItemType),
                schema.create_table_from_entity(entity::prelude::AssetFact),
                schema.create_table_from_entity(entity::prelude::AssetLocationName),
                schema.create_table_from_entity(entity::prelude::StockpileTarget),
                schema.create_table_from_entity(entity::prelude::MarketPrice),
            ];
            setup.with_tables(stmts).await?;
            setup
                .with_indexes(vec![$crate::setup::market_price_type_region_index()])
                .await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
