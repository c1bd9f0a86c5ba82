use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AssetItemType::Table)
                    .if_not_exists()
                    .col(big_integer(AssetItemType::TypeId).primary_key())
                    .col(string(AssetItemType::Name))
                    .col(double(AssetItemType::Volume))
                    .col(boolean(AssetItemType::IsContainer))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AssetItemType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AssetItemType {
    Table,
    TypeId,
    Name,
    Volume,
    IsContainer,
}
