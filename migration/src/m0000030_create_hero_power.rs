use sea_orm_migration::prelude::*;

use crate::m0000010_create_hero::Hero;
use crate::m0000020_create_power::Power;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeroPower::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HeroPower::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HeroPower::HeroId).integer().not_null())
                    .col(ColumnDef::new(HeroPower::PowerId).integer().not_null())
                    .col(ColumnDef::new(HeroPower::Strength).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(HeroPower::Table, HeroPower::HeroId)
                            .to(Hero::Table, Hero::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(HeroPower::Table, HeroPower::PowerId)
                            .to(Power::Table, Power::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HeroPower::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HeroPower {
    Table,
    Id,
    // --
    HeroId,
    PowerId,
    Strength,
}
