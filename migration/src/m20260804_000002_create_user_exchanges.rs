use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserExchanges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserExchanges::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserExchanges::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserExchanges::ExchangeName)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserExchanges::Enabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_user_exchanges_user_id")
                    .from(UserExchanges::Table, UserExchanges::UserId)
                    .to(Users::Table, Users::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        // References the exchange's natural key, so renaming an exchange
        // propagates here via the update cascade
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_user_exchanges_exchange_name")
                    .from(UserExchanges::Table, UserExchanges::ExchangeName)
                    .to(Exchanges::Table, Exchanges::Name)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("pk_user_exchanges")
                    .table(UserExchanges::Table)
                    .col(UserExchanges::UserId)
                    .col(UserExchanges::ExchangeName)
                    .to_owned(),
            )
            .await?;

        // At most one subscription row per (user, exchange)
        manager
            .create_index(
                Index::create()
                    .name("unique_user_exchange")
                    .table(UserExchanges::Table)
                    .col(UserExchanges::UserId)
                    .col(UserExchanges::ExchangeName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserExchanges::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserExchanges {
    Table,
    Id,
    UserId,
    ExchangeName,
    Enabled,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Exchanges {
    Table,
    Name,
}
