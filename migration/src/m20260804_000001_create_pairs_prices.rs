use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Append-only tick log: no primary key and no uniqueness constraint.
        // Dedup, if needed, is the ingester's job.
        manager
            .create_table(
                Table::create()
                    .table(PairsPrices::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PairsPrices::Exchange).text().not_null())
                    .col(ColumnDef::new(PairsPrices::Symbol).text().not_null())
                    .col(ColumnDef::new(PairsPrices::Price).double().not_null())
                    .col(
                        ColumnDef::new(PairsPrices::Timestamp)
                            .custom(Alias::new("timestamptz(2)"))
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PairsPrices::CreatedAt)
                            .custom(Alias::new("timestamptz(2)"))
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .to_owned(),
            )
            .await?;

        // Serves "latest N for exchange+symbol" and time-range scans
        manager
            .create_index(
                Index::create()
                    .name("idx_pairs_prices_exchange_symbol_timestamp")
                    .table(PairsPrices::Table)
                    .col(PairsPrices::Exchange)
                    .col(PairsPrices::Symbol)
                    .col((PairsPrices::Timestamp, IndexOrder::Desc))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PairsPrices::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PairsPrices {
    Table,
    Exchange,
    Symbol,
    Price,
    Timestamp,
    CreatedAt,
}
