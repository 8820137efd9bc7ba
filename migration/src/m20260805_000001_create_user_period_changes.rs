use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserPeriodChanges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserPeriodChanges::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserPeriodChanges::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserPeriodChanges::Period)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserPeriodChanges::Change)
                            .double()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_user_period_changes_user_id")
                    .from(UserPeriodChanges::Table, UserPeriodChanges::UserId)
                    .to(Users::Table, Users::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        // Uniqueness spans the computed value: identical recomputations are
        // rejected, while a diverging result for the same (user, period)
        // accumulates as a new row. Readers take the latest by id.
        manager
            .create_index(
                Index::create()
                    .name("unique_user_period_changes")
                    .table(UserPeriodChanges::Table)
                    .col(UserPeriodChanges::UserId)
                    .col(UserPeriodChanges::Period)
                    .col(UserPeriodChanges::Change)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserPeriodChanges::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserPeriodChanges {
    Table,
    Id,
    UserId,
    Period,
    Change,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
