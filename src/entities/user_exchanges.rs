//! SeaORM Entity for user/exchange subscriptions
//!
//! Junction between users and exchanges with a soft enable toggle. The
//! database enforces at most one row per (user_id, exchange_name), and both
//! foreign keys cascade updates and deletes from their parents.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "user_exchanges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i64,
    /// References exchanges.name, the natural key
    pub exchange_name: String,
    pub enabled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::exchanges::Entity",
        from = "Column::ExchangeName",
        to = "super::exchanges::Column::Name",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Exchanges,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::exchanges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exchanges.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
