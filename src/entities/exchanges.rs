//! SeaORM Entity for onboarded exchanges
//!
//! The unique `name` is the natural key other tables reference; `id` is an
//! internal surrogate.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "exchanges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_exchanges::Entity")]
    UserExchanges,
}

impl Related<super::user_exchanges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserExchanges.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
