//! SeaORM Entity for user accounts
//!
//! Ids are assigned by the upstream identity provider, never generated here.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub name: String,
    pub is_admin: bool,
    pub is_enabled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_exchanges::Entity")]
    UserExchanges,
    #[sea_orm(has_many = "super::user_period_changes::Entity")]
    UserPeriodChanges,
}

impl Related<super::user_exchanges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserExchanges.def()
    }
}

impl Related<super::user_period_changes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserPeriodChanges.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
