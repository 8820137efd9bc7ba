//! SeaORM Entity for the pairs_prices tick log
//!
//! Append-only: the table carries no primary key or uniqueness constraint,
//! so the same (exchange, symbol, timestamp) may occur more than once.
//! The composite key below exists only because SeaORM requires one; the
//! database does not enforce it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pairs_prices")]
pub struct Model {
    /// Source market, e.g. "binance"
    #[sea_orm(primary_key, auto_increment = false)]
    pub exchange: String,
    /// Traded pair, e.g. "BTCUSD"
    #[sea_orm(primary_key, auto_increment = false)]
    pub symbol: String,
    pub price: f64,
    /// Observation time (centisecond precision)
    #[sea_orm(primary_key, auto_increment = false)]
    pub timestamp: DateTimeWithTimeZone,
    /// Insertion time, filled by the database
    pub created_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
