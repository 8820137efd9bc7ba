//! Access layer for the pairs_prices tick log
//!
//! Write path is append-only: every insert succeeds and is retained, with
//! no conflict handling. Readers that need exact-once semantics must
//! deduplicate by (exchange, symbol, timestamp) themselves. The supported
//! efficient reads are "latest N" and time-range scans per exchange+symbol,
//! both backed by the composite descending index.

use chrono::{DateTime, FixedOffset};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::entities::pairs_prices::{self, Entity as PairsPrices};
use crate::error::StoreError;

/// Record one price tick for an exchange/symbol pair.
pub async fn record_observation(
    db: &DatabaseConnection,
    exchange: &str,
    symbol: &str,
    price: f64,
    timestamp: DateTime<FixedOffset>,
) -> Result<pairs_prices::Model, StoreError> {
    let observation = pairs_prices::ActiveModel {
        exchange: Set(exchange.to_string()),
        symbol: Set(symbol.to_string()),
        price: Set(price),
        timestamp: Set(timestamp),
        ..Default::default()
    };

    let inserted = observation.insert(db).await?;
    tracing::debug!(
        "Recorded {}/{} price {} at {}",
        exchange,
        symbol,
        price,
        timestamp
    );
    Ok(inserted)
}

/// Most recent `limit` observations for an exchange/symbol pair,
/// newest first.
pub async fn latest_observations(
    db: &DatabaseConnection,
    exchange: &str,
    symbol: &str,
    limit: u64,
) -> Result<Vec<pairs_prices::Model>, StoreError> {
    let rows = PairsPrices::find()
        .filter(pairs_prices::Column::Exchange.eq(exchange))
        .filter(pairs_prices::Column::Symbol.eq(symbol))
        .order_by(pairs_prices::Column::Timestamp, Order::Desc)
        .limit(limit)
        .all(db)
        .await?;
    Ok(rows)
}

/// Observations for an exchange/symbol pair within [from, to], newest first.
pub async fn observations_between(
    db: &DatabaseConnection,
    exchange: &str,
    symbol: &str,
    from: DateTime<FixedOffset>,
    to: DateTime<FixedOffset>,
) -> Result<Vec<pairs_prices::Model>, StoreError> {
    let rows = PairsPrices::find()
        .filter(pairs_prices::Column::Exchange.eq(exchange))
        .filter(pairs_prices::Column::Symbol.eq(symbol))
        .filter(pairs_prices::Column::Timestamp.gte(from))
        .filter(pairs_prices::Column::Timestamp.lte(to))
        .order_by(pairs_prices::Column::Timestamp, Order::Desc)
        .all(db)
        .await?;
    Ok(rows)
}
