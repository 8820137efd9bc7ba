//! Access layer for per-user period-change records
//!
//! The unique index covers (user_id, period, change) — the computed value
//! included. Re-running the analytics job with an identical result is
//! rejected as a duplicate, while a diverging result lands as a second row
//! for the same (user, period). There are no replace-on-conflict semantics;
//! `latest_change` resolves by insertion order.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, Order,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::{prelude::*, user_period_changes};
use crate::error::StoreError;

/// Record a computed change for a user and period bucket.
///
/// Fails with `UniqueViolation` when the exact triple already exists.
pub async fn record_change(
    db: &DatabaseConnection,
    user_id: i64,
    period: i32,
    change: f64,
) -> Result<user_period_changes::Model, StoreError> {
    let record = user_period_changes::ActiveModel {
        user_id: Set(user_id),
        period: Set(period),
        change: Set(change),
        ..Default::default()
    };

    let inserted = record.insert(db).await?;
    tracing::debug!(
        "Recorded change {} for user {} period {}",
        change,
        user_id,
        period
    );
    Ok(inserted)
}

/// Most recently inserted change for a (user, period), by id.
pub async fn latest_change(
    db: &DatabaseConnection,
    user_id: i64,
    period: i32,
) -> Result<Option<user_period_changes::Model>, StoreError> {
    let row = UserPeriodChanges::find()
        .filter(user_period_changes::Column::UserId.eq(user_id))
        .filter(user_period_changes::Column::Period.eq(period))
        .order_by(user_period_changes::Column::Id, Order::Desc)
        .one(db)
        .await?;
    Ok(row)
}

/// Every recorded change for a user across all periods, oldest first.
/// Resolved at read time through the user's foreign-key relation.
pub async fn changes_for_user(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<user_period_changes::Model>, StoreError> {
    let user = Users::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("user {}", user_id)))?;

    let rows = user
        .find_related(UserPeriodChanges)
        .order_by(user_period_changes::Column::Id, Order::Asc)
        .all(db)
        .await?;
    Ok(rows)
}
