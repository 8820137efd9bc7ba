//! Access layer for user/exchange subscriptions
//!
//! The unique (user_id, exchange_name) index means a blind insert of an
//! existing pair fails, so writes here go read-modify-write: check for the
//! row, then insert or update. A lost race still surfaces as
//! `UniqueViolation` for the caller to retry.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
};

use crate::entities::exchanges::{self, Entity as Exchanges};
use crate::entities::user_exchanges::{self, Entity as UserExchanges};
use crate::entities::users::Entity as Users;
use crate::error::StoreError;

/// Opt a user into an exchange. Idempotent: re-subscribing an existing pair
/// re-enables the row instead of inserting a duplicate.
pub async fn subscribe(
    db: &DatabaseConnection,
    user_id: i64,
    exchange_name: &str,
) -> Result<user_exchanges::Model, StoreError> {
    let existing = UserExchanges::find()
        .filter(user_exchanges::Column::UserId.eq(user_id))
        .filter(user_exchanges::Column::ExchangeName.eq(exchange_name))
        .one(db)
        .await?;

    match existing {
        Some(row) => {
            if row.enabled {
                return Ok(row);
            }
            let mut active: user_exchanges::ActiveModel = row.into();
            active.enabled = Set(true);
            let updated = active.update(db).await?;
            tracing::debug!("Re-enabled {}/{} subscription", user_id, exchange_name);
            Ok(updated)
        }
        None => {
            let subscription = user_exchanges::ActiveModel {
                user_id: Set(user_id),
                exchange_name: Set(exchange_name.to_string()),
                enabled: Set(true),
                ..Default::default()
            };
            let inserted = subscription.insert(db).await?;
            tracing::info!("Subscribed user {} to {}", user_id, exchange_name);
            Ok(inserted)
        }
    }
}

/// Soft toggle on an existing subscription row.
pub async fn set_enabled(
    db: &DatabaseConnection,
    user_id: i64,
    exchange_name: &str,
    enabled: bool,
) -> Result<user_exchanges::Model, StoreError> {
    let row = UserExchanges::find()
        .filter(user_exchanges::Column::UserId.eq(user_id))
        .filter(user_exchanges::Column::ExchangeName.eq(exchange_name))
        .one(db)
        .await?
        .ok_or_else(|| {
            StoreError::NotFound(format!("subscription {}/{}", user_id, exchange_name))
        })?;

    let mut active: user_exchanges::ActiveModel = row.into();
    active.enabled = Set(enabled);
    let updated = active.update(db).await?;
    tracing::debug!(
        "Subscription {}/{} enabled set to {}",
        user_id,
        exchange_name,
        enabled
    );
    Ok(updated)
}

/// Drop the subscription row entirely (as opposed to the soft toggle).
pub async fn unsubscribe(
    db: &DatabaseConnection,
    user_id: i64,
    exchange_name: &str,
) -> Result<(), StoreError> {
    UserExchanges::delete_many()
        .filter(user_exchanges::Column::UserId.eq(user_id))
        .filter(user_exchanges::Column::ExchangeName.eq(exchange_name))
        .exec(db)
        .await?;
    tracing::info!("Unsubscribed user {} from {}", user_id, exchange_name);
    Ok(())
}

/// All subscription rows for a user, enabled or not. Resolved at read time
/// through the user's foreign-key relation.
pub async fn exchanges_for_user(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<user_exchanges::Model>, StoreError> {
    let user = Users::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("user {}", user_id)))?;

    let rows = user.find_related(UserExchanges).all(db).await?;
    Ok(rows)
}

/// Subscription rows referencing an exchange, resolved through the
/// exchange's side of the junction.
pub async fn subscribers_of(
    db: &DatabaseConnection,
    exchange_name: &str,
) -> Result<Vec<user_exchanges::Model>, StoreError> {
    let exchange = Exchanges::find()
        .filter(exchanges::Column::Name.eq(exchange_name))
        .one(db)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("exchange {}", exchange_name)))?;

    let rows = exchange.find_related(UserExchanges).all(db).await?;
    Ok(rows)
}

/// Names of the exchanges a user currently has enabled.
pub async fn enabled_exchanges_for_user(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<String>, StoreError> {
    let rows = UserExchanges::find()
        .filter(user_exchanges::Column::UserId.eq(user_id))
        .filter(user_exchanges::Column::Enabled.eq(true))
        .all(db)
        .await?;
    Ok(rows.into_iter().map(|row| row.exchange_name).collect())
}
