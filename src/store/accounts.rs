//! Access layer for user and exchange records
//!
//! These tables are managed by an external identity/admin process; this
//! module enforces only structural integrity. Who may create or disable a
//! user is not its business.

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::{exchanges, prelude::*, users};
use crate::error::StoreError;

/// Register a user under an externally assigned id.
///
/// Fails with `UniqueViolation` if the id is already taken.
pub async fn create_user(
    db: &DatabaseConnection,
    id: i64,
    name: &str,
) -> Result<users::Model, StoreError> {
    let user = users::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        is_admin: Set(false),
        is_enabled: Set(true),
    };

    let inserted = user.insert(db).await?;
    tracing::info!("Created user {} ({})", inserted.id, inserted.name);
    Ok(inserted)
}

pub async fn find_user(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<users::Model>, StoreError> {
    let user = Users::find_by_id(id).one(db).await?;
    Ok(user)
}

pub async fn set_admin(
    db: &DatabaseConnection,
    id: i64,
    is_admin: bool,
) -> Result<users::Model, StoreError> {
    let user = Users::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("user {}", id)))?;

    let mut active: users::ActiveModel = user.into();
    active.is_admin = Set(is_admin);
    let updated = active.update(db).await?;
    tracing::info!("User {} admin flag set to {}", id, is_admin);
    Ok(updated)
}

pub async fn set_enabled(
    db: &DatabaseConnection,
    id: i64,
    is_enabled: bool,
) -> Result<users::Model, StoreError> {
    let user = Users::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("user {}", id)))?;

    let mut active: users::ActiveModel = user.into();
    active.is_enabled = Set(is_enabled);
    let updated = active.update(db).await?;
    tracing::info!("User {} enabled flag set to {}", id, is_enabled);
    Ok(updated)
}

/// Delete a user. Subscription and period-change rows cascade away with it.
pub async fn delete_user(db: &DatabaseConnection, id: i64) -> Result<(), StoreError> {
    Users::delete_by_id(id).exec(db).await?;
    tracing::info!("Deleted user {}", id);
    Ok(())
}

/// Onboard a new exchange.
///
/// Fails with `UniqueViolation` if the name is already registered.
pub async fn create_exchange(
    db: &DatabaseConnection,
    name: &str,
) -> Result<exchanges::Model, StoreError> {
    let exchange = exchanges::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };

    let inserted = exchange.insert(db).await?;
    tracing::info!("Onboarded exchange {}", inserted.name);
    Ok(inserted)
}

pub async fn find_exchange(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<exchanges::Model>, StoreError> {
    let exchange = Exchanges::find()
        .filter(exchanges::Column::Name.eq(name))
        .one(db)
        .await?;
    Ok(exchange)
}

/// Rename an exchange. The new name propagates to referencing subscription
/// rows through the update cascade.
pub async fn rename_exchange(
    db: &DatabaseConnection,
    from: &str,
    to: &str,
) -> Result<exchanges::Model, StoreError> {
    let exchange = Exchanges::find()
        .filter(exchanges::Column::Name.eq(from))
        .one(db)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("exchange {}", from)))?;

    let mut active: exchanges::ActiveModel = exchange.into();
    active.name = Set(to.to_string());
    let updated = active.update(db).await?;
    tracing::info!("Renamed exchange {} to {}", from, to);
    Ok(updated)
}

/// Delete an exchange. Referencing subscription rows cascade away with it.
pub async fn delete_exchange(db: &DatabaseConnection, name: &str) -> Result<(), StoreError> {
    Exchanges::delete_many()
        .filter(exchanges::Column::Name.eq(name))
        .exec(db)
        .await?;
    tracing::info!("Deleted exchange {}", name);
    Ok(())
}
