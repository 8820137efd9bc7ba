// src/lib.rs

pub mod entities {
    pub mod prelude;
    pub mod exchanges;
    pub mod pairs_prices;
    pub mod user_exchanges;
    pub mod user_period_changes;
    pub mod users;
}

pub mod store {
    pub mod accounts;
    pub mod period_changes;
    pub mod price_log;
    pub mod subscriptions;
}

pub mod error;

pub use error::StoreError;
