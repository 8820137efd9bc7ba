pub use super::exchanges::Entity as Exchanges;
pub use super::pairs_prices::Entity as PairsPrices;
pub use super::user_exchanges::Entity as UserExchanges;
pub use super::user_period_changes::Entity as UserPeriodChanges;
pub use super::users::Entity as Users;
