//! Реестр уведомлений и shared store.
//!
//! - `bus`: сам реестр: подписки, доставка и shared store.
//! - `handler`: тип обработчика и изолированный вызов.
//! - `store` (приватный): хранилище shared data.

pub mod bus;
pub mod handler;
mod store;

pub use bus::*;
pub use handler::Handler;
pub(crate) use store::SharedStore;
