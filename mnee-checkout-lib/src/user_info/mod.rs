//! Checkout user info and its persisted store.

mod store;
mod types;

pub use store::UserInfoStore;
pub use types::{ContactInfo, ShippingAddress, UserInfo};
