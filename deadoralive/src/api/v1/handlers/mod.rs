pub(crate) mod health;
pub mod lookup;
pub mod messages;

pub use health::health_check;
