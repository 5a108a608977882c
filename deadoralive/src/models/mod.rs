mod entity;
mod person;

pub use entity::*;
pub use person::*;
