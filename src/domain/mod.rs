pub mod booking;
pub mod class;
pub mod commands;
pub mod errors;
pub mod member;
pub mod pagination;
pub mod value_objects;

pub use errors::*;
pub use pagination::*;
pub use value_objects::*;
