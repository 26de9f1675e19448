pub mod engine;
pub mod operators;
pub mod repository;

pub use crate::domain::model::Person;
pub use crate::domain::ports::{ConfigProvider, PersonRepository, PersonStream};
pub use crate::utils::error::Result;
