//! `salarymass-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the forecasting
//! crates (no infrastructure concerns, no model code).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::DomainError;
pub use id::{ForecastId, UserId};
pub use value_object::ValueObject;
