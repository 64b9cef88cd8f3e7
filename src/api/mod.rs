//! REST client for the EstagioTech backend

mod client;
mod error;
pub mod paths;
mod traits;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use traits::ApiClientTrait;

#[cfg(test)]
pub use traits::MockApiClientTrait;
