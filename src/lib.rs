mod views;
mod utils;
mod routes;
mod configs;
mod error;
pub mod platform;
pub mod stores;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::{ log_filter, LogFilter };
pub use crate::error::StorageError;
