//! Generate `.gitignore` files from the templates in the `github/gitignore` repository.

pub mod api;
pub mod cli;
pub mod commands;
pub mod compose;
pub mod decode;
pub mod error;
pub mod models;
pub mod resolver;

pub use error::{DecodeError, Error, Result};
