//! Bookshelf - GraphQL server over an in-memory catalog of books and authors
//!
//! Queries, the `addBook` mutation and the `bookAdded` subscription are served
//! from /graphql. The catalog lives in memory and starts from a fixed seed on
//! every process start.

pub mod api;
pub mod app;
pub mod catalog;
pub mod config;
pub mod graphql;
pub mod services;

pub use app::{AppState, build_app};
