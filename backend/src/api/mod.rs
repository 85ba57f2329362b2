//! REST endpoints served alongside GraphQL

pub mod health;
