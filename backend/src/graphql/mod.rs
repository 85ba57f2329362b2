//! GraphQL API with subscriptions for real-time updates
//!
//! Queries and mutations run over HTTP at /graphql; subscriptions run over
//! WebSocket at /graphql/ws. Resolvers are split per entity and merged into the
//! root types in `schema.rs`.

mod context;
mod helpers;
pub mod mutations;
pub mod queries;
mod schema;
mod subscriptions;
pub mod types;

pub use context::CatalogExt;
pub use schema::{BookshelfSchema, MutationRoot, QueryRoot, SubscriptionRoot, build_schema};
pub use types::{Author, Book};
