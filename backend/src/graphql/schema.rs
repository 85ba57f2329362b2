//! GraphQL schema definition with queries, mutations, and subscriptions

use std::sync::Arc;

use async_graphql::extensions::Tracing;
use async_graphql::{MergedObject, MergedSubscription, Schema};

use crate::catalog::CatalogStore;
use crate::services::pubsub::BookBroker;

use super::mutations::BookMutations;
use super::queries::{AuthorQueries, BookQueries};
use super::subscriptions::BookSubscriptions;

/// The GraphQL schema type
pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

#[derive(MergedObject, Default)]
#[graphql(name = "Query")]
pub struct QueryRoot(BookQueries, AuthorQueries);

#[derive(MergedObject, Default)]
#[graphql(name = "Mutation")]
pub struct MutationRoot(BookMutations);

#[derive(MergedSubscription, Default)]
#[graphql(name = "Subscription")]
pub struct SubscriptionRoot(BookSubscriptions);

/// Build the GraphQL schema over the given store and broker
pub fn build_schema(catalog: Arc<CatalogStore>, broker: Arc<BookBroker>) -> BookshelfSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        SubscriptionRoot::default(),
    )
    .data(catalog)
    .data(broker)
    .extension(Tracing)
    .finish()
}
