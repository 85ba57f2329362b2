//! GraphQL subscriptions for real-time updates
//!
//! Subscriptions allow clients to receive push updates over WebSocket.

use async_graphql::{Context, Result, Subscription};
use futures::Stream;
use tokio_stream::StreamExt;

use crate::services::pubsub::BOOK_ADDED;

use super::context::CatalogExt;
use super::types::Book;

#[derive(Default)]
pub struct BookSubscriptions;

#[Subscription]
impl BookSubscriptions {
    /// Books added after the subscription starts
    async fn book_added<'ctx>(
        &self,
        ctx: &Context<'ctx>,
    ) -> Result<impl Stream<Item = Option<Book>> + 'ctx> {
        let broker = ctx.broker()?;
        Ok(broker
            .subscribe(BOOK_ADDED)
            .map(|record| Some(Book::from(record))))
    }
}
