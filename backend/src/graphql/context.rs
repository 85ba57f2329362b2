//! Access to the catalog and broker from resolvers
//!
//! Both are injected as schema data by [build_schema](super::build_schema).

use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, Result};

use crate::catalog::{CatalogError, CatalogStore};
use crate::services::pubsub::BookBroker;

pub trait CatalogExt {
    /// The catalog store backing this schema
    fn catalog(&self) -> Result<&Arc<CatalogStore>>;

    /// The broker that carries `bookAdded` events
    fn broker(&self) -> Result<&Arc<BookBroker>>;
}

impl<'a> CatalogExt for Context<'a> {
    fn catalog(&self) -> Result<&Arc<CatalogStore>> {
        self.data::<Arc<CatalogStore>>()
    }

    fn broker(&self) -> Result<&Arc<BookBroker>> {
        self.data::<Arc<BookBroker>>()
    }
}

impl ErrorExtensions for CatalogError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}
