pub mod books;

pub use books::BookMutations;

pub(crate) mod prelude {
    pub(crate) use async_graphql::{Context, ErrorExtensions, ID, Object, Result};

    pub(crate) use crate::graphql::context::CatalogExt;
    pub(crate) use crate::graphql::types::*;
    pub(crate) use crate::services::pubsub::BOOK_ADDED;
}
