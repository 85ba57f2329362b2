pub mod authors;
pub mod books;

pub use authors::AuthorQueries;
pub use books::BookQueries;

pub(crate) mod prelude {
    pub(crate) use async_graphql::{Context, ID, Object, Result};

    pub(crate) use crate::graphql::context::CatalogExt;
    pub(crate) use crate::graphql::helpers::*;
    pub(crate) use crate::graphql::types::*;
}
