//! GraphQL type definitions
//!
//! These types mirror the catalog records. Every field is nullable, matching the
//! published schema; relations are resolved against the store on demand.

use async_graphql::{ComplexObject, Context, ID, Result, SimpleObject};

use crate::catalog::{AuthorRecord, BookRecord};

use super::context::CatalogExt;
use super::helpers::nullable_list;

/// A book in the catalog
#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(complex)]
pub struct Book {
    pub id: Option<ID>,
    pub name: Option<String>,
    pub genre: Option<String>,
    /// Raw author reference, exposed through the `author` resolver
    #[graphql(skip)]
    pub author_id: Option<String>,
}

#[ComplexObject]
impl Book {
    /// The author this book references, if it exists
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        let Some(author_id) = self.author_id.as_deref() else {
            return Ok(None);
        };
        Ok(ctx.catalog()?.find_author(author_id).map(Author::from))
    }
}

impl From<BookRecord> for Book {
    fn from(r: BookRecord) -> Self {
        Self {
            id: Some(ID(r.id)),
            name: Some(r.name),
            genre: Some(r.genre),
            author_id: r.author,
        }
    }
}

/// An author in the catalog
#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(complex)]
pub struct Author {
    pub id: Option<ID>,
    pub name: Option<String>,
    pub age: Option<i32>,
}

#[ComplexObject]
impl Author {
    /// Books written by this author, in catalog order
    async fn books(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Book>>>> {
        let Some(id) = self.id.as_deref() else {
            return Ok(Some(Vec::new()));
        };
        Ok(nullable_list(ctx.catalog()?.books_by_author(id)))
    }
}

impl From<AuthorRecord> for Author {
    fn from(r: AuthorRecord) -> Self {
        Self {
            id: Some(ID(r.id)),
            name: Some(r.name),
            age: Some(r.age),
        }
    }
}
