use super::prelude::*;

#[derive(Default)]
pub struct BookQueries;

#[Object]
impl BookQueries {
    /// Get a book by ID. Returns null when no book matches.
    async fn book(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<Book>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let catalog = ctx.catalog()?;
        let book = catalog.find_book(&id);
        tracing::debug!(
            book_id = %id.as_str(),
            found = book.is_some(),
            catalog_size = catalog.book_count(),
            "Book lookup"
        );
        Ok(book.map(Book::from))
    }

    /// Get all books in insertion order
    async fn books(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Book>>>> {
        Ok(nullable_list(ctx.catalog()?.books()))
    }
}
