use super::prelude::*;

#[derive(Default)]
pub struct BookMutations;

#[Object]
impl BookMutations {
    /// Add a book to the catalog and notify `bookAdded` subscribers.
    ///
    /// The new id is one greater than the highest existing id. Fails when the
    /// catalog is empty or holds a non-numeric id; nothing is added in that case
    /// and the field resolves to null alongside the error.
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        genre: String,
        author: Option<ID>,
    ) -> Result<Option<Book>> {
        let catalog = ctx.catalog()?;
        let broker = ctx.broker()?;

        // Publish under the insert lock so events go out in id order
        let inserted = catalog.insert_book_then(name, genre, author.map(|id| id.0), |record| {
            let subscribers = broker.publish(BOOK_ADDED, record.clone());
            tracing::info!(
                book_id = %record.id,
                author_id = ?record.author,
                subscribers,
                "Book added"
            );
        });

        match inserted {
            Ok(record) => Ok(Some(record.into())),
            Err(e) => {
                tracing::error!(error = %e, "Failed to add book");
                let error = e.extend().into_server_error(ctx.item.pos);
                ctx.add_error(ctx.set_error_path(error));
                Ok(None)
            }
        }
    }
}
