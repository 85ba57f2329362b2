use super::prelude::*;

#[derive(Default)]
pub struct AuthorQueries;

#[Object]
impl AuthorQueries {
    /// Get an author by ID. Returns null when no author matches.
    async fn author(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<Author>> {
        let Some(id) = id else {
            return Ok(None);
        };
        Ok(ctx.catalog()?.find_author(&id).map(Author::from))
    }

    /// Get all authors
    async fn authors(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Author>>>> {
        Ok(nullable_list(ctx.catalog()?.authors()))
    }
}
