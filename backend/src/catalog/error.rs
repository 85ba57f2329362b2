use thiserror::Error;

/// Failures raised by catalog writes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// There is no existing id to derive the next one from
    #[error("cannot derive a book id: the catalog holds no books")]
    EmptyCatalog,

    #[error("book id {0:?} is not a decimal number")]
    MalformedId(String),

    #[error("book id space exhausted")]
    IdSpaceExhausted,
}

impl CatalogError {
    /// Machine-readable code reported in GraphQL error extensions
    pub fn code(&self) -> &'static str {
        "INTERNAL_SERVER_ERROR"
    }
}
