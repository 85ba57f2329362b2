// Helper functions shared across GraphQL query/mutation modules.

/// Convert store records into a nullable list of nullable GraphQL objects (`[T]`)
pub(crate) fn nullable_list<R, T>(records: Vec<R>) -> Option<Vec<Option<T>>>
where
    R: Into<T>,
{
    Some(records.into_iter().map(|r| Some(r.into())).collect())
}
