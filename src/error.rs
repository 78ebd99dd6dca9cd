/// Errors raised while traversing or dumping an implicit graph.
///
/// `E` is the error type of the adjacency predicate.
#[derive(Debug, thiserror::Error)]
pub enum Error<E> {
    #[error("unknown vertex: not a member of the vertex set")]
    UnknownVertex,
    #[error("adjacency predicate failed: {0}")]
    Predicate(#[source] E),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl<E> Error<E> {
    pub fn is_unknown_vertex(&self) -> bool {
        matches!(self, Error::UnknownVertex)
    }

    /// Returns the predicate's own error, if that is what failed.
    pub fn into_predicate_error(self) -> Option<E> {
        match self {
            Error::Predicate(e) => Some(e),
            _ => None,
        }
    }
}
