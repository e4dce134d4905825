use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
    /// A catalogue pattern failed to compile. Raised once, when the parser is built.
    #[error("Invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },
}
