//! Errors raised while building the routing table.
//!
//! Every failure here is a configuration mistake in the registered patterns.
//! None of them can happen while serving requests: lookups never fail, a miss
//! is reported through [`Lookup`](crate::tree::Lookup).

use thiserror::Error;

/// Represents errors that can occur when inserting a new route.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InsertError {
    /// A value is already registered for exactly this pattern.
    #[error("handlers are already registered for path '{path}'")]
    DuplicateRoute { path: String },

    /// The new pattern disagrees with a wildcard already stored at the same position.
    #[error(
        "'{segment}' in new path '{path}' conflicts with existing wildcard '{wildcard}' in existing prefix '{prefix}'"
    )]
    WildcardConflict {
        segment: String,
        path: String,
        wildcard: String,
        prefix: String,
    },

    /// A parameter was inserted at a node that already has static children.
    #[error("wildcard segment '{wildcard}' conflicts with existing children in path '{path}'")]
    ChildConflict { wildcard: String, path: String },

    /// `:` or `*` without a name.
    #[error("wildcards must be named with a non-empty name in path '{path}'")]
    UnnamedWildcard { path: String },

    /// More than one wildcard marker inside one segment, e.g. `/:a:b`.
    #[error("only one wildcard per path segment is allowed, has: '{wildcard}' in path '{path}'")]
    TooManyWildcards { wildcard: String, path: String },

    /// The same parameter name appears twice in one pattern.
    #[error("parameter name '{name}' is used more than once in path '{path}'")]
    DuplicateParamName { name: String, path: String },

    /// A catch-all followed by more text, e.g. `/src/*file/raw`.
    #[error("catch-all routes are only allowed at the end of the path in path '{path}'")]
    CatchAllNotAtEnd { path: String },

    /// A catch-all that does not start a segment, e.g. `/src*file`.
    #[error("no / before catch-all in path '{path}'")]
    CatchAllWithoutSlash { path: String },

    /// Router-level patterns must be absolute.
    #[error("path must begin with '/', found: '{path}'")]
    MissingLeadingSlash { path: String },
}

impl InsertError {
    /// The pattern that failed to register.
    pub fn path(&self) -> &str {
        match self {
            InsertError::DuplicateRoute { path }
            | InsertError::WildcardConflict { path, .. }
            | InsertError::ChildConflict { path, .. }
            | InsertError::UnnamedWildcard { path }
            | InsertError::TooManyWildcards { path, .. }
            | InsertError::DuplicateParamName { path, .. }
            | InsertError::CatchAllNotAtEnd { path }
            | InsertError::CatchAllWithoutSlash { path }
            | InsertError::MissingLeadingSlash { path } => path,
        }
    }
}

/// Returned when a string names no [`Mode`](crate::Mode).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown mode '{0}', expected one of: debug, release, test")]
pub struct ParseModeError(pub(crate) String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_message_names_both_routes() {
        let err = InsertError::WildcardConflict {
            segment: ":name".to_owned(),
            path: "/user/:name".to_owned(),
            wildcard: ":id".to_owned(),
            prefix: "/user/:id".to_owned(),
        };

        assert_eq!(
            err.to_string(),
            "':name' in new path '/user/:name' conflicts with existing wildcard ':id' in existing prefix '/user/:id'"
        );
        assert_eq!(err.path(), "/user/:name");
    }
}
