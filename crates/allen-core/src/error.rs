//! Error types for allen-core.
//!
//! Interval construction and relation classification are total, so the only
//! fallible surface in the crate is parsing a [`Relation`](crate::Relation)
//! from its string name.

use thiserror::Error;

/// The string matched none of the 13 relation names.
///
/// Carries the rejected input. Valid names are the lower-snake forms
/// produced by `Relation::name` (`"before"`, `"met_by"`, ...).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown interval relation: {0:?}")]
pub struct ParseRelationError(pub String);
