//! The pure schedule core: row normalization, querying, formatting,
//! the subject catalog, and the reminder sweep. Nothing in this tree
//! performs I/O; every function is a plain data transformation.

/// Day/weekday names and subject collation.
pub mod locale;
/// Rendering lesson records into user-visible text blocks.
pub mod format;
/// Filtering and sorting canonical lesson records.
pub mod query;
/// Canonical lesson records and raw-row normalization.
pub mod record;
/// The deduplicated, sorted, paginated subject list.
pub mod subjects;
/// The per-tick reminder window evaluation.
pub mod sweep;
