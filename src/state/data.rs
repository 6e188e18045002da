/// Shared data structures for the local table
///
/// These structs represent the rows that flow between
/// the database layer and its callers.

/// One persisted text entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Primary key, assigned by SQLite on insert
    pub id: i64,
    pub text: String,
}
