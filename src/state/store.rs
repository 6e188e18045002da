use rusqlite::Connection;
use std::path::{Path, PathBuf};

use super::data::Row;

/// Current schema version, stored in `PRAGMA user_version`
pub const SCHEMA_VERSION: i64 = 1;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("could not create database directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The LocalStore manages the single-table SQLite database.
///
/// It is independent from the catalog screens: nothing fetched from the
/// network is written here.
pub struct LocalStore {
    conn: Connection,
    db_path: Option<PathBuf>,
}

impl LocalStore {
    /// Open (or create) the database file at `db_path`.
    pub fn open(db_path: &Path) -> StoreResult<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(db_path)?;
        tracing::info!("📁 Local database opened at: {}", db_path.display());

        let mut store = LocalStore {
            conn,
            db_path: Some(db_path.to_path_buf()),
        };
        store.init_schema()?;

        Ok(store)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> StoreResult<Self> {
        let mut store = LocalStore {
            conn: Connection::open_in_memory()?,
            db_path: None,
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Bring the schema to [`SCHEMA_VERSION`].
    ///
    /// A fresh database (version 0) is created and seeded. Version 1 is the
    /// only schema so far, so there is nothing to migrate.
    fn init_schema(&mut self) -> StoreResult<()> {
        let version = self.schema_version()?;

        if version == 0 {
            self.create()?;
        } else if version != SCHEMA_VERSION {
            tracing::warn!(
                "⚠️  Local schema v{} is not v{}; opening it unchanged",
                version,
                SCHEMA_VERSION
            );
        }

        Ok(())
    }

    fn create(&mut self) -> StoreResult<()> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "CREATE TABLE myTable (
                id      INTEGER PRIMARY KEY NOT NULL,
                text    TEXT NOT NULL
            )",
            [],
        )?;
        tx.execute("CREATE INDEX myTable_full_name ON myTable(text)", [])?;

        // Start from a single known row
        tx.execute("DELETE FROM myTable", [])?;
        tx.execute("INSERT INTO myTable(id, text) VALUES (1, 'bla')", [])?;

        tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        tx.commit()?;

        tracing::info!("✅ Local schema v{} created", SCHEMA_VERSION);
        Ok(())
    }

    /// Stored schema version (0 for a brand new file)
    pub fn schema_version(&self) -> StoreResult<i64> {
        let version: i64 = self
            .conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))?;
        Ok(version)
    }

    /// Get the path to the database file (`None` for in-memory stores)
    pub fn path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    /// All rows in storage order
    pub fn select_all(&self) -> StoreResult<Vec<Row>> {
        let mut stmt = self.conn.prepare_cached("SELECT id, text FROM myTable")?;

        let rows = stmt
            .query_map([], |row| {
                Ok(Row {
                    id: row.get(0)?,
                    text: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    /// Insert a new row and return its assigned id
    pub fn insert(&self, text: &str) -> StoreResult<i64> {
        self.conn
            .prepare_cached("INSERT INTO myTable(text) VALUES (?1)")?
            .execute([text])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Delete a row by id. Returns the number of rows removed.
    pub fn delete(&self, id: i64) -> StoreResult<usize> {
        let removed = self
            .conn
            .prepare_cached("DELETE FROM myTable WHERE id = ?1")?
            .execute([id])?;
        Ok(removed)
    }

    /// Get a count of rows in the table
    pub fn count(&self) -> StoreResult<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM myTable", [], |row| row.get(0))?;
        Ok(count)
    }
}

// Implement Debug for better error messages
impl std::fmt::Debug for LocalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalStore")
            .field("db_path", &self.db_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_seeds_one_row() {
        let store = LocalStore::open_in_memory().unwrap();

        assert_eq!(store.schema_version().unwrap(), SCHEMA_VERSION);
        assert_eq!(
            store.select_all().unwrap(),
            vec![Row { id: 1, text: "bla".to_string() }]
        );
    }

    #[test]
    fn test_index_exists() {
        let store = LocalStore::open_in_memory().unwrap();

        let name: String = store
            .conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'index' AND tbl_name = 'myTable'",
                [],
                |row| row.get(0),
            )
            .unwrap();

        assert_eq!(name, "myTable_full_name");
    }

    #[test]
    fn test_insert_assigns_fresh_id() {
        let store = LocalStore::open_in_memory().unwrap();
        let a = store.insert("alpha").unwrap();
        let before: Vec<i64> = store.select_all().unwrap().iter().map(|r| r.id).collect();

        let id = store.insert("beta").unwrap();

        assert!(!before.contains(&id));
        assert_ne!(id, a);
        let rows = store.select_all().unwrap();
        assert!(rows.contains(&Row { id, text: "beta".to_string() }));
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let store = LocalStore::open_in_memory().unwrap();
        store.insert("alpha").unwrap();
        let id = store.insert("beta").unwrap();
        store.insert("gamma").unwrap();
        let before = store.select_all().unwrap();

        assert_eq!(store.delete(id).unwrap(), 1);

        let after = store.select_all().unwrap();
        let expected: Vec<Row> = before.into_iter().filter(|r| r.id != id).collect();
        assert_eq!(after, expected);
    }

    #[test]
    fn test_delete_missing_id() {
        let store = LocalStore::open_in_memory().unwrap();

        assert_eq!(store.delete(999).unwrap(), 0);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_reopen_keeps_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("pokedex.db");

        {
            let store = LocalStore::open(&path).unwrap();
            store.insert("kept").unwrap();
        }

        let store = LocalStore::open(&path).unwrap();
        assert_eq!(store.path(), Some(path.as_path()));
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_newer_schema_opens_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("newer.db");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(
                "CREATE TABLE myTable (id INTEGER PRIMARY KEY NOT NULL, text TEXT NOT NULL);
                 INSERT INTO myTable(text) VALUES ('x'), ('y');
                 PRAGMA user_version = 5;",
            )
            .unwrap();
        }

        let store = LocalStore::open(&path).unwrap();

        assert_eq!(store.schema_version().unwrap(), 5);
        assert_eq!(store.count().unwrap(), 2);
    }
}
