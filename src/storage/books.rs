//! The `books` table.
//!
//! Writes are full replacements: the table is dropped, recreated and filled
//! inside one transaction. Reads are an unfiltered `SELECT *`, so row order is
//! whatever the database returns.
//!
//! Both operations log their own failures before returning them, so callers
//! can treat persistence as best-effort and move on.

use log::{error, info};
use sqlx::{Row, SqlitePool};

use crate::config::{BOOKS_TABLE, PREVIEW_ROWS};
use crate::error_handling::StoreError;
use crate::models::{BookRecord, BookTable};

use super::pool::connect;

const DROP_BOOKS: &str = "DROP TABLE IF EXISTS books";
const CREATE_BOOKS: &str = "CREATE TABLE books (
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    first_publish_year INTEGER NOT NULL,
    rating REAL NOT NULL
)";
const INSERT_BOOK: &str =
    "INSERT INTO books (title, author, first_publish_year, rating) VALUES (?, ?, ?, ?)";
const SELECT_BOOKS: &str = "SELECT * FROM books";

/// Persists and reloads [`BookTable`]s.
#[derive(Debug, Clone)]
pub struct BookStore {
    pool: SqlitePool,
}

impl BookStore {
    /// Opens the store described by `conn_string`.
    pub async fn connect(conn_string: &str) -> Result<Self, StoreError> {
        let pool = connect(conn_string).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Replaces the contents of the `books` table with `table`.
    ///
    /// # Returns
    ///
    /// The number of rows written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SqlError` if any statement fails; the failure is
    /// logged first and the previous contents are left untouched.
    pub async fn save(&self, table: &BookTable) -> Result<usize, StoreError> {
        info!("Saving data...");
        match self.replace_all(table).await {
            Ok(written) => {
                info!(
                    "Data saved successfully to table '{}' ({} rows)",
                    BOOKS_TABLE, written
                );
                Ok(written)
            }
            Err(e) => {
                error!("Error saving data: {e}");
                Err(e)
            }
        }
    }

    /// Reads every row of the `books` table.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SqlError` if the query fails (for example when the
    /// table does not exist); the failure is logged first.
    pub async fn fetch(&self) -> Result<BookTable, StoreError> {
        match self.select_all().await {
            Ok(table) => {
                info!(
                    "Data fetched successfully from table '{}' ({} rows)",
                    BOOKS_TABLE,
                    table.len()
                );
                info!(
                    "Here's a preview of the fetched data:\n{}",
                    table.head(PREVIEW_ROWS)
                );
                Ok(table)
            }
            Err(e) => {
                error!("Error fetching data: {e}");
                Err(e)
            }
        }
    }

    /// Closes the underlying connection.
    pub async fn close(self) {
        self.pool.close().await;
    }

    async fn replace_all(&self, table: &BookTable) -> Result<usize, StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(DROP_BOOKS).execute(&mut *tx).await?;
        sqlx::query(CREATE_BOOKS).execute(&mut *tx).await?;
        for book in table {
            sqlx::query(INSERT_BOOK)
                .bind(&book.title)
                .bind(&book.author)
                .bind(book.first_publish_year)
                .bind(book.rating)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(table.len())
    }

    async fn select_all(&self) -> Result<BookTable, StoreError> {
        let rows = sqlx::query(SELECT_BOOKS).fetch_all(&self.pool).await?;
        let table = rows
            .iter()
            .map(|row| -> Result<BookRecord, sqlx::Error> {
                Ok(BookRecord {
                    title: row.try_get("title")?,
                    author: row.try_get("author")?,
                    first_publish_year: row.try_get("first_publish_year")?,
                    rating: row.try_get("rating")?,
                })
            })
            .collect::<Result<BookTable, _>>()?;
        Ok(table)
    }
}
