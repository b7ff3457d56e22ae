use crate::db::DbPool;
use crate::domain::advocate::{Advocate, NewAdvocate};
use crate::repository::errors::RepositoryResult;

pub mod advocate;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Read access to the advocate table.
///
/// The directory is read-only at request time: the one operation returns the
/// complete record set, in id order, and callers filter it in memory.
pub trait AdvocateReader {
    fn list_advocates(&self) -> RepositoryResult<Vec<Advocate>>;
}

/// Write access used to populate the table (tests, data loading). No
/// update or delete exists; the dataset is immutable once loaded.
pub trait AdvocateWriter {
    fn create_advocates(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<usize>;
}

/// Diesel-backed repository handed to the Actix handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<crate::db::DbConnection> {
        Ok(self.pool.get()?)
    }
}
