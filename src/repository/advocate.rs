use diesel::prelude::*;

use crate::domain::advocate::{Advocate, NewAdvocate};
use crate::repository::errors::RepositoryResult;
use crate::repository::{AdvocateReader, AdvocateWriter, DieselRepository};

impl AdvocateReader for DieselRepository {
    fn list_advocates(&self) -> RepositoryResult<Vec<Advocate>> {
        use crate::models::advocate::Advocate as DbAdvocate;
        use crate::schema::advocates;

        let mut conn = self.conn()?;
        let rows = advocates::table
            .order(advocates::id.asc())
            .load::<DbAdvocate>(&mut conn)?;

        rows.into_iter()
            .map(|row| Advocate::try_from(row).map_err(Into::into))
            .collect()
    }
}

impl AdvocateWriter for DieselRepository {
    fn create_advocates(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<usize> {
        use crate::models::advocate::NewAdvocate as DbNewAdvocate;
        use crate::schema::advocates;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewAdvocate> = new_advocates.iter().map(Into::into).collect();
        let affected = diesel::insert_into(advocates::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
