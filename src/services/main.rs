use crate::domain::filter::{self, FilterOptions, FilterState};
use crate::dto::main::IndexPageData;
use crate::repository::AdvocateReader;
use crate::services::ServiceResult;

/// Loads the advocate table for the index page.
///
/// The full record set is fetched once and filtered in memory; the dropdown
/// options always come from the unfiltered set so narrowing one criterion
/// never hides another's choices.
pub fn load_index_page<R>(repo: &R, filter: FilterState) -> ServiceResult<IndexPageData>
where
    R: AdvocateReader + ?Sized,
{
    let filter = filter.normalized();
    let advocates = repo.list_advocates()?;

    let options = FilterOptions::derive(&advocates);
    let visible = filter::apply(&advocates, &filter);

    Ok(IndexPageData::new(visible, options, filter))
}
