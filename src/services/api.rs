use crate::dto::api::AdvocatesResponse;
use crate::repository::AdvocateReader;
use crate::services::{ServiceError, ServiceResult};

/// Returns the complete advocate list for the JSON endpoint. No parameters,
/// no pagination: all rows are always returned, in id order.
pub fn list_advocates<R>(repo: &R) -> ServiceResult<AdvocatesResponse>
where
    R: AdvocateReader + ?Sized,
{
    let advocates = repo.list_advocates().map_err(ServiceError::from)?;

    Ok(AdvocatesResponse {
        data: advocates.into_iter().map(Into::into).collect(),
    })
}
