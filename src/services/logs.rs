use serde::Deserialize;

use crate::domain::plano_produto_log::{LogListQuery, PlanoProdutoLogEntry};
use crate::pagination::{Paginated, Pagination};
use crate::repository::PlanoProdutoLogReader;
use crate::services::{ServiceError, ServiceResult};

/// Query string accepted by the activity log listing.
#[derive(Debug, Default, Deserialize)]
pub struct LogsQuery {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

/// Loads one page of the association log, oldest entries first.
///
/// `default_per_page` applies when the client does not pick a page size.
pub fn load_logs<R>(
    repo: &R,
    query: LogsQuery,
    default_per_page: usize,
) -> ServiceResult<Paginated<PlanoProdutoLogEntry>>
where
    R: PlanoProdutoLogReader + ?Sized,
{
    let pagination = Pagination::new(
        query.page.unwrap_or(1),
        query.per_page.unwrap_or(default_per_page),
    );

    let (total, items) = repo
        .list_logs(LogListQuery::new().paginate(pagination.page, pagination.per_page))
        .map_err(ServiceError::from)?;

    Ok(Paginated::new(items, pagination, total))
}
