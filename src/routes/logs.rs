use actix_web::{Responder, get, web};

use crate::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{error_response, ok};
use crate::services::logs::{LogsQuery, load_logs};

#[get("/plano-produto-logs")]
/// Paginated association history, oldest first.
pub async fn show_plano_produto_logs(
    params: web::Query<LogsQuery>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match load_logs(repo.get_ref(), params.into_inner(), server_config.logs_per_page) {
        Ok(page) => ok(page),
        Err(err) => error_response(err, "list plano produto logs"),
    }
}
