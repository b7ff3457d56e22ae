use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use crate::repository::DieselRepository;
use crate::services::api as api_service;

#[get("/advocates")]
pub async fn api_advocates(repo: web::Data<DieselRepository>) -> impl Responder {
    match api_service::list_advocates(repo.get_ref()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            error!("Failed to list advocates: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
