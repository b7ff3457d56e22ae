use actix_web::http::StatusCode;
use actix_web::{Responder, get, web};
use log::error;
use serde::Deserialize;
use tera::{Context, Tera};

use crate::domain::filter::{FilterOptions, FilterState};
use crate::dto::main::IndexPageData;
use crate::repository::DieselRepository;
use crate::routes::{render_template, render_template_with_status};
use crate::services::main as main_service;

#[derive(Deserialize)]
struct IndexQueryParams {
    search: Option<String>,
    degree: Option<String>,
    city: Option<String>,
    specialty: Option<String>,
    experience: Option<String>,
    /// Presentation override: `loading` forces the skeleton, `error` the
    /// failure alert.
    debug: Option<String>,
}

#[get("/")]
pub async fn show_index(
    params: web::Query<IndexQueryParams>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = params.into_inner();
    let filter = FilterState {
        search: params.search,
        degree: params.degree,
        city: params.city,
        specialty: params.specialty,
        experience: params.experience,
    }
    .normalized();

    let mut context = Context::new();
    context.insert("current_page", "index");
    context.insert("loading", &false);
    context.insert("error", &false);

    match params.debug.as_deref() {
        Some("loading") => {
            let page = IndexPageData::new(Vec::new(), FilterOptions::default(), filter);
            context.insert("loading", &true);
            context.insert("page", &page);
            return render_template(&tera, "main/index.html", &context);
        }
        Some("error") => {
            context.insert("error", &true);
            return render_template(&tera, "main/index.html", &context);
        }
        _ => {}
    }

    match main_service::load_index_page(repo.get_ref(), filter) {
        Ok(page) => {
            context.insert("page", &page);
            render_template(&tera, "main/index.html", &context)
        }
        Err(e) => {
            error!("Failed to load advocates: {e}");
            context.insert("error", &true);
            render_template_with_status(
                &tera,
                "main/index.html",
                &context,
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}
