use actix_web::http::StatusCode;
use actix_web::{HttpResponse, HttpResponseBuilder};
use tera::{Context, Tera};

pub mod api;
pub mod main;

/// Renders a Tera template into a 200 response.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_template_with_status(tera, template, context, StatusCode::OK)
}

/// Renders a Tera template with an explicit status code. A template failure
/// is logged and collapses to an empty 500.
pub fn render_template_with_status(
    tera: &Tera,
    template: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponseBuilder::new(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template {template}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
