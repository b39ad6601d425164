use actix_web::web;

use crate::middleware::json_error_handler;

pub mod finance_api;
pub mod health;
pub mod installments;
pub mod quotes;
pub mod revenues;

/// Register every HTTP route of the service
///
/// Handlers expect `web::Data<QuoteConversionService>` and
/// `web::Data<DisplayCurrency>` in the app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));
    health::controllers::configure(cfg);

    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/installment-plans")
                    .route("", web::post().to(installments::controllers::derive_plan))
                    .route("/resize", web::post().to(installments::controllers::resize_plan))
                    .route("/edit", web::post().to(installments::controllers::edit_installment))
                    .route("/validate", web::post().to(installments::controllers::validate_plan)),
            )
            .route(
                "/quotes/{quote_id}/convert",
                web::post().to(quotes::controllers::convert_quote),
            ),
    );
}
