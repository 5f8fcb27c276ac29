pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod state;

use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::Settings;
pub use state::AppState;

use errors::AppError;
use handlers::{admin, contact, menu, orders};

#[derive(OpenApi)]
#[openapi(
    paths(
        orders::get_catalog,
        orders::pickup_slots,
        orders::new_order,
        orders::quote_order,
        orders::create_order,
        menu::list_menu,
        menu::list_categories,
        contact::send_message,
        admin::login,
        admin::logout,
        admin::dashboard,
        admin::list_orders,
        admin::get_order,
        admin::update_status,
        menu::admin_list_menu,
        menu::create_menu_item,
        menu::update_menu_item,
        menu::delete_menu_item,
    ),
    tags(
        (name = "orders", description = "Order form, pricing and placement"),
        (name = "menu", description = "Public menu"),
        (name = "contact", description = "Contact form"),
        (name = "admin", description = "Back office"),
    )
)]
pub struct ApiDoc;

/// Registers every route. Shared by the server and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .route("/catalog", web::get().to(orders::get_catalog))
    .service(
        web::scope("/orders")
            .route("", web::post().to(orders::create_order))
            .route("/new", web::get().to(orders::new_order))
            .route("/pickup-slots", web::get().to(orders::pickup_slots))
            .route("/quote", web::post().to(orders::quote_order)),
    )
    .service(
        web::scope("/menu")
            .route("", web::get().to(menu::list_menu))
            .route("/categories", web::get().to(menu::list_categories)),
    )
    .route("/contact", web::post().to(contact::send_message))
    .service(
        web::scope("/admin")
            .route("/login", web::post().to(admin::login))
            .route("/logout", web::post().to(admin::logout))
            .route("/dashboard", web::get().to(admin::dashboard))
            .route("/orders", web::get().to(admin::list_orders))
            .route("/orders/{id}", web::get().to(admin::get_order))
            .route("/orders/{id}/status", web::patch().to(admin::update_status))
            .route("/menu", web::get().to(menu::admin_list_menu))
            .route("/menu", web::post().to(menu::create_menu_item))
            .route("/menu/{id}", web::put().to(menu::update_menu_item))
            .route("/menu/{id}", web::delete().to(menu::delete_menu_item)),
    );
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    state: web::Data<AppState>,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
