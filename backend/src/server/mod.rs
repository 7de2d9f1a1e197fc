//! Server construction and route wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use lockpanel_backend::ApiDoc;
use lockpanel_backend::domain::CredentialServiceImpl;
use lockpanel_backend::inbound::http::auth::{login, register};
use lockpanel_backend::inbound::http::control::{control_device, device_state};
use lockpanel_backend::inbound::http::health::{HealthState, live, ready};
use lockpanel_backend::inbound::http::state::HttpState;
use lockpanel_backend::outbound::persistence::DieselUserRepository;
use lockpanel_backend::outbound::relay::HttpDeviceRelay;

/// Wire the adapters and bind the HTTP server.
pub fn build(config: ServerConfig, health_state: web::Data<HealthState>) -> std::io::Result<Server> {
    let http_state = http_state(&config)?;

    let server = HttpServer::new(move || build_app(health_state.clone(), http_state.clone()))
        .bind(config.bind_addr)?
        .run();
    Ok(server)
}

fn http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let relay = HttpDeviceRelay::new(&config.device_base, config.device_timeout)
        .map_err(std::io::Error::other)?;
    let repository = Arc::new(DieselUserRepository::new(config.db_pool.clone()));
    Ok(web::Data::new(HttpState::new(
        Arc::new(CredentialServiceImpl::new(repository)),
        Arc::new(relay),
    )))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(register)
        .service(login)
        .service(control_device)
        .service(device_state);

    let mut app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    {
        app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app
}

#[cfg(test)]
mod tests {
    //! Probe availability while the credential store is still unreachable.
    use std::time::Duration;

    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use url::Url;

    use lockpanel_backend::outbound::persistence::DbPool;

    use super::*;

    fn offline_config() -> ServerConfig {
        ServerConfig::new(
            "127.0.0.1:0".parse().expect("bind addr"),
            DbPool::new("postgres://127.0.0.1:1/unreachable"),
            Url::parse("http://127.0.0.1:1").expect("device url"),
            Duration::from_secs(1),
        )
    }

    #[actix_web::test]
    async fn probes_are_served_before_the_store_connects() {
        let health_state = web::Data::new(HealthState::new());
        let state = http_state(&offline_config()).expect("state builds without a database");
        let app = actix_test::init_service(build_app(health_state.clone(), state)).await;

        // `live`/`ready` name the handler unit structs via `use super::*`, so a
        // plain `let live = ...` would be a unit-struct pattern, not a binding.
        let live_response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/health/live")
                .to_request(),
        )
        .await;
        assert_eq!(live_response.status(), StatusCode::OK);

        let ready_response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/health/ready")
                .to_request(),
        )
        .await;
        assert_eq!(ready_response.status(), StatusCode::SERVICE_UNAVAILABLE);

        health_state.mark_ready();
        let ready_response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/health/ready")
                .to_request(),
        )
        .await;
        assert_eq!(ready_response.status(), StatusCode::OK);
    }
}
