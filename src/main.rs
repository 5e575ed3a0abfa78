use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use tracing::{info, error};
use tracing_subscriber::EnvFilter;
use venture_match::config::{LoggingSettings, Settings};
use venture_match::models::ErrorResponse;
use venture_match::routes::{self, AppState};

/// Default JSON body limit; candidate lists are sent inline
const DEFAULT_JSON_LIMIT_BYTES: usize = 4 * 1024 * 1024;

fn json_error(error: &str, message: String) -> actix_web::Error {
    let body = ErrorResponse {
        error: error.to_string(),
        message,
        status_code: StatusCode::BAD_REQUEST.as_u16(),
    };
    error::InternalError::from_response(
        error.to_string(),
        HttpResponse::BadRequest().json(body),
    )
    .into()
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    json_error("invalid_json", format!("Invalid JSON: {}", err))
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    json_error("invalid_query", format!("Invalid query: {}", err))
}

/// Initialize logging. `RUST_LOG` takes precedence over the configured level.
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            // Logging is not configured yet
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_tracing(&settings.logging);

    info!("Starting Venture Match scoring service...");

    let matcher = settings.matcher();

    info!(
        "Matcher initialized with weights: {:?}, stage aliases: {}, {} sector categories",
        matcher.weights(),
        matcher.stage_ladder().uses_aliases(),
        matcher.taxonomy().categories().len()
    );

    let app_state = AppState::new(matcher, &settings.matching);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let json_limit = settings.server.json_limit_bytes.unwrap_or(DEFAULT_JSON_LIMIT_BYTES);

    info!("Starting HTTP server on {}:{}", host, port);

    let server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(
                web::JsonConfig::default()
                    .limit(json_limit)
                    .error_handler(handle_json_payload_error),
            )
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port));

    match server {
        Ok(server) => server.run().await,
        Err(e) => {
            error!("Failed to bind HTTP server: {}", e);
            Err(e)
        }
    }
}
