//! HTTP server: routes, the locale middleware and graceful shutdown.

use anyhow::{Context, Result};
use axum::{
    extract::{Path, Request, State},
    handler::HandlerWithoutStateExt,
    http::{header, HeaderMap, HeaderValue, Uri},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{debug, info, warn};

use crate::animation::MotionProfile;
use crate::config::Config;
use crate::content::PageContent;
use crate::error::SiteError;
use crate::i18n::routing::{locale_cookie_value, locale_from_path};
use crate::i18n::{
    route_request, Locale, LocaleCookie, MetricsReport, NegotiationMetrics, RequestContext,
    RoutingDecision,
};
use crate::render::{render_page, PageContext};
use crate::seo::{robots_txt, sitemap_xml};

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the application router.
///
/// The locale middleware wraps every route and the static-file fallback.
pub fn build_router(state: AppState) -> Router {
    let static_files =
        ServeDir::new(&state.config.static_dir).not_found_service(not_found.into_service());

    // One page route per locale; any other first segment falls through to static files.
    let mut router = Router::new();
    for locale in Locale::ALL {
        let page = get(move |state: State<AppState>, headers: HeaderMap| {
            landing_page(state, locale, headers)
        });
        router = router
            .route(&format!("/{}", locale.code()), page.clone())
            .route(&format!("/{}/", locale.code()), page);
    }

    router
        .route("/sitemap.xml", get(sitemap))
        .route("/robots.txt", get(robots))
        .route("/api/health", get(health))
        .route("/api/content/:lang", get(content))
        .route("/api/metrics", get(metrics))
        .fallback_service(static_files)
        .layer(middleware::from_fn_with_state(state.clone(), locale_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl-C / SIGTERM.
pub async fn serve(config: Config) -> Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    serve_with_listener(listener, config, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve_with_listener<F>(listener: TcpListener, config: Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr().context("Listener has no local address")?;
    info!(
        "Listening on http://{} (default locale: {}, redirect status: {})",
        local_addr,
        config.default_locale,
        config.redirect_status.as_u16()
    );

    let app = build_router(AppState::new(config));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

// ==================== Locale Middleware ====================

/// Redirect unprefixed page requests to their locale and keep the cookie current.
async fn locale_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let (decision, negotiated) = {
        let headers = request.headers();
        let ctx = RequestContext {
            path: request.uri().path(),
            query: request.uri().query(),
            locale_cookie: locale_cookie_value(
                headers
                    .get_all(header::COOKIE)
                    .iter()
                    .filter_map(|value| value.to_str().ok()),
            ),
            accept_language: headers
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|value| value.to_str().ok()),
        };

        route_request(&ctx, state.config.default_locale)
    };
    NegotiationMetrics::global().record(&decision, negotiated.source);

    match decision {
        RoutingDecision::Redirect {
            location,
            locale,
            cookie,
        } => {
            debug!(
                "Redirecting {} to {} (locale {} from {:?})",
                request.uri().path(),
                location,
                locale,
                negotiated.source
            );
            redirect_response(&state.config, &location, locale, cookie)
        }
        RoutingDecision::PassThrough { set_cookie, .. } => {
            let mut response = next.run(request).await;
            if let Some(cookie) = set_cookie {
                append_cookie(&mut response, cookie);
            }
            response
        }
    }
}

fn redirect_response(config: &Config, location: &str, locale: Locale, cookie: LocaleCookie) -> Response {
    let mut response = config.redirect_status.into_response();

    let location = HeaderValue::from_str(location).unwrap_or_else(|_| {
        warn!("Redirect target is not a valid header value: {:?}", location);
        HeaderValue::from_static(match locale {
            Locale::Id => "/id/",
            Locale::En => "/en/",
        })
    });
    response.headers_mut().insert(header::LOCATION, location);
    append_cookie(&mut response, cookie);
    response
}

fn append_cookie(response: &mut Response, cookie: LocaleCookie) {
    match HeaderValue::from_str(&cookie.header_value()) {
        Ok(value) => {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
        Err(e) => warn!("Failed to encode locale cookie: {}", e),
    }
}

// ==================== Handlers ====================

async fn landing_page(
    State(state): State<AppState>,
    locale: Locale,
    headers: HeaderMap,
) -> Result<Html<String>, SiteError> {
    let profile = MotionProfile::from_headers(&headers);

    let page = render_page(&PageContext::new(locale, &state.config, profile))?;
    Ok(Html(page))
}

async fn content(Path(lang): Path<String>) -> Result<Json<PageContent>, SiteError> {
    let locale = Locale::parse(&lang).ok_or_else(|| SiteError::UnknownLocale(lang.clone()))?;
    Ok(Json(PageContent::for_locale(locale)))
}

async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let lastmod = chrono::Utc::now().date_naive();
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap_xml(&state.config, lastmod),
    )
}

async fn robots(State(state): State<AppState>) -> String {
    robots_txt(&state.config)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn metrics() -> Json<MetricsReport> {
    Json(NegotiationMetrics::global().report())
}

async fn not_found(uri: Uri) -> SiteError {
    SiteError::NotFound {
        path: uri.path().to_string(),
        locale: locale_from_path(uri.path()).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Redirect Response Tests ====================

    #[test]
    fn test_redirect_response_headers() {
        let config = Config::default();
        let response =
            redirect_response(&config, "/en/?a=1", Locale::En, LocaleCookie::new(Locale::En));

        assert_eq!(response.status(), config.redirect_status);
        assert_eq!(response.headers()[header::LOCATION], "/en/?a=1");
        assert_eq!(
            response.headers()[header::SET_COOKIE],
            "locale=en; Max-Age=31536000; Path=/; SameSite=Lax"
        );
    }

    #[test]
    fn test_redirect_response_uses_configured_status() {
        let config = Config {
            redirect_status: axum::http::StatusCode::TEMPORARY_REDIRECT,
            ..Config::default()
        };
        let response = redirect_response(&config, "/id/", Locale::Id, LocaleCookie::new(Locale::Id));
        assert_eq!(response.status(), axum::http::StatusCode::TEMPORARY_REDIRECT);
    }

    #[test]
    fn test_redirect_response_invalid_location_falls_back() {
        let config = Config::default();
        let response =
            redirect_response(&config, "/id/\nbad", Locale::Id, LocaleCookie::new(Locale::Id));
        assert_eq!(response.headers()[header::LOCATION], "/id/");
    }

    #[test]
    fn test_append_cookie_keeps_existing_cookies() {
        let mut response = Response::new(axum::body::Body::empty());
        response
            .headers_mut()
            .append(header::SET_COOKIE, HeaderValue::from_static("theme=dark"));
        append_cookie(&mut response, LocaleCookie::new(Locale::Id));

        assert_eq!(response.headers().get_all(header::SET_COOKIE).iter().count(), 2);
    }
}
