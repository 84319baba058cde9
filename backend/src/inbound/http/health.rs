//! Liveness and readiness probes for orchestrators and load balancers.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

/// Readiness and liveness flags shared between the server and probes.
///
/// Starts not ready but alive.
#[derive(Debug)]
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Fresh state: not ready, alive.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report ready once the listener is bound.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Fail liveness so orchestrators stop routing during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Whether readiness probes pass.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Whether liveness probes pass.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}

fn probe_response(ok: bool) -> HttpResponse {
    let mut builder = if ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    builder
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Readiness probe: 200 once the server accepts traffic, 503 before.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_ready())
}

/// Liveness probe: 200 while alive, 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_alive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;

    async fn probe(state: web::Data<HealthState>, uri: &str) -> (StatusCode, Option<String>) {
        let app = test::init_service(App::new().app_data(state).service(ready).service(live)).await;
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let cache = res
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        (res.status(), cache)
    }

    #[rstest]
    #[actix_web::test]
    async fn readiness_follows_mark_ready() {
        let state = web::Data::new(HealthState::new());
        let (before, cache) = probe(state.clone(), "/health/ready").await;
        assert_eq!(before, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(cache.as_deref(), Some("no-store"));

        state.mark_ready();
        let (after, _) = probe(state, "/health/ready").await;
        assert_eq!(after, StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn liveness_fails_after_mark_unhealthy() {
        let state = web::Data::new(HealthState::new());
        let (before, _) = probe(state.clone(), "/health/live").await;
        assert_eq!(before, StatusCode::OK);

        state.mark_unhealthy();
        let (after, _) = probe(state, "/health/live").await;
        assert_eq!(after, StatusCode::SERVICE_UNAVAILABLE);
    }
}
