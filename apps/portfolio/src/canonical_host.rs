//! Redirects apex-domain and plain-HTTP traffic to the canonical `https://www.` host.

use std::net::IpAddr;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::state::AppState;

/// Decides where a request should be redirected, if anywhere.
///
/// Local development hosts, IP literals, and requests without a Host header pass
/// through. So does HTTPS traffic that already targets a `www.` host. Everything
/// else goes to `https://www.<host><path and query>` with the port dropped.
pub fn canonical_redirect(
    host: Option<&str>,
    forwarded_proto: Option<&str>,
    path_and_query: &str,
    dev_hosts: &[String],
) -> Option<String> {
    let host = host.map(str::trim).filter(|h| !h.is_empty())?;
    let hostname = strip_port(host).to_ascii_lowercase();

    if dev_hosts.iter().any(|dev| *dev == hostname) || hostname.parse::<IpAddr>().is_ok() {
        return None;
    }

    // Proxies may append their own hop: "https, http".
    let https = forwarded_proto
        .and_then(|p| p.split(',').next())
        .is_some_and(|p| p.trim().eq_ignore_ascii_case("https"));
    if https && hostname.starts_with("www.") {
        return None;
    }

    let bare = hostname.strip_prefix("www.").unwrap_or(&hostname);
    let path_and_query = if path_and_query.is_empty() { "/" } else { path_and_query };
    Some(format!("https://www.{bare}{path_and_query}"))
}

fn strip_port(host: &str) -> &str {
    if let Some(rest) = host.strip_prefix('[') {
        // [v6]:port
        return rest.split(']').next().unwrap_or(rest);
    }
    if host.matches(':').count() > 1 {
        // bare IPv6 literal
        return host;
    }
    host.split(':').next().unwrap_or(host)
}

/// Axum middleware applying [`canonical_redirect`] to every request.
pub async fn enforce_canonical_host(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if state.config.enforce_canonical_host {
        let headers = request.headers();
        let host = headers.get(header::HOST).and_then(|v| v.to_str().ok());
        let proto = headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok());
        let path_and_query = request
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");

        if let Some(location) =
            canonical_redirect(host, proto, path_and_query, &state.config.dev_hosts)
        {
            debug!("Redirecting {:?} to {location}", host);
            return (
                StatusCode::MOVED_PERMANENTLY,
                [(header::LOCATION, location)],
            )
                .into_response();
        }
    }

    next.run(request).await
}
