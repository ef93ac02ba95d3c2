use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::models::project::Project;
use crate::state::AppState;

const SITEMAP_PAGES: &[&str] = &["/", "/home", "/about", "/projects", "/resume", "/contact"];

/// GET /robots.txt
pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_txt(&state.config.site_url),
    )
}

/// GET /sitemap.xml
pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap_xml(&state.config.site_url, &state.catalog.hosted()),
    )
}

pub fn robots_txt(site_url: &str) -> String {
    format!("User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {site_url}/sitemap.xml\n")
}

/// Static pages followed by every hosted demo.
pub fn sitemap_xml(site_url: &str, hosted: &[&Project]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    let hosted_paths = hosted
        .iter()
        .filter_map(|p| p.hosted_path.as_deref())
        .map(|path| format!("/hosted/{}/", path.trim_matches('/')));
    let paths = SITEMAP_PAGES.iter().map(|p| p.to_string()).chain(hosted_paths);

    for path in paths {
        xml.push_str("  <url><loc>");
        xml.push_str(&escape_xml(&format!("{site_url}{path}")));
        xml.push_str("</loc></url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
