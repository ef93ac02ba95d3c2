pub mod api;
pub mod contact;
pub mod health;
pub mod pages;
pub mod resume;
pub mod seo;

use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::canonical_host::enforce_canonical_host;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // JSON API (the only surface other origins call)
    let api = Router::new()
        .route("/projects", get(api::list_projects))
        .route("/projects/types", get(api::project_types))
        .route("/projects/live", get(api::live_demos))
        .route("/projects/type/:type", get(api::projects_by_type))
        .route(
            "/projects/type/:type/status/:status",
            get(api::projects_by_type_and_status),
        )
        .route("/projects/status/:status", get(api::projects_by_status))
        .route("/projects/technology/:tech", get(api::projects_by_technology))
        .route("/projects/:id", get(api::get_project))
        .layer(CorsLayer::permissive());

    let static_files = ServeDir::new(&state.config.static_dir);
    let hosted_demos =
        ServeDir::new(&state.config.hosted_dir).append_index_html_on_directories(true);

    Router::new()
        // Pages
        .route("/", get(pages::terminal))
        .route("/home", get(pages::home))
        .route("/about", get(pages::about))
        .route("/projects", get(pages::projects))
        .route("/resume", get(pages::resume))
        .route("/contact", get(pages::contact).post(contact::submit))
        // Resume artifacts
        .route("/resume/pdf", get(resume::pdf_inline))
        .route("/resume/download", get(resume::pdf_download))
        .route("/resume/html", get(resume::html))
        // Plumbing
        .route("/health", get(health::health_handler))
        .route("/robots.txt", get(seo::robots))
        .route("/sitemap.xml", get(seo::sitemap))
        .nest("/api", api)
        .nest_service("/static", static_files)
        .nest_service("/hosted", hosted_demos)
        .fallback(pages::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            enforce_canonical_host,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, HeaderMap, Method, Request, StatusCode},
    };
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::test_support::{test_config, test_state, FakeRunner, RecordingMailer, Tool};

    struct Harness {
        _dir: TempDir,
        scratch: std::path::PathBuf,
        app: Router,
        mailer: Arc<RecordingMailer>,
    }

    fn harness_with(
        overrides: &[(&str, &str)],
        mailer: RecordingMailer,
        runner: FakeRunner,
    ) -> Harness {
        let dir = tempfile::tempdir().unwrap();
        let scratch = dir.path().to_path_buf();
        let config = test_config(&scratch, overrides);
        let mailer = Arc::new(mailer);
        let state = test_state(config, mailer.clone(), Arc::new(runner));
        Harness {
            _dir: dir,
            scratch,
            app: build_router(state),
            mailer,
        }
    }

    fn harness() -> Harness {
        harness_with(&[], RecordingMailer::default(), FakeRunner::new())
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, body.to_vec())
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, HeaderMap, Vec<u8>) {
        let request = Request::builder()
            .uri(uri)
            .header(header::HOST, "localhost:8080")
            .body(Body::empty())
            .unwrap();
        send(app, request).await
    }

    async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
        let (status, _, body) = get(app, uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn post_contact(app: &Router, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/contact")
            .header(header::HOST, "localhost")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let (status, _, body) = send(app, request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn text(body: &[u8]) -> String {
        String::from_utf8_lossy(body).into_owned()
    }

    fn ids(json: &Value) -> Vec<String> {
        json.as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap().to_string())
            .collect()
    }

    // ── Pages ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_health() {
        let h = harness();
        let (status, json) = get_json(&h.app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "portfolio");
    }

    #[tokio::test]
    async fn test_every_page_route_renders() {
        let h = harness();
        for (uri, title) in [
            ("/", "xiaoOS Terminal - David Xiao"),
            ("/home", "David Xiao - CS Student"),
            ("/about", "About Me - David Xiao"),
            ("/projects", "Projects - David Xiao"),
            ("/contact", "Contact Me - David Xiao"),
            ("/resume", "Resume - David Xiao"),
        ] {
            let (status, headers, body) = get(&h.app, uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
            assert!(text(&body).contains(title), "{uri} missing title {title}");
        }
    }

    #[tokio::test]
    async fn test_unknown_path_renders_not_found_page() {
        let h = harness();
        let (status, _, body) = get(&h.app, "/definitely/not/here").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(text(&body).contains("Page Not Found - David Xiao"));
    }

    // ── JSON API ────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_api_lists_all_projects() {
        let h = harness();
        let (status, json) = get_json(&h.app, "/api/projects").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), crate::content::projects().len());
        assert!(json[0].get("type").is_some());
    }

    #[tokio::test]
    async fn test_api_query_filters() {
        let h = harness();
        let (_, json) = get_json(&h.app, "/api/projects?type=security&status=").await;
        let all = json.as_array().unwrap();
        assert!(!all.is_empty());
        assert!(all.iter().all(|p| p["type"] == "security"));

        let (status, json) = get_json(&h.app, "/api/projects?type=blockchain").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_api_by_type_and_status() {
        let h = harness();
        let (_, json) = get_json(&h.app, "/api/projects/type/WEB").await;
        assert!(json.as_array().unwrap().iter().all(|p| p["type"] == "web"));

        let (status, json) = get_json(&h.app, "/api/projects/type/blockchain").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!([]));

        let (_, json) = get_json(&h.app, "/api/projects/status/archived").await;
        assert!(json.as_array().unwrap().iter().all(|p| p["status"] == "archived"));

        let (_, json) = get_json(&h.app, "/api/projects/type/academic/status/active").await;
        let both = json.as_array().unwrap();
        assert!(both
            .iter()
            .all(|p| p["type"] == "academic" && p["status"] == "active"));
    }

    #[tokio::test]
    async fn test_api_by_technology_and_types() {
        let h = harness();
        let (_, lower) = get_json(&h.app, "/api/projects/technology/typescript").await;
        let (_, upper) = get_json(&h.app, "/api/projects/technology/TypeScript").await;
        assert_eq!(ids(&lower), ids(&upper));
        assert!(!ids(&lower).is_empty());

        let (_, types) = get_json(&h.app, "/api/projects/types").await;
        assert_eq!(types[0], "web");
    }

    #[tokio::test]
    async fn test_api_live_demos() {
        let h = harness();
        let (status, json) = get_json(&h.app, "/api/projects/live").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&json), ["personal-portfolio"]);
    }

    #[tokio::test]
    async fn test_api_single_project() {
        let h = harness();
        let (status, json) = get_json(&h.app, "/api/projects/forgearena").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["title"], "ForgeArena");

        let (status, json) = get_json(&h.app, "/api/projects/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_api_allows_cross_origin() {
        let h = harness();
        let request = Request::builder()
            .uri("/api/projects")
            .header(header::HOST, "localhost")
            .header(header::ORIGIN, "https://elsewhere.example")
            .body(Body::empty())
            .unwrap();
        let (_, headers, _) = send(&h.app, request).await;
        assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    // ── Contact ─────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_contact_submission_is_mailed() {
        let h = harness();
        let (status, json) = post_contact(
            &h.app,
            r#"{"name":"Ada","email":"ada@example.com","subject":"Hi","message":"Hello!"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "success");
        assert_eq!(
            json["message"],
            "Thank you for your message! I'll get back to you soon."
        );
        let sent = h.mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].name, "Ada");
    }

    #[tokio::test]
    async fn test_contact_requires_fields() {
        let h = harness();
        let (status, json) =
            post_contact(&h.app, r#"{"name":"Ada","email":"  ","message":"Hello"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Name, email, and message are required fields.");
        assert!(h.mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_contact_rejects_malformed_json() {
        let h = harness();
        let (status, json) = post_contact(&h.app, "name=Ada").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Invalid form data");
    }

    #[tokio::test]
    async fn test_contact_mail_failure_is_generic_500() {
        let h = harness_with(&[], RecordingMailer::failing(), FakeRunner::new());
        let (status, json) = post_contact(
            &h.app,
            r#"{"name":"Ada","email":"ada@example.com","message":"Hello"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "MAIL_ERROR");
        assert!(!json["message"].as_str().unwrap().contains("SMTP_PASSWORD"));
    }

    // ── Resume ──────────────────────────────────────────────────────────────

    fn latexmk_produces_pdf() -> FakeRunner {
        FakeRunner::new().with(
            "latexmk",
            Tool::Produce {
                file: "resume.pdf".to_string(),
                on_pass: 1,
            },
        )
    }

    fn assert_no_cache(headers: &HeaderMap) {
        assert_eq!(
            headers[header::CACHE_CONTROL],
            "no-cache, no-store, must-revalidate"
        );
        assert_eq!(headers[header::PRAGMA], "no-cache");
        assert_eq!(headers[header::EXPIRES], "0");
    }

    #[tokio::test]
    async fn test_resume_pdf_inline() {
        let h = harness_with(&[], RecordingMailer::default(), latexmk_produces_pdf());
        let (status, headers, body) = get(&h.app, "/resume/pdf").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "inline; filename=\"David_Xiao_Resume.pdf\""
        );
        assert_no_cache(&headers);
        assert!(body.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_resume_download_is_attachment() {
        let h = harness_with(&[], RecordingMailer::default(), latexmk_produces_pdf());
        let (status, headers, _) = get(&h.app, "/resume/download").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"David_Xiao_Resume.pdf\""
        );
    }

    #[tokio::test]
    async fn test_resume_pdf_falls_back_to_html() {
        let h = harness();
        let (status, headers, body) = get(&h.app, "/resume/pdf").await;
        assert_eq!(status, StatusCode::OK);
        assert!(headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        assert!(!headers.contains_key(header::CONTENT_DISPOSITION));
        assert_no_cache(&headers);
        let html = text(&body);
        assert!(html.contains("<title>David Xiao - Resume</title>"));
        assert!(h.scratch.join("resume.html").exists());
    }

    #[tokio::test]
    async fn test_resume_html_route() {
        let h = harness();
        let (status, headers, body) = get(&h.app, "/resume/html").await;
        assert_eq!(status, StatusCode::OK);
        assert_no_cache(&headers);
        assert!(text(&body).contains("<h2>Education</h2>"));
    }

    #[tokio::test]
    async fn test_resume_missing_source_is_404() {
        let h = harness();
        std::fs::remove_file(h.scratch.join("resume.tex")).unwrap();
        let (status, json) = get_json(&h.app, "/resume/pdf").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Resume LaTeX file not found");
    }

    // ── Canonical host ──────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_apex_host_is_redirected() {
        let h = harness_with(
            &[("ENFORCE_CANONICAL_HOST", "true")],
            RecordingMailer::default(),
            FakeRunner::new(),
        );
        let request = Request::builder()
            .uri("/about?tab=skills")
            .header(header::HOST, "example.com")
            .header("x-forwarded-proto", "https")
            .body(Body::empty())
            .unwrap();
        let (status, headers, _) = send(&h.app, request).await;
        assert_eq!(status, StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            headers[header::LOCATION],
            "https://www.example.com/about?tab=skills"
        );
    }

    #[tokio::test]
    async fn test_canonical_and_dev_hosts_pass_through() {
        let h = harness_with(
            &[("ENFORCE_CANONICAL_HOST", "true")],
            RecordingMailer::default(),
            FakeRunner::new(),
        );
        let (status, _, _) = get(&h.app, "/about").await;
        assert_eq!(status, StatusCode::OK);

        let request = Request::builder()
            .uri("/about")
            .header(header::HOST, "www.example.com")
            .header("x-forwarded-proto", "https")
            .body(Body::empty())
            .unwrap();
        let (status, _, _) = send(&h.app, request).await;
        assert_eq!(status, StatusCode::OK);
    }

    // ── Files and SEO ───────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_static_and_hosted_files() {
        let h = harness();
        let (status, _, _) = get(&h.app, "/static/css/style.css").await;
        assert_eq!(status, StatusCode::OK);

        let demo = h.scratch.join("hosted/minesweeper");
        std::fs::create_dir_all(&demo).unwrap();
        std::fs::write(demo.join("index.html"), "<h1>Minesweeper</h1>").unwrap();
        let (status, _, body) = get(&h.app, "/hosted/minesweeper/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(text(&body).contains("Minesweeper"));
    }

    #[tokio::test]
    async fn test_robots_and_sitemap() {
        let h = harness();
        let (status, _, body) = get(&h.app, "/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert!(text(&body).contains("Sitemap: https://www.example.com/sitemap.xml"));

        let (status, headers, body) = get(&h.app, "/sitemap.xml").await;
        assert_eq!(status, StatusCode::OK);
        assert!(headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("application/xml"));
        assert!(text(&body).contains("https://www.example.com/hosted/ascii-rpg/"));
    }
}
