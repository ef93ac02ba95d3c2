use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::contact::ContactForm;
use crate::errors::AppError;
use crate::state::AppState;

const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

/// POST /contact
/// Accepts a JSON form, validates it, and relays it through the configured mailer.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(form) = payload.map_err(|e| {
        debug!("Rejected contact payload: {e}");
        AppError::Validation("Invalid form data".to_string())
    })?;
    form.validate()?;

    state.mailer.send(&form).await?;
    info!("Contact form submitted by {}", form.email.trim());

    Ok(Json(json!({
        "status": "success",
        "message": SUCCESS_MESSAGE
    })))
}
