use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use validator::Validate;

use crate::{
    error::ApiError,
    models::{Company, CompanyInput},
    AppState,
};

/// Parse a raw path segment into a company identifier. The route accepts any
/// string; anything that is not a base-10 integer is a client error, not a
/// routing miss.
fn parse_company_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| {
        tracing::debug!(raw_id = %raw, "rejected non-numeric company id");
        ApiError::validation("invalid company ID")
    })
}

/// Decode and validate a company request body. Malformed JSON and
/// contract-violating payloads collapse into the same client-facing message;
/// the concrete reason is only logged.
fn decode_company_input(
    payload: Result<Json<CompanyInput>, JsonRejection>,
) -> Result<CompanyInput, ApiError> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected undecodable company payload");
        ApiError::validation("invalid company request body")
    })?;

    input.validate().map_err(|errors| {
        tracing::debug!(error = %errors, "rejected invalid company payload");
        ApiError::validation("invalid company request body")
    })?;

    Ok(input)
}

/// GET /v1/company/:id - Fetch a single company
///
/// A missing record is not an error on this endpoint: it answers 204 with an
/// empty body so callers can probe for existence without parsing a payload.
pub async fn get_company(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_company_id(&id)?;

    match app_state.company_repository.get(id).await? {
        Some(company) => Ok(Json(company).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// POST /v1/company - Create a company
pub async fn create_company(
    State(app_state): State<AppState>,
    payload: Result<Json<CompanyInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Company>), ApiError> {
    let input = decode_company_input(payload)?;

    let company = app_state.company_repository.create(&input).await?;

    tracing::info!(company_id = company.id, "company created");
    Ok((StatusCode::CREATED, Json(company)))
}

/// PATCH /v1/company/:id - Overwrite a company
///
/// Accepts the same full payload as creation and replaces every field.
pub async fn update_company(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CompanyInput>, JsonRejection>,
) -> Result<Json<Company>, ApiError> {
    let id = parse_company_id(&id)?;
    let input = decode_company_input(payload)?;

    let company = app_state
        .company_repository
        .update(id, &input)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("company {} does not exist", id)))?;

    tracing::info!(company_id = company.id, "company updated");
    Ok(Json(company))
}

/// DELETE /v1/company/:id - Delete a company
///
/// Deleting an id that does not exist still answers 200; the endpoint reports
/// the desired end state, not whether a row was removed.
pub async fn delete_company(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_company_id(&id)?;

    app_state.company_repository.delete(id).await?;

    tracing::info!(company_id = id, "company deleted");
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_id_parses() {
        assert_eq!(parse_company_id("42").unwrap(), 42);
    }

    #[test]
    fn negative_id_parses() {
        assert_eq!(parse_company_id("-7").unwrap(), -7);
    }

    #[test]
    fn non_numeric_id_is_a_validation_error() {
        let err = parse_company_id("abc").unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref msg) if msg == "invalid company ID"));
    }

    #[test]
    fn empty_id_is_a_validation_error() {
        assert!(parse_company_id("").is_err());
    }

    #[test]
    fn overflowing_id_is_a_validation_error() {
        assert!(parse_company_id("92233720368547758080").is_err());
    }
}
