use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// Persisted company record. The identifier is assigned by the database and
/// never arrives from the outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub employees_amount: i64,
    pub registered: bool,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub company_type: String,
}

/// Request-facing company payload. Same shape as [`Company`] minus the
/// identifier, with the field-level validation contract attached.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompanyInput {
    #[validate(length(min = 1, max = 15))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 3000))]
    pub description: String,
    #[validate(custom = "non_zero_employees")]
    pub employees_amount: i64,
    #[validate(custom = "must_be_registered")]
    pub registered: bool,
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub company_type: String,
}

fn non_zero_employees(employees_amount: i64) -> Result<(), ValidationError> {
    if employees_amount == 0 {
        return Err(ValidationError::new("employees_amount_required"));
    }
    Ok(())
}

fn must_be_registered(registered: &bool) -> Result<(), ValidationError> {
    if !registered {
        return Err(ValidationError::new("registered_required"));
    }
    Ok(())
}
