use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::ApiError,
    models::{Company, CompanyInput},
};

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Fetch a company by primary key. `None` means no such record exists.
    async fn get(&self, id: i64) -> Result<Option<Company>, ApiError>;
    /// Insert a new company and return it with the generated identifier.
    async fn create(&self, input: &CompanyInput) -> Result<Company, ApiError>;
    /// Delete a company by primary key. Deleting a nonexistent id is not an
    /// error.
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
    /// Overwrite every column of a company by primary key and return the
    /// updated row, or `None` when the id does not exist.
    async fn update(&self, id: i64, input: &CompanyInput) -> Result<Option<Company>, ApiError>;
}

pub struct SqlxCompanyRepository {
    pool: PgPool,
}

impl SqlxCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for SqlxCompanyRepository {
    async fn get(&self, id: i64) -> Result<Option<Company>, ApiError> {
        let row = sqlx::query_as::<_, Company>(
            "SELECT id, name, description, employees_amount, registered, type \
             FROM company WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn create(&self, input: &CompanyInput) -> Result<Company, ApiError> {
        let row = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO company (name, description, employees_amount, registered, type)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, employees_amount, registered, type
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.employees_amount)
        .bind(input.registered)
        .bind(&input.company_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM company WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update(&self, id: i64, input: &CompanyInput) -> Result<Option<Company>, ApiError> {
        // Single UPDATE .. RETURNING: zero matched rows come back as None
        // instead of a phantom re-read racing a concurrent delete.
        let row = sqlx::query_as::<_, Company>(
            r#"
            UPDATE company
            SET name = $2,
                description = $3,
                employees_amount = $4,
                registered = $5,
                type = $6
            WHERE id = $1
            RETURNING id, name, description, employees_amount, registered, type
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.employees_amount)
        .bind(input.registered)
        .bind(&input.company_type)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
