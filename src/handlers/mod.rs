pub mod company_handlers;
pub mod health_handlers;
