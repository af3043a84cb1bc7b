pub mod company;

pub use company::{Company, CompanyInput};
