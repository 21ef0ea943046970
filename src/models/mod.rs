//! Data models for the lending server

pub mod loan;
pub mod user;

// Re-export commonly used types
pub use loan::{LoanItemDetail, LoanRow, UserLoanResponse, ON_LOAN_STATUS};
pub use user::{CreateUser, UserResponse};
