//! Data models for Libris

pub mod book;
pub mod loan;
pub mod member;

// Re-export commonly used types
pub use book::{Book, CreateBook};
pub use loan::{CreateLoan, Loan};
pub use member::{CreateMember, Member};
