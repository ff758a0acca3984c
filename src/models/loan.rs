//! Loan (borrow) model and related types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Loan model from database
///
/// A loan is open while `return_date` is null; `fine_amount` is only
/// set once the loan has been returned.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub id: i32,
    pub book_id: i32,
    pub member_id: i32,
    pub loan_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>)]
    pub fine_amount: Option<Decimal>,
}

impl Loan {
    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }
}

/// Create loan request
#[derive(Debug, Deserialize)]
pub struct CreateLoan {
    pub book_id: i32,
    pub member_id: i32,
    pub due_date: NaiveDate,
}
