//! Loans repository for database operations

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    fines,
    models::loan::{CreateLoan, Loan},
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get open loans for a member
    pub async fn get_member_loans(&self, member_id: i32) -> AppResult<Vec<Loan>> {
        let loans = sqlx::query_as::<_, Loan>(
            "SELECT * FROM loans WHERE member_id = $1 AND return_date IS NULL",
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(loans)
    }

    /// Create a new loan and mark the book unavailable.
    ///
    /// Both mutations run in one transaction. The availability flip is
    /// conditional on the flag still being true, so two concurrent
    /// borrows of the same book cannot both commit; the loser gets
    /// `AlreadyOnLoan`.
    pub async fn create(&self, loan: &CreateLoan) -> AppResult<Loan> {
        let today = Utc::now().date_naive();

        let mut tx = self.pool.begin().await?;

        let flipped = sqlx::query(
            "UPDATE books SET available = FALSE WHERE id = $1 AND available = TRUE",
        )
        .bind(loan.book_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if flipped == 0 {
            return Err(AppError::AlreadyOnLoan(loan.book_id));
        }

        let created = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (book_id, member_id, loan_date, due_date)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(loan.book_id)
        .bind(loan.member_id)
        .bind(today)
        .bind(loan.due_date)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(created)
    }

    /// Close an open loan and mark the book available again.
    ///
    /// The loan row is locked for the duration of the transaction;
    /// a loan that is missing or already returned yields `LoanNotFound`.
    /// Returns the computed fine.
    pub async fn return_loan(&self, loan_id: i32, per_day_rate: Decimal) -> AppResult<Decimal> {
        let today = Utc::now().date_naive();

        let mut tx = self.pool.begin().await?;

        let loan = sqlx::query_as::<_, Loan>(
            "SELECT * FROM loans WHERE id = $1 AND return_date IS NULL FOR UPDATE",
        )
        .bind(loan_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::LoanNotFound(loan_id))?;

        let fine = fines::calculate_fine(loan.due_date, today, per_day_rate);

        sqlx::query("UPDATE loans SET return_date = $1, fine_amount = $2 WHERE id = $3")
            .bind(today)
            .bind(fine)
            .bind(loan_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE books SET available = TRUE WHERE id = $1")
            .bind(loan.book_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(fine)
    }
}
