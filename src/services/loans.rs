//! Loan management service

use rust_decimal::Decimal;

use crate::{
    config::LoansConfig,
    error::{AppError, AppResult},
    models::loan::{CreateLoan, Loan},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
    config: LoansConfig,
}

impl LoansService {
    pub fn new(repository: Repository, config: LoansConfig) -> Self {
        Self { repository, config }
    }

    /// Borrow a book, creating an open loan.
    ///
    /// The book must exist and be available, and the member must
    /// exist. The repository re-checks availability atomically when it
    /// commits, so a borrow that races another one still fails cleanly
    /// with `AlreadyOnLoan`.
    pub async fn borrow_book(&self, loan: CreateLoan) -> AppResult<Loan> {
        let book = self.repository.books.get_by_id(loan.book_id).await?;
        if !book.available {
            return Err(AppError::AlreadyOnLoan(book.id));
        }

        // Verify member exists
        self.repository.members.get_by_id(loan.member_id).await?;

        self.repository.loans.create(&loan).await
    }

    /// Return a borrowed book, closing the loan.
    ///
    /// Returns the fine owed, zero when the book came back on time.
    pub async fn return_book(&self, loan_id: i32) -> AppResult<Decimal> {
        self.repository
            .loans
            .return_loan(loan_id, self.config.fine_per_day)
            .await
    }

    /// Get the open loans for a member.
    ///
    /// An unknown member simply has no loans; only store failures
    /// surface as errors.
    pub async fn get_current_loans(&self, member_id: i32) -> AppResult<Vec<Loan>> {
        self.repository.loans.get_member_loans(member_id).await
    }
}
