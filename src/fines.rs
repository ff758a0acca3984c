//! Overdue fine calculation

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Compute the fine owed for a loan returned on `return_date`.
///
/// Returns on or before the due date cost nothing; late returns cost
/// `per_day_rate` for each whole day past the due date. A return date
/// earlier than the due date is valid and yields zero, never a
/// negative amount.
pub fn calculate_fine(due_date: NaiveDate, return_date: NaiveDate, per_day_rate: Decimal) -> Decimal {
    let days_late = (return_date - due_date).num_days();
    if days_late <= 0 {
        return Decimal::ZERO;
    }
    Decimal::from(days_late) * per_day_rate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rate() -> Decimal {
        Decimal::new(50, 2) // 0.50
    }

    #[test]
    fn test_on_time_return_is_free() {
        let fine = calculate_fine(date(2024, 1, 10), date(2024, 1, 10), rate());
        assert_eq!(fine, Decimal::ZERO);
    }

    #[test]
    fn test_early_return_is_free() {
        let fine = calculate_fine(date(2024, 1, 10), date(2024, 1, 3), rate());
        assert_eq!(fine, Decimal::ZERO);
    }

    #[test]
    fn test_one_day_late() {
        let fine = calculate_fine(date(2024, 1, 10), date(2024, 1, 11), rate());
        assert_eq!(fine, Decimal::new(50, 2));
    }

    #[test]
    fn test_five_days_late() {
        let fine = calculate_fine(date(2024, 1, 10), date(2024, 1, 15), rate());
        assert_eq!(fine, Decimal::new(250, 2));
    }

    #[test]
    fn test_late_across_month_boundary() {
        // 2024-01-28 .. 2024-02-02 is 5 whole days
        let fine = calculate_fine(date(2024, 1, 28), date(2024, 2, 2), rate());
        assert_eq!(fine, Decimal::new(250, 2));
    }

    #[test]
    fn test_rate_scales_linearly() {
        let fine = calculate_fine(date(2024, 1, 1), date(2024, 1, 11), Decimal::new(125, 2));
        assert_eq!(fine, Decimal::new(1250, 2));
    }
}
