//! Field validation for the trip-planner form.
//!
//! Pure checks: the first violated constraint is returned and the caller
//! decides how to show it. Nothing here touches the network or the surface.

use chrono::{Local, NaiveDate};

use crate::error::ValidationError;
use crate::models::{TripForm, TripRequest};

/// Smallest budget the planner accepts, in whole currency units.
pub const MIN_BUDGET: u32 = 1000;

/// Longest trip the backend will generate, inclusive of both end days.
pub const MAX_TRIP_DAYS: i64 = 30;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate against today's local calendar date.
pub fn validate_now(form: &TripForm) -> Result<TripRequest, ValidationError> {
    validate(form, Local::now().date_naive())
}

/// Check every field in form order and build the request payload.
///
/// `today` is injected so callers (and tests) control the clock. Text fields
/// are trimmed first; whitespace-only input counts as empty.
pub fn validate(form: &TripForm, today: NaiveDate) -> Result<TripRequest, ValidationError> {
    let start_location = form.start_location.trim();
    if start_location.is_empty() {
        return Err(ValidationError::MissingStartLocation);
    }

    let destination = form.destination.trim();
    if destination.is_empty() {
        return Err(ValidationError::MissingDestination);
    }

    if form.start_date.trim().is_empty() {
        return Err(ValidationError::MissingStartDate);
    }
    if form.end_date.trim().is_empty() {
        return Err(ValidationError::MissingEndDate);
    }

    let start_date = parse_date(&form.start_date)?;
    let end_date = parse_date(&form.end_date)?;

    if start_date < today {
        return Err(ValidationError::StartDateInPast);
    }
    if end_date <= start_date {
        return Err(ValidationError::EndNotAfterStart);
    }

    let budget_amount = form
        .budget_amount
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|amount| *amount >= MIN_BUDGET)
        .ok_or(ValidationError::BudgetTooLow)?;

    if (end_date - start_date).num_days() + 1 > MAX_TRIP_DAYS {
        return Err(ValidationError::TripTooLong);
    }

    let currency = form.currency.trim();
    Ok(TripRequest {
        start_location: start_location.to_string(),
        destination: destination.to_string(),
        start_date,
        end_date,
        budget_amount,
        currency: if currency.is_empty() {
            "INR".to_string()
        } else {
            currency.to_string()
        },
    })
}

fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn good_form() -> TripForm {
        TripForm {
            start_location: "Mumbai".to_string(),
            destination: "Bali".to_string(),
            start_date: "2025-06-10".to_string(),
            end_date: "2025-06-15".to_string(),
            budget_amount: "50000".to_string(),
            currency: "INR".to_string(),
        }
    }

    #[test]
    fn accepts_a_complete_form() {
        let request = validate(&good_form(), today()).unwrap();
        assert_eq!(request.start_location, "Mumbai");
        assert_eq!(request.duration_days(), 6);
        assert_eq!(request.budget_amount, 50000);
    }

    #[test]
    fn rejects_in_field_order() {
        // An empty starting location wins even when later fields are broken.
        let form = TripForm {
            start_location: "   ".to_string(),
            budget_amount: "5".to_string(),
            ..good_form()
        };
        assert_eq!(
            validate(&form, today()),
            Err(ValidationError::MissingStartLocation)
        );

        let form = TripForm {
            destination: String::new(),
            ..good_form()
        };
        assert_eq!(
            validate(&form, today()),
            Err(ValidationError::MissingDestination)
        );
    }

    #[test]
    fn rejects_missing_dates() {
        let form = TripForm {
            start_date: String::new(),
            ..good_form()
        };
        assert_eq!(
            validate(&form, today()),
            Err(ValidationError::MissingStartDate)
        );

        let form = TripForm {
            end_date: "  ".to_string(),
            ..good_form()
        };
        assert_eq!(
            validate(&form, today()),
            Err(ValidationError::MissingEndDate)
        );
    }

    #[test]
    fn rejects_unparseable_dates() {
        let form = TripForm {
            start_date: "10/06/2025".to_string(),
            ..good_form()
        };
        assert_eq!(validate(&form, today()), Err(ValidationError::InvalidDate));
    }

    #[test]
    fn rejects_start_in_the_past() {
        let form = TripForm {
            start_date: "2025-05-31".to_string(),
            ..good_form()
        };
        assert_eq!(
            validate(&form, today()),
            Err(ValidationError::StartDateInPast)
        );
    }

    #[test]
    fn start_today_is_allowed() {
        let form = TripForm {
            start_date: "2025-06-01".to_string(),
            end_date: "2025-06-03".to_string(),
            ..good_form()
        };
        assert!(validate(&form, today()).is_ok());
    }

    #[test]
    fn equal_start_and_end_fails_with_end_after_start() {
        let form = TripForm {
            start_date: "2025-06-01".to_string(),
            end_date: "2025-06-01".to_string(),
            ..good_form()
        };
        assert_eq!(
            validate(&form, today()),
            Err(ValidationError::EndNotAfterStart)
        );
    }

    #[test]
    fn end_before_start_fails_with_end_after_start() {
        let form = TripForm {
            start_date: "2025-06-10".to_string(),
            end_date: "2025-06-08".to_string(),
            ..good_form()
        };
        assert_eq!(
            validate(&form, today()),
            Err(ValidationError::EndNotAfterStart)
        );
    }

    #[test]
    fn budget_below_minimum_is_rejected() {
        let form = TripForm {
            budget_amount: "999".to_string(),
            ..good_form()
        };
        assert_eq!(validate(&form, today()), Err(ValidationError::BudgetTooLow));
    }

    #[test]
    fn budget_at_minimum_is_accepted() {
        let form = TripForm {
            budget_amount: "1000".to_string(),
            ..good_form()
        };
        assert_eq!(validate(&form, today()).unwrap().budget_amount, 1000);
    }

    #[test]
    fn unparseable_budget_uses_the_budget_message() {
        let form = TripForm {
            budget_amount: "lots".to_string(),
            ..good_form()
        };
        assert_eq!(validate(&form, today()), Err(ValidationError::BudgetTooLow));
    }

    #[test]
    fn thirty_days_pass_but_thirty_one_fail() {
        let form = TripForm {
            start_date: "2025-06-01".to_string(),
            end_date: "2025-06-30".to_string(),
            ..good_form()
        };
        assert!(validate(&form, today()).is_ok());

        let form = TripForm {
            start_date: "2025-06-01".to_string(),
            end_date: "2025-07-01".to_string(),
            ..good_form()
        };
        assert_eq!(validate(&form, today()), Err(ValidationError::TripTooLong));
    }

    #[test]
    fn blank_currency_falls_back_to_inr() {
        let form = TripForm {
            currency: "  ".to_string(),
            ..good_form()
        };
        assert_eq!(validate(&form, today()).unwrap().currency, "INR");
    }
}
