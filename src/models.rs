use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw form fields exactly as a page delivers them, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct TripForm {
    pub start_location: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub budget_amount: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for TripForm {
    fn default() -> Self {
        Self {
            start_location: String::new(),
            destination: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            budget_amount: String::new(),
            currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    "INR".to_string()
}

/// Validated trip-generation payload, form-encoded for `POST /generate_trip`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    pub start_location: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget_amount: u32,
    pub currency: String,
}

impl TripRequest {
    /// Inclusive day count, the same figure the backend stores as `duration`.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// Budget block as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub amount: f64,
    pub currency: String,
    pub symbol: String,
}

/// A generated trip as the backend describes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripResult {
    pub trip_id: String,
    pub title: String,
    pub start_location: String,
    pub destination: String,
    pub duration: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: Budget,
    pub status: String,
    /// Raw itinerary text; classify it with [`crate::format::format_itinerary`].
    pub trip_plan: String,
}

/// Reply envelope for `POST /generate_trip`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateTripResponse {
    pub success: bool,
    #[serde(default)]
    pub trip: Option<TripResult>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
}

/// Reply envelope for `POST /save_trip/{trip_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveTripResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply envelope for `GET /api/recent_trips`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecentTripsResponse {
    pub success: bool,
    #[serde(default)]
    pub trips: Vec<TripResult>,
}

/// Aggregate figures shown on the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripStats {
    pub total_trips: u32,
    pub countries_visited: u32,
    pub total_days: u32,
    pub total_budget: f64,
}

/// Reply envelope for `GET /api/trip_stats`.
#[derive(Debug, Clone, Deserialize)]
pub struct TripStatsResponse {
    pub success: bool,
    #[serde(default)]
    pub stats: Option<TripStats>,
}

/// Reply for `GET /api/calculate_min_budget`.
#[derive(Debug, Clone, Deserialize)]
pub struct MinBudgetResponse {
    pub min_budget: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERATED_TRIP: &str = r#"{
        "success": true,
        "trip": {
            "trip_id": "7c1a9f2e",
            "title": "Mumbai to Bali",
            "start_location": "Mumbai",
            "destination": "Bali",
            "duration": 5,
            "start_date": "2025-11-03",
            "end_date": "2025-11-07",
            "budget": {"amount": 85000.0, "currency": "INR", "symbol": "₹"},
            "status": "completed",
            "trip_plan": "Day 1\n- Arrive and check in\nRelax by the beach"
        }
    }"#;

    #[test]
    fn parse_generated_trip_reply() {
        let reply: GenerateTripResponse = serde_json::from_str(GENERATED_TRIP).unwrap();
        assert!(reply.success);
        assert!(reply.message.is_none());
        assert!(reply.redirect.is_none());

        let trip = reply.trip.unwrap();
        assert_eq!(trip.trip_id, "7c1a9f2e");
        assert_eq!(trip.duration, 5);
        assert_eq!(trip.start_date, NaiveDate::from_ymd_opt(2025, 11, 3).unwrap());
        assert_eq!(trip.budget.amount, 85000.0);
        assert_eq!(trip.budget.symbol, "₹");
    }

    #[test]
    fn parse_rejection_without_message() {
        let reply: GenerateTripResponse =
            serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!reply.success);
        assert!(reply.trip.is_none());
        assert!(reply.message.is_none());
    }

    #[test]
    fn trip_request_serializes_wire_dates() {
        let request = TripRequest {
            start_location: "Delhi".to_string(),
            destination: "Goa".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 24).unwrap(),
            budget_amount: 40000,
            currency: "INR".to_string(),
        };
        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(encoded["start_date"], "2025-12-20");
        assert_eq!(encoded["budget_amount"], 40000);
        assert_eq!(request.duration_days(), 5);
    }

    #[test]
    fn parse_trip_stats_reply() {
        let reply: TripStatsResponse = serde_json::from_str(
            r#"{"success": true, "stats": {"total_trips": 12, "countries_visited": 4,
                "total_days": 61, "total_budget": 410000}}"#,
        )
        .unwrap();
        let stats = reply.stats.unwrap();
        assert_eq!(stats.total_trips, 12);
        assert_eq!(stats.total_budget, 410000.0);
    }

    #[test]
    fn form_defaults_to_inr() {
        assert_eq!(TripForm::default().currency, "INR");
    }
}
