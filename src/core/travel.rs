use chrono::NaiveDate;

/// Whole calendar days from `today` until the trip; negative once it has passed.
pub fn days_to_travel(travel_date: NaiveDate, today: NaiveDate) -> i64 {
    (travel_date - today).num_days()
}

/// Countdown label for the travel card.
pub fn countdown_label(days: i64) -> String {
    match days {
        d if d < 0 => "Trip completed".to_string(),
        0 => "It's today!".to_string(),
        d if d > 30 => {
            let months = d / 30;
            if months == 1 {
                "1 month to go".to_string()
            } else {
                format!("{} months to go", months)
            }
        }
        1 => "1 day to go".to_string(),
        d => format!("{} days to go", d),
    }
}
