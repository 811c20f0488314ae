use chrono::{Days, Local};
use rand::Rng;

pub const HISTORY_DAYS: usize = 10;

// Stands in for whatever the runtime's default date representation would be.
const DATE_FORMAT: &str = "%x";

/// One synthesized day of past weather.
#[derive(Debug, Clone)]
pub struct HistoryRecord {
    pub date: String,
    pub temperature: i32,
    pub feels_like: i32,
    pub condition: String,
}

/// Fabricate the ten most recent days of "history", newest first.
///
/// The city is accepted for symmetry with the live lookup but has no effect
/// on the records.
pub fn fetch_history(_city: &str) -> Vec<HistoryRecord> {
    // TODO: Read past conditions from a real data source.
    let today = Local::now().date_naive();
    let mut rng = rand::rng();

    (0..HISTORY_DAYS)
        .map(|age| {
            let date = today - Days::new(age as u64);
            HistoryRecord {
                date: date.format(DATE_FORMAT).to_string(),
                temperature: rng.random_range(0..35),
                feels_like: rng.random_range(0..35),
                condition: "Clear sky".to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn parsed_dates(records: &[HistoryRecord]) -> Vec<NaiveDate> {
        records
            .iter()
            .map(|record| {
                NaiveDate::parse_from_str(&record.date, DATE_FORMAT)
                    .expect("record dates should parse back")
            })
            .collect()
    }

    #[test]
    fn always_exactly_ten_records() {
        assert_eq!(fetch_history("Delhi").len(), HISTORY_DAYS);
        assert_eq!(fetch_history("").len(), HISTORY_DAYS);
        assert_eq!(fetch_history("nowhere in particular").len(), HISTORY_DAYS);
    }

    #[test]
    fn dates_step_back_one_calendar_day_at_a_time() {
        let before = Local::now().date_naive();
        let records = fetch_history("Delhi");
        let after = Local::now().date_naive();

        let dates = parsed_dates(&records);
        // Either bound is fine if the test straddles midnight.
        assert!(dates[0] == before || dates[0] == after);
        for (newer, older) in dates.iter().zip(dates.iter().skip(1)) {
            assert_eq!(*newer - *older, Duration::days(1));
        }
    }

    #[test]
    fn values_stay_in_range_and_the_condition_is_fixed() {
        for _ in 0..50 {
            for record in fetch_history("Delhi") {
                assert!((0..35).contains(&record.temperature));
                assert!((0..35).contains(&record.feels_like));
                assert_eq!(record.condition, "Clear sky");
            }
        }
    }

    #[test]
    fn every_call_draws_fresh_values() {
        let draws = |records: Vec<HistoryRecord>| -> Vec<(i32, i32)> {
            records
                .iter()
                .map(|record| (record.temperature, record.feels_like))
                .collect()
        };
        let first = draws(fetch_history("Delhi"));
        let second = draws(fetch_history("Delhi"));
        // Twenty independent draws over [0,35) only repeat wholesale with
        // probability 35^-20.
        assert_ne!(first, second);
    }
}
