//! Log filtering and projection primitives.
//!
//! A [`LogFilter`] is a small composable constraint spec evaluated by the
//! exercise store: an inclusive calendar-date range plus an optional result
//! cap. Keeping it a plain value decouples filter semantics from any
//! query-building API the store might use.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Description, DurationMinutes, ExerciseEntry};

/// Optional constraints applied to a log retrieval.
///
/// Both date bounds are inclusive, and the two predicates commute: the
/// result set never depends on the order the bounds were supplied.
///
/// # Examples
/// ```
/// use backend::domain::LogFilter;
/// use chrono::NaiveDate;
///
/// let date = |s: &str| s.parse::<NaiveDate>().unwrap();
/// let filter = LogFilter::new(Some(date("2023-01-01")), Some(date("2023-01-31")), None);
/// assert!(filter.matches(date("2023-01-01")));
/// assert!(filter.matches(date("2023-01-31")));
/// assert!(!filter.matches(date("2023-02-01")));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFilter {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    limit: Option<usize>,
}

impl LogFilter {
    /// Build a filter from optional bounds and an optional result cap.
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>, limit: Option<usize>) -> Self {
        Self { from, to, limit }
    }

    /// Inclusive lower date bound, if any.
    pub fn from(&self) -> Option<NaiveDate> {
        self.from
    }

    /// Inclusive upper date bound, if any.
    pub fn to(&self) -> Option<NaiveDate> {
        self.to
    }

    /// Maximum number of entries to retain, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Whether a calendar date satisfies the inclusive range.
    pub fn matches(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }

    /// Evaluate the filter over a batch of entries.
    ///
    /// Retains entries inside the date range, stable-sorts them by date
    /// ascending so truncation is deterministic, then applies the cap.
    /// The cap always acts on the filtered set, never the raw one.
    pub fn apply(&self, entries: Vec<ExerciseEntry>) -> Vec<ExerciseEntry> {
        let mut retained: Vec<ExerciseEntry> = entries
            .into_iter()
            .filter(|entry| self.matches(entry.date()))
            .collect();
        retained.sort_by_key(ExerciseEntry::date);
        if let Some(limit) = self.limit {
            retained.truncate(limit);
        }
        retained
    }
}

/// Projection of an [`ExerciseEntry`] for log responses.
///
/// Drops the identifiers; a log line is read in the context of its user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseLogEntry {
    description: Description,
    duration: DurationMinutes,
    date: NaiveDate,
}

impl ExerciseLogEntry {
    /// What was done.
    pub fn description(&self) -> &Description {
        &self.description
    }

    /// How long it took.
    pub fn duration(&self) -> DurationMinutes {
        self.duration
    }

    /// Calendar date the exercise took place.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Date rendered the way clients display it, e.g. `Tue Jan 10 2023`.
    pub fn date_display(&self) -> String {
        self.date.format("%a %b %d %Y").to_string()
    }
}

impl From<ExerciseEntry> for ExerciseLogEntry {
    fn from(entry: ExerciseEntry) -> Self {
        Self {
            description: entry.description().clone(),
            duration: entry.duration(),
            date: entry.date(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExerciseId, UserId};
    use rstest::rstest;

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("valid date literal")
    }

    fn entry(user_id: UserId, description: &str, day: &str) -> ExerciseEntry {
        ExerciseEntry::new(
            ExerciseId::random(),
            user_id,
            Description::new(description).expect("valid description"),
            DurationMinutes::new(30).expect("valid duration"),
            date(day),
        )
    }

    #[rstest]
    #[case(None, None, "2023-06-15", true)]
    #[case(Some("2023-01-10"), None, "2023-01-10", true)]
    #[case(Some("2023-01-10"), None, "2023-01-09", false)]
    #[case(None, Some("2023-01-10"), "2023-01-10", true)]
    #[case(None, Some("2023-01-10"), "2023-01-11", false)]
    #[case(Some("2023-01-01"), Some("2023-01-31"), "2023-01-01", true)]
    #[case(Some("2023-01-01"), Some("2023-01-31"), "2023-01-31", true)]
    #[case(Some("2023-01-01"), Some("2023-01-31"), "2022-12-31", false)]
    #[case(Some("2023-01-01"), Some("2023-01-31"), "2023-02-01", false)]
    fn matches_is_inclusive_on_both_ends(
        #[case] from: Option<&str>,
        #[case] to: Option<&str>,
        #[case] probe: &str,
        #[case] expected: bool,
    ) {
        let filter = LogFilter::new(from.map(date), to.map(date), None);
        assert_eq!(filter.matches(date(probe)), expected);
    }

    #[test]
    fn range_predicates_commute() {
        let user_id = UserId::random();
        let entries = vec![
            entry(user_id, "a", "2023-01-05"),
            entry(user_id, "b", "2023-01-15"),
            entry(user_id, "c", "2023-01-25"),
        ];

        let combined = LogFilter::new(Some(date("2023-01-10")), Some(date("2023-01-20")), None)
            .apply(entries.clone());
        let from_then_to = LogFilter::new(None, Some(date("2023-01-20")), None).apply(
            LogFilter::new(Some(date("2023-01-10")), None, None).apply(entries),
        );

        assert_eq!(combined, from_then_to);
        assert_eq!(combined.len(), 1);
    }

    #[test]
    fn truncation_acts_on_the_filtered_set() {
        let user_id = UserId::random();
        // Two out-of-range entries precede the in-range ones; a cap of two
        // must still return two in-range entries.
        let entries = vec![
            entry(user_id, "early-1", "2022-12-01"),
            entry(user_id, "early-2", "2022-12-02"),
            entry(user_id, "in-1", "2023-01-10"),
            entry(user_id, "in-2", "2023-01-11"),
            entry(user_id, "in-3", "2023-01-12"),
        ];

        let filter = LogFilter::new(Some(date("2023-01-01")), None, Some(2));
        let retained = filter.apply(entries);

        assert_eq!(retained.len(), 2);
        assert_eq!(retained[0].description().as_ref(), "in-1");
        assert_eq!(retained[1].description().as_ref(), "in-2");
    }

    #[test]
    fn apply_sorts_by_date_ascending_before_truncating() {
        let user_id = UserId::random();
        let entries = vec![
            entry(user_id, "newest", "2023-03-01"),
            entry(user_id, "oldest", "2023-01-01"),
            entry(user_id, "middle", "2023-02-01"),
        ];

        let retained = LogFilter::new(None, None, Some(2)).apply(entries);

        assert_eq!(retained[0].description().as_ref(), "oldest");
        assert_eq!(retained[1].description().as_ref(), "middle");
    }

    #[test]
    fn apply_keeps_insertion_order_for_same_day_entries() {
        let user_id = UserId::random();
        let entries = vec![
            entry(user_id, "first", "2023-01-10"),
            entry(user_id, "second", "2023-01-10"),
        ];

        let retained = LogFilter::default().apply(entries);

        assert_eq!(retained[0].description().as_ref(), "first");
        assert_eq!(retained[1].description().as_ref(), "second");
    }

    #[test]
    fn log_entry_renders_date_like_clients_expect() {
        let user_id = UserId::random();
        let projected = ExerciseLogEntry::from(entry(user_id, "run", "2023-01-10"));
        assert_eq!(projected.date_display(), "Tue Jan 10 2023");
    }
}
