use chrono::{Datelike, Timelike, Weekday};

/// Days and starting hour during which the peak surcharge applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeakWindow {
    pub days: Vec<Weekday>,
    pub start_hour: u32,
}

impl PeakWindow {
    pub fn new(days: Vec<Weekday>, start_hour: u32) -> Self {
        Self { days, start_hour }
    }

    /// True when the moment's local weekday is a peak day and its hour is at or past `start_hour`.
    pub fn contains<T: Datelike + Timelike>(&self, moment: &T) -> bool {
        self.days.contains(&moment.weekday()) && moment.hour() >= self.start_hour
    }
}

impl Default for PeakWindow {
    fn default() -> Self {
        Self::new(vec![Weekday::Fri, Weekday::Sat], 18)
    }
}

/// Friday or Saturday, from 18:00 local time.
pub fn is_peak_time<T: Datelike + Timelike>(moment: &T) -> bool {
    PeakWindow::default().contains(moment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_friday_and_saturday_evenings_are_peak() {
        // 2026-10-16 is a Friday
        assert!(is_peak_time(&at(2026, 10, 16, 18, 0)));
        assert!(is_peak_time(&at(2026, 10, 16, 23, 59)));
        assert!(is_peak_time(&at(2026, 10, 17, 19, 30)));
    }

    #[test]
    fn test_before_six_is_not_peak() {
        assert!(!is_peak_time(&at(2026, 10, 16, 17, 59)));
        assert!(!is_peak_time(&at(2026, 10, 17, 0, 0)));
    }

    #[test]
    fn test_other_days_are_never_peak() {
        assert!(!is_peak_time(&at(2026, 10, 18, 20, 0))); // Sunday
        assert!(!is_peak_time(&at(2026, 10, 15, 22, 0))); // Thursday
        assert!(!is_peak_time(&at(2026, 10, 12, 18, 0))); // Monday
    }

    #[test]
    fn test_custom_window() {
        let window = PeakWindow::new(vec![Weekday::Sun], 12);
        assert!(window.contains(&at(2026, 10, 18, 12, 0)));
        assert!(!window.contains(&at(2026, 10, 17, 20, 0)));
    }
}
