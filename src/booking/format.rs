//! Portuguese (Brazil) renderings of booking moments.
//!
//! The patterns are fixed so that output never depends on the environment's
//! locale settings.

use chrono::{Local, NaiveDateTime};

const PT_BR_DATE: &str = "%d/%m/%Y";
const PT_BR_TIME: &str = "%H:%M";
const PT_BR_DATE_TIME: &str = "%d/%m/%Y, %H:%M";

/// Current local wall-clock time.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// `dd/mm/yyyy`
pub fn format_date(moment: &NaiveDateTime) -> String {
    moment.format(PT_BR_DATE).to_string()
}

/// `HH:MM`, 24-hour.
pub fn format_time(moment: &NaiveDateTime) -> String {
    moment.format(PT_BR_TIME).to_string()
}

/// `dd/mm/yyyy, HH:MM`, as shown on the date/time field.
pub fn format_moment(moment: &NaiveDateTime) -> String {
    moment.format(PT_BR_DATE_TIME).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn moment(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_zero_padding() {
        let m = moment(2024, 5, 1, 9, 5);
        assert_eq!(format_date(&m), "01/05/2024");
        assert_eq!(format_time(&m), "09:05");
    }

    #[test]
    fn test_24_hour_clock() {
        let m = moment(2023, 12, 31, 23, 59);
        assert_eq!(format_time(&m), "23:59");
        assert_eq!(format_time(&moment(2023, 12, 31, 0, 0)), "00:00");
    }

    #[test]
    fn test_combined() {
        let m = moment(2024, 5, 1, 14, 5);
        assert_eq!(format_moment(&m), "01/05/2024, 14:05");
    }
}
