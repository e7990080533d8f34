//! Shared utility functions for pluviometro crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, Days, Local, NaiveDate};

    /// Date format accepted in the readings CSV: "YYYY-MM-DD"
    pub const ISO_FORMAT: &str = "%Y-%m-%d";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_iso(date: &NaiveDate) -> String {
        date.format(ISO_FORMAT).to_string()
    }

    /// True when `s` is exactly four digits, a dash, two digits, a dash, two digits.
    pub fn has_iso_shape(s: &str) -> bool {
        let bytes = s.as_bytes();
        bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            })
    }

    /// Parse a strict "YYYY-MM-DD" date.
    ///
    /// Only the exact field widths are accepted (no `2024-6-1`, no time part).
    /// The numbers must also name a real calendar day: `2024-02-30` is rejected.
    pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
        if !has_iso_shape(s) {
            return None;
        }
        let year: i32 = s[0..4].parse().ok()?;
        let month: u32 = s[5..7].parse().ok()?;
        let day: u32 = s[8..10].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
            .filter(|d| d.year() == year && d.month() == month && d.day() == day)
    }

    /// Today's date on the local wall clock.
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// The date `days` days before `date`, saturating at the earliest representable date.
    pub fn days_before(date: NaiveDate, days: u32) -> NaiveDate {
        date.checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_iso_date_accepts_exact_shape() {
            let date = parse_iso_date("2024-06-15").unwrap();
            assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
            assert_eq!(format_iso(&date), "2024-06-15");
        }

        #[test]
        fn test_parse_iso_date_rejects_other_shapes() {
            assert!(parse_iso_date("2024-6-15").is_none());
            assert!(parse_iso_date("15/06/2024").is_none());
            assert!(parse_iso_date("2024-06-15T00:00").is_none());
            assert!(parse_iso_date("20240615").is_none());
            assert!(parse_iso_date("").is_none());
            assert!(parse_iso_date("2024-0a-15").is_none());
        }

        #[test]
        fn test_parse_iso_date_rejects_impossible_days() {
            assert!(parse_iso_date("2024-02-30").is_none());
            assert!(parse_iso_date("2023-02-29").is_none());
            assert!(parse_iso_date("2024-04-31").is_none());
            assert!(parse_iso_date("2024-13-01").is_none());
            assert!(parse_iso_date("2024-00-10").is_none());
            assert!(parse_iso_date("2024-02-29").is_some());
        }

        #[test]
        fn test_days_before() {
            let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
            assert_eq!(days_before(date, 7), NaiveDate::from_ymd_opt(2024, 2, 27).unwrap());
            assert_eq!(days_before(date, 0), date);
        }
    }
}

/// Locale-aware labels for dates and months.
pub mod locale {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};
    use std::fmt;
    use std::str::FromStr;

    const MONTHS_PT: [&str; 12] = [
        "janeiro", "fevereiro", "março", "abril", "maio", "junho",
        "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
    ];

    const MONTHS_EN: [&str; 12] = [
        "January", "February", "March", "April", "May", "June",
        "July", "August", "September", "October", "November", "December",
    ];

    /// Display locale for dates and month labels.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum Locale {
        #[default]
        #[serde(rename = "pt-BR")]
        PtBr,
        #[serde(rename = "en-US")]
        EnUs,
    }

    impl Locale {
        /// Short numeric date: `dd/mm/yyyy` for pt-BR, `mm/dd/yyyy` for en-US.
        pub fn format_date(&self, date: &NaiveDate) -> String {
            match self {
                Locale::PtBr => date.format("%d/%m/%Y").to_string(),
                Locale::EnUs => date.format("%m/%d/%Y").to_string(),
            }
        }

        /// Full month name for a 1-based month, or None when out of range.
        pub fn month_name(&self, month: u32) -> Option<&'static str> {
            let idx = usize::try_from(month.checked_sub(1)?).ok()?;
            match self {
                Locale::PtBr => MONTHS_PT.get(idx).copied(),
                Locale::EnUs => MONTHS_EN.get(idx).copied(),
            }
        }

        /// Month and year label, e.g. "junho de 2024" or "June 2024".
        pub fn month_label(&self, year: i32, month: u32) -> String {
            let name = self.month_name(month).unwrap_or("?");
            match self {
                Locale::PtBr => format!("{} de {}", name, year),
                Locale::EnUs => format!("{} {}", name, year),
            }
        }
    }

    impl fmt::Display for Locale {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Locale::PtBr => write!(f, "pt-BR"),
                Locale::EnUs => write!(f, "en-US"),
            }
        }
    }

    /// Unknown locale tag.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct UnknownLocale(pub String);

    impl fmt::Display for UnknownLocale {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "unknown locale: {}", self.0)
        }
    }

    impl std::error::Error for UnknownLocale {}

    impl FromStr for Locale {
        type Err = UnknownLocale;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "pt-br" | "pt_br" | "pt" => Ok(Locale::PtBr),
                "en-us" | "en_us" | "en" => Ok(Locale::EnUs),
                _ => Err(UnknownLocale(s.to_string())),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_date_per_locale() {
            let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
            assert_eq!(Locale::PtBr.format_date(&date), "05/06/2024");
            assert_eq!(Locale::EnUs.format_date(&date), "06/05/2024");
        }

        #[test]
        fn test_month_label() {
            assert_eq!(Locale::PtBr.month_label(2024, 6), "junho de 2024");
            assert_eq!(Locale::EnUs.month_label(2024, 3), "March 2024");
            assert_eq!(Locale::PtBr.month_name(0), None);
            assert_eq!(Locale::PtBr.month_name(13), None);
        }

        #[test]
        fn test_locale_from_str_and_display() {
            assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
            assert_eq!("en".parse::<Locale>().unwrap(), Locale::EnUs);
            assert!("fr-FR".parse::<Locale>().is_err());
            assert_eq!(Locale::default().to_string(), "pt-BR");
        }
    }
}
