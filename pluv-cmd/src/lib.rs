//! Command implementations for the rain gauge CLI.
//!
//! Every command loads the readings through a [`Session`], exactly like the
//! web dashboard, and prints what the page would show using
//! [`ConsoleDashboard`].

use clap::{Args, Subcommand};
use pluv_data::period::Period;
use pluv_data::MonthKey;
use pluv_session::source::{FileSource, HttpSource};
use pluv_session::view::month_options;
use pluv_session::{CsvSource, Dashboard, DashboardConfig, Session};
use pluv_utils::locale::Locale;
use std::path::PathBuf;

pub mod console;

pub use console::{ConsoleDashboard, Sections};

/// Where the readings come from and how they are labelled.
#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// Readings CSV: a local path or an http(s) URL (overrides the config file)
    #[arg(short, long)]
    pub csv: Option<String>,

    /// JSON config file with csv_path, default_period and locale
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Label locale: pt-BR or en-US (overrides the config file)
    #[arg(short, long)]
    pub locale: Option<Locale>,
}

impl DataArgs {
    /// The config file (or defaults) with command line overrides applied.
    pub fn resolve(&self) -> anyhow::Result<DashboardConfig> {
        let mut config = match &self.config {
            Some(path) => DashboardConfig::from_path(path)?,
            None => DashboardConfig::default(),
        };
        if let Some(csv) = &self.csv {
            config.csv_path = csv.clone();
        }
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Total, average and maximum for a trailing window
    Stats {
        /// Days to include ("7", "15", "30") or "all"; defaults to the config
        #[arg(short, long)]
        period: Option<Period>,

        #[command(flatten)]
        data: DataArgs,
    },

    /// Text bar chart of a trailing window
    Chart {
        #[arg(short, long)]
        period: Option<Period>,

        #[command(flatten)]
        data: DataArgs,
    },

    /// Readings table and stats for a trailing window
    Table {
        #[arg(short, long)]
        period: Option<Period>,

        #[command(flatten)]
        data: DataArgs,
    },

    /// Compare two months day by day
    Compare {
        /// First month, YYYY-MM
        first: MonthKey,

        /// Second month, YYYY-MM
        second: MonthKey,

        #[command(flatten)]
        data: DataArgs,
    },

    /// List the months that have readings, most recent first
    Months {
        #[command(flatten)]
        data: DataArgs,
    },
}

/// What to show once the readings are loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Stats(Option<Period>),
    Chart(Option<Period>),
    Table(Option<Period>),
    Compare(MonthKey, MonthKey),
    Months,
}

impl View {
    fn sections(&self) -> Sections {
        match self {
            View::Stats(_) => Sections {
                stats: true,
                ..Sections::default()
            },
            View::Chart(_) => Sections {
                chart: true,
                stats: true,
                ..Sections::default()
            },
            View::Table(_) => Sections {
                table: true,
                stats: true,
                ..Sections::default()
            },
            View::Compare(..) => Sections {
                chart: true,
                stats: true,
                ..Sections::default()
            },
            View::Months => Sections {
                months: true,
                ..Sections::default()
            },
        }
    }
}

impl Command {
    fn into_parts(self) -> (DataArgs, View) {
        match self {
            Command::Stats { period, data } => (data, View::Stats(period)),
            Command::Chart { period, data } => (data, View::Chart(period)),
            Command::Table { period, data } => (data, View::Table(period)),
            Command::Compare {
                first,
                second,
                data,
            } => (data, View::Compare(first, second)),
            Command::Months { data } => (data, View::Months),
        }
    }
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    let (data, view) = command.into_parts();
    let config = data.resolve()?;
    let output = if is_url(&config.csv_path) {
        let source = HttpSource::new(config.csv_path.clone());
        render(view, config, &source).await
    } else {
        let source = FileSource::new(config.csv_path.clone());
        render(view, config, &source).await
    };
    print!("{}", output);
    Ok(())
}

fn is_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// Load the readings from `source` and render `view` as text.
pub async fn render<S: CsvSource>(view: View, config: DashboardConfig, source: &S) -> String {
    let locale = config.locale;
    let mut ui = ConsoleDashboard::new(view.sections());
    let mut session = Session::new(config);
    session.load(source, &mut ui).await;

    match view {
        View::Stats(period) | View::Chart(period) | View::Table(period) => {
            let period = period.unwrap_or_else(|| session.current_period());
            session.select_period(period, &mut ui);
        }
        View::Compare(first, second) => {
            let months = session.available_months();
            for key in [first, second] {
                if !months.contains(&key) {
                    log::warn!("no readings for {}", key);
                }
            }
            // Entering comparison mode resets both selectors, so choose after.
            session.set_comparison_mode(true, &mut ui);
            session.select_months(Some(first), Some(second), &mut ui);
        }
        View::Months => {
            ui.show_month_options(&month_options(&session.available_months(), locale));
        }
    }
    ui.into_output()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pluv_core::FetchError;
    use pluv_session::source::StaticSource;

    const CSV: &str = "date,precipitation,notes
2024-05-01,3.0,Garoa
2024-05-03,0.0,
2024-06-01,1.0,
2024-06-02,4.0,\"Chuva forte, com vento\"
";

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.org/data/pluviometro.csv"));
        assert!(is_url("http://localhost:8080/pluviometro.csv"));
        assert!(!is_url("data/pluviometro.csv"));
        assert!(!is_url("/tmp/http.csv"));
    }

    #[test]
    fn test_data_args_override_config() {
        let args = DataArgs {
            csv: Some("other.csv".to_string()),
            config: None,
            locale: Some(Locale::EnUs),
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.csv_path, "other.csv");
        assert_eq!(config.locale, Locale::EnUs);
        assert_eq!(config.default_period, Period::Days(30));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args = DataArgs {
            config: Some(PathBuf::from("/definitely/not/here/pluviometro.json")),
            ..DataArgs::default()
        };
        assert!(args.resolve().is_err());
    }

    #[tokio::test]
    async fn test_stats_for_all_readings() {
        let source = StaticSource::ok(CSV);
        let out = render(View::Stats(Some(Period::All)), DashboardConfig::default(), &source).await;
        assert!(out.contains("Total: 8.0 mm"), "{}", out);
        assert!(out.contains("Average: 2.00 mm"), "{}", out);
        assert!(out.contains("Maximum: 4.0 mm"), "{}", out);
        assert!(out.contains("Date of maximum: 02/06/2024"), "{}", out);
        assert!(!out.contains("Garoa"));
    }

    #[tokio::test]
    async fn test_table_lists_rows_with_notes() {
        let source = StaticSource::ok(CSV);
        let config = DashboardConfig {
            locale: Locale::EnUs,
            ..DashboardConfig::default()
        };
        let out = render(View::Table(Some(Period::All)), config, &source).await;
        assert!(out.contains("05/01/2024"), "{}", out);
        assert!(out.contains("Chuva forte, com vento"), "{}", out);
        assert_eq!(out.matches("2024\t").count(), 4, "{}", out);
    }

    #[tokio::test]
    async fn test_compare_prints_day_series() {
        let source = StaticSource::ok(CSV);
        let first = MonthKey::new(2024, 5).unwrap();
        let second = MonthKey::new(2024, 6).unwrap();
        let out = render(View::Compare(first, second), DashboardConfig::default(), &source).await;
        assert!(out.contains("maio de 2024"), "{}", out);
        assert!(out.contains("junho de 2024"), "{}", out);
        assert!(out.contains("3\t0.0\t-"), "{}", out);
        assert!(out.contains("Total: 3.0 / 5.0 mm"), "{}", out);
    }

    #[tokio::test]
    async fn test_months_most_recent_first() {
        let source = StaticSource::ok(CSV);
        let out = render(View::Months, DashboardConfig::default(), &source).await;
        assert_eq!(out, "2024-06\tjunho de 2024\n2024-05\tmaio de 2024\n");
    }

    #[tokio::test]
    async fn test_failed_load_warns_and_uses_sample_readings() {
        let source = StaticSource::failing(FetchError::Transport("connection refused".to_string()));
        let out = render(View::Months, DashboardConfig::default(), &source).await;
        assert!(out.starts_with(console::LOAD_ERROR_BANNER), "{}", out);
        assert!(out.contains("2024-06\tjunho de 2024"), "{}", out);
    }
}
