//! RevChart CLI: print, export and fetch revenue chart data.
//!
//! Commands:
//! - `show` (print the chart as a table; `*` marks labeled bars)
//! - `export` (write the chart view as JSON)
//! - `fetch` (save the raw records from a source as a JSON file)
//! - `companies` (list companies, their first non-zero year and selection)

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;

use revchart_core::config::{ChartConfig, SourceConfig};
use revchart_core::data::write_json_records;
use revchart_core::i18n::LanguageMode;
use revchart_core::pipeline::CurrencyMode;
use revchart_core::session::{SessionEvent, SessionState};
use revchart_core::view::ChartView;

#[derive(Parser)]
#[command(name = "revchart", about = "RevChart CLI: multi-company revenue chart data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the chart as a year-by-company table.
    Show {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Write the chart view (series, labels, strings) as JSON.
    Export {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        view: ViewArgs,

        /// Output file. Defaults to stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Fetch raw records and save them as a JSON array.
    Fetch {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file.
        #[arg(long, short)]
        output: PathBuf,
    },
    /// List companies with their first non-zero year.
    Companies {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Where records come from. Flags override the config file.
#[derive(Args, Debug, Default)]
struct SourceArgs {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fetch from an HTTP endpoint returning a JSON array of records.
    #[arg(long, conflicts_with_all = ["json", "csv", "sample"])]
    url: Option<String>,

    /// Read records from a JSON file.
    #[arg(long, conflicts_with_all = ["csv", "sample"])]
    json: Option<PathBuf>,

    /// Read records from a CSV file (header: ticker,index,Total Revenue).
    #[arg(long, conflicts_with = "sample")]
    csv: Option<PathBuf>,

    /// Use the built-in M7 sample records.
    #[arg(long, default_value_t = false)]
    sample: bool,
}

#[derive(Args, Debug, Default)]
struct ViewArgs {
    /// Currency to display.
    #[arg(long, value_enum)]
    currency: Option<CurrencyArg>,

    /// Display language: ja or en.
    #[arg(long, value_parser = parse_language)]
    lang: Option<LanguageMode>,

    /// Companies to select (comma-separated). Defaults to the first three.
    #[arg(long, value_delimiter = ',', conflicts_with = "all")]
    select: Vec<String>,

    /// Select every company.
    #[arg(long, default_value_t = false)]
    all: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CurrencyArg {
    /// US dollars, billions.
    Base,
    /// Yen, trillions.
    Converted,
}

impl From<CurrencyArg> for CurrencyMode {
    fn from(arg: CurrencyArg) -> Self {
        match arg {
            CurrencyArg::Base => CurrencyMode::Base,
            CurrencyArg::Converted => CurrencyMode::Converted,
        }
    }
}

fn parse_language(tag: &str) -> Result<LanguageMode, String> {
    LanguageMode::from_tag(tag).ok_or_else(|| format!("unknown language '{tag}' (use ja or en)"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { source, view } => {
            let chart = build_chart(&source, &view)?;
            print!("{}", render_table(&chart));
            Ok(())
        }
        Commands::Export {
            source,
            view,
            output,
        } => run_export(&source, &view, output),
        Commands::Fetch { source, output } => run_fetch(&source, &output),
        Commands::Companies { source } => run_companies(&source),
    }
}

/// Config file (or defaults), then environment, then command-line flags.
fn resolve_config(args: &SourceArgs, view: Option<&ViewArgs>) -> Result<ChartConfig> {
    let mut config = ChartConfig::load(args.config.as_deref())
        .with_context(|| format!("loading config {:?}", args.config))?;

    if let Some(url) = &args.url {
        config.source = SourceConfig::http(url.clone());
    } else if let Some(path) = &args.json {
        config.source = SourceConfig::Json { path: path.clone() };
    } else if let Some(path) = &args.csv {
        config.source = SourceConfig::Csv { path: path.clone() };
    } else if args.sample {
        config.source = SourceConfig::Sample;
    }

    if let Some(view) = view {
        if let Some(currency) = view.currency {
            config.currency = currency.into();
        }
        if let Some(lang) = view.lang {
            config.language = lang;
        }
    }
    Ok(config)
}

fn load_session(config: &ChartConfig) -> SessionState {
    let source = config.source.build();
    SessionState::load_from(config.session_settings(), source.as_ref())
}

/// Toggle companies until the selection matches the request.
fn apply_selection(mut state: SessionState, view: &ViewArgs) -> SessionState {
    if !view.all && view.select.is_empty() {
        return state;
    }
    let wanted = |company: &str| {
        view.all || view.select.iter().any(|s| s.eq_ignore_ascii_case(company))
    };

    let flips: Vec<String> = state
        .companies()
        .into_iter()
        .filter(|&c| state.selection().contains(c) != wanted(c))
        .map(str::to_string)
        .collect();
    for company in flips {
        state = state.apply(SessionEvent::ToggleCompany(company));
    }
    state
}

fn build_chart(source: &SourceArgs, view: &ViewArgs) -> Result<ChartView> {
    let config = resolve_config(source, Some(view))?;
    let state = apply_selection(load_session(&config), view);
    Ok(state.view())
}

fn run_export(source: &SourceArgs, view: &ViewArgs, output: Option<PathBuf>) -> Result<()> {
    let chart = build_chart(source, view)?;
    let json = serde_json::to_string_pretty(&chart)?;
    match output {
        Some(path) => {
            std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), series = chart.series.len(), "chart view exported");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn run_fetch(args: &SourceArgs, output: &Path) -> Result<()> {
    let config = resolve_config(args, None)?;
    let source = config.source.build();
    let records = source
        .fetch_all()
        .with_context(|| format!("fetching records from {}", source.name()))?;
    write_json_records(output, &records)
        .with_context(|| format!("saving records to {}", output.display()))?;
    println!("Saved {} records to {}", records.len(), output.display());
    Ok(())
}

fn run_companies(args: &SourceArgs) -> Result<()> {
    let config = resolve_config(args, None)?;
    let state = load_session(&config);
    print!("{}", render_companies(&state));
    Ok(())
}

fn render_companies(state: &SessionState) -> String {
    let view = state.view();
    if let Some(notice) = view.notice_text().filter(|_| view.companies.is_empty()) {
        return format!("{notice}\n");
    }

    let mut out = String::new();
    for option in &view.companies {
        let mark = if option.selected { "[x]" } else { "[ ]" };
        let first = state
            .first_non_zero()
            .get(&option.company)
            .map_or_else(|| "-".to_string(), |y| y.to_string());
        out.push_str(&format!("{mark} {:<8} {first}\n", option.company));
    }
    out
}

/// Year-by-company table; `*` marks the values a chart would label.
fn render_table(view: &ChartView) -> String {
    let strings = &view.strings;
    let mut out = format!("{}\n{}\n\n", strings.title, view.value_axis_title());

    if view.series.is_empty() {
        if let Some(notice) = view.notice_text() {
            out.push_str(notice);
            out.push('\n');
        }
        return out;
    }

    let width = view
        .series
        .iter()
        .flat_map(|s| s.cells.iter())
        .filter_map(|c| c.display.as_ref().map(|d| d.chars().count()))
        .max()
        .unwrap_or(1)
        .max(4)
        + 1;

    out.push_str(&format!("{:<8}", strings.year_axis));
    for year in &view.years {
        out.push_str(&format!(" {year:>width$}"));
    }
    out.push('\n');

    for series in &view.series {
        out.push_str(&format!("{:<8}", series.company));
        for cell in &series.cells {
            let text = match &cell.display {
                Some(display) if cell.show_label => format!("{display}*"),
                Some(display) => display.clone(),
                None => "-".to_string(),
            };
            out.push_str(&format!(" {text:>width$}"));
        }
        out.push('\n');
    }

    if view.skipped_records > 0 {
        out.push_str(&format!("\n{} {}\n", view.skipped_records, strings.skipped_records));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    fn sample_view(view: ViewArgs) -> ChartView {
        let source = SourceArgs {
            sample: true,
            ..SourceArgs::default()
        };
        build_chart(&source, &view).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_show_flags() {
        let cli = Cli::try_parse_from([
            "revchart", "show", "--sample", "--currency", "converted", "--lang", "en", "--select",
            "AAPL,NVDA",
        ])
        .unwrap();
        let Commands::Show { source, view } = cli.command else {
            panic!("expected show");
        };
        assert!(source.sample);
        assert!(matches!(view.currency, Some(CurrencyArg::Converted)));
        assert_eq!(view.lang, Some(LanguageMode::Secondary));
        assert_eq!(view.select, vec!["AAPL", "NVDA"]);
    }

    #[test]
    fn conflicting_sources_are_rejected() {
        assert!(Cli::try_parse_from(["revchart", "companies", "--sample", "--url", "http://x"])
            .is_err());
        assert!(Cli::try_parse_from(["revchart", "show", "--lang", "fr"]).is_err());
    }

    #[test]
    fn select_flag_replaces_default_selection() {
        let view = sample_view(ViewArgs {
            select: vec!["nvda".into(), "TSLA".into()],
            lang: Some(LanguageMode::Secondary),
            ..ViewArgs::default()
        });
        let drawn: Vec<&str> = view.series.iter().map(|s| s.company.as_str()).collect();
        assert_eq!(drawn, vec!["NVDA", "TSLA"]);
    }

    #[test]
    fn all_flag_selects_every_company() {
        let view = sample_view(ViewArgs {
            all: true,
            ..ViewArgs::default()
        });
        assert_eq!(view.series.len(), 7);
    }

    #[test]
    fn table_marks_labeled_cells() {
        let view = sample_view(ViewArgs {
            lang: Some(LanguageMode::Secondary),
            ..ViewArgs::default()
        });
        let table = render_table(&view);
        assert!(table.starts_with("M7 Revenue Trends\nRevenue ($B)\n"));
        let aapl = table.lines().find(|l| l.starts_with("AAPL")).unwrap();
        assert!(aapl.contains("$274.5B*"));
        assert!(aapl.contains("$365.8B "));
        assert!(aapl.trim_end().ends_with("$391.0B*"));
    }

    #[test]
    fn table_shows_prompt_for_empty_selection() {
        let source = SourceArgs {
            sample: true,
            ..SourceArgs::default()
        };
        let view_args = ViewArgs {
            lang: Some(LanguageMode::Secondary),
            ..ViewArgs::default()
        };
        let config = resolve_config(&source, Some(&view_args)).unwrap();
        let state = ["AAPL", "MSFT", "GOOGL"]
            .into_iter()
            .fold(load_session(&config), |s, c| {
                s.apply(SessionEvent::ToggleCompany(c.into()))
            });
        let table = render_table(&state.view());
        assert!(table.ends_with("Select at least one company\n"));
    }

    #[test]
    fn companies_list_reports_first_non_zero_year() {
        let source = SourceArgs {
            sample: true,
            ..SourceArgs::default()
        };
        let state = load_session(&resolve_config(&source, None).unwrap());
        let listing = render_companies(&state);
        assert!(listing.contains("[x] AAPL     2020"));
        assert!(listing.contains("[ ] NVDA     2021"));
    }

    #[test]
    fn fetch_saves_records_from_csv() {
        let mut csv = tempfile::NamedTempFile::new().unwrap();
        writeln!(csv, "ticker,index,Total Revenue").unwrap();
        writeln!(csv, "AMZN,2024-12-31,637959000000").unwrap();
        csv.flush().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("records.json");
        let source = SourceArgs {
            csv: Some(csv.path().to_path_buf()),
            ..SourceArgs::default()
        };
        run_fetch(&source, &output).unwrap();

        let saved = std::fs::read_to_string(&output).unwrap();
        assert!(saved.contains("\"ticker\": \"AMZN\""));
    }
}
