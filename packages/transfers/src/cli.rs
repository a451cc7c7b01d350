//! Command-line interface for the transfer scraper.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{catalog_league, current_season, validate_season, DEFAULT_LEAGUES, LEAGUES};
use crate::error::{Result, TransferError};
use crate::export::save_csv;
use crate::harvester::Harvester;
use crate::http::create_client;
use crate::normalize::normalize_table;
use crate::rows::RowParser;
use crate::types::{InternalFilter, League, LoanFilter, Site, TransferRequest, Window};

/// Transfermarkt transfer scraper - Download league transfer tables to CSV.
#[derive(Parser)]
#[command(name = "tm-transfers")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape transfers for the selected leagues and seasons.
    Scrape {
        /// Site edition, which decides the currency of fees
        #[arg(long, value_enum, default_value_t = Site::default())]
        site: Site,

        /// Override the site base URL
        #[arg(long)]
        base_url: Option<String>,

        /// League numbers from `leagues`, e.g. "1 3-5" (default: 1-5)
        #[arg(short, long)]
        leagues: Option<String>,

        /// Season start years, e.g. "2019 2021-2023" (default: current season)
        #[arg(short, long)]
        seasons: Option<String>,

        /// Transfer window to scrape
        #[arg(short, long, value_enum, default_value_t = WindowArg::Both)]
        window: WindowArg,

        /// Which loan movements to list
        #[arg(long, value_enum, default_value_t = LoanFilter::default())]
        loans: LoanFilter,

        /// Include moves between a club and its own reserve sides
        #[arg(long)]
        include_internal: bool,

        /// Export raw cell text without normalization
        #[arg(long)]
        raw: bool,

        /// Output directory (default: data/)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the selectable leagues.
    Leagues,
}

/// Window selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WindowArg {
    Both,
    Summer,
    Winter,
}

impl WindowArg {
    /// The single window to scrape, or `None` for both.
    #[must_use]
    pub fn window(self) -> Option<Window> {
        match self {
            Self::Both => None,
            Self::Summer => Some(Window::Summer),
            Self::Winter => Some(Window::Winter),
        }
    }
}

/// Options shared by every league season of one scrape run.
struct ScrapeOptions {
    site: Site,
    base_url: Option<String>,
    window: Option<Window>,
    loans: LoanFilter,
    internal: InternalFilter,
    raw: bool,
}

/// Parse a selection of numbers and inclusive ranges.
///
/// `check` is applied to both ends of every range before anything is
/// expanded, so it must accept a contiguous domain. Duplicates are dropped;
/// first occurrence order is kept.
///
/// # Examples
/// ```
/// use tm_transfers::cli::parse_selection;
/// use tm_transfers::config::catalog_league;
///
/// let leagues = parse_selection("1 3-5", |n| catalog_league(n).map(drop)).unwrap();
/// assert_eq!(leagues, vec![1, 3, 4, 5]);
/// assert!(parse_selection("5-3", |_| Ok(())).is_err());
/// assert!(parse_selection("1-4000000000", |n| catalog_league(n).map(drop)).is_err());
/// ```
pub fn parse_selection(input: &str, check: impl Fn(u32) -> Result<()>) -> Result<Vec<u32>> {
    let invalid = || TransferError::InvalidSelection(input.to_string());

    let mut ranges = Vec::new();
    for token in input.split_whitespace() {
        let (start, end) = match token.split_once('-') {
            Some((start, end)) => (start, end),
            None => (token, token),
        };
        let start: u32 = start.parse().map_err(|_| invalid())?;
        let end: u32 = end.parse().map_err(|_| invalid())?;
        if start > end {
            return Err(invalid());
        }
        check(start)?;
        check(end)?;
        ranges.push(start..=end);
    }

    if ranges.is_empty() {
        return Err(invalid());
    }

    let mut seen = HashSet::new();
    Ok(ranges
        .into_iter()
        .flatten()
        .filter(|n| seen.insert(*n))
        .collect())
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scrape {
            site,
            base_url,
            leagues,
            seasons,
            window,
            loans,
            include_internal,
            raw,
            output,
        } => {
            let options = ScrapeOptions {
                site,
                base_url,
                window: window.window(),
                loans,
                internal: if include_internal {
                    InternalFilter::Include
                } else {
                    InternalFilter::Exclude
                },
                raw,
            };
            scrape_command(
                leagues.as_deref(),
                seasons.as_deref(),
                &options,
                output.as_deref(),
            )
        }
        Commands::Leagues => {
            leagues_command();
            Ok(())
        }
    }
}

/// Execute the leagues command.
fn leagues_command() {
    for entry in &LEAGUES {
        println!(
            "{:>3}  {} ({}, {})",
            style(entry.number).bold(),
            entry.label,
            style(entry.slug).cyan(),
            entry.id
        );
    }
}

/// Resolve the league and season selections, validating all of them.
fn resolve_selection(leagues: Option<&str>, seasons: Option<&str>) -> Result<(Vec<League>, Vec<i32>)> {
    let league_numbers = match leagues {
        Some(selection) => parse_selection(selection, |n| catalog_league(n).map(drop))?,
        None => DEFAULT_LEAGUES.to_vec(),
    };
    let leagues = league_numbers
        .into_iter()
        .map(catalog_league)
        .collect::<Result<Vec<_>>>()?;

    let seasons = match seasons {
        Some(selection) => {
            let to_season = |n: u32| {
                i32::try_from(n).map_err(|_| TransferError::InvalidSelection(selection.to_string()))
            };
            parse_selection(selection, |n| validate_season(to_season(n)?))?
                .into_iter()
                .map(to_season)
                .collect::<Result<Vec<_>>>()?
        }
        None => vec![current_season()],
    };

    Ok((leagues, seasons))
}

/// Execute the scrape command.
fn scrape_command(
    leagues: Option<&str>,
    seasons: Option<&str>,
    options: &ScrapeOptions,
    output: Option<&Path>,
) -> Result<()> {
    // Validate inputs before making HTTP requests
    let (leagues, seasons) = resolve_selection(leagues, seasons)?;

    if let Some(output_dir) = output {
        if output_dir.exists() && !output_dir.is_dir() {
            return Err(TransferError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Output path is not a directory: {}", output_dir.display()),
            )));
        }
    }

    let harvester = Harvester::new(create_client()?, RowParser::with_default_markers()?);

    println!(
        "{} {} league(s) for {} season(s)",
        style("Scraping").bold(),
        style(leagues.len()).cyan(),
        style(seasons.len()).green()
    );
    println!();

    // Create progress spinner
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let mut failed = 0;
    for &season in &seasons {
        for league in &leagues {
            let mut request = TransferRequest::new(options.site, league.clone(), season)
                .with_window(options.window)
                .with_loans(options.loans)
                .with_internal(options.internal);
            if let Some(base_url) = &options.base_url {
                request = request.with_base_url(base_url.as_str());
            }

            pb.set_message(format!("Downloading {} {season}...", league.slug));
            let raw = harvester.scrape(&request);

            if !raw.warnings.is_empty() {
                // Keep whatever an earlier run saved
                failed += 1;
                pb.suspend(|| {
                    println!(
                        "  {} {}: {}",
                        style(&league.slug).cyan(),
                        style(season).green(),
                        style("download failed, nothing saved").red().bold()
                    );
                    for warning in &raw.warnings {
                        println!("    {warning}");
                    }
                });
                continue;
            }

            pb.set_message("Saving CSV...");
            let (records, saved) = if options.raw {
                (raw.len(), save_csv(&raw, &league.slug, season, output))
            } else {
                let table = normalize_table(&raw);
                (table.len(), save_csv(&table, &league.slug, season, output))
            };
            let output_path = match saved {
                Ok(path) => path,
                Err(e) => {
                    pb.finish_and_clear();
                    return Err(e);
                }
            };

            pb.suspend(|| {
                println!(
                    "  {} {}: {} records -> {}",
                    style(&league.slug).cyan(),
                    style(season).green(),
                    records,
                    output_path.display()
                );
            });
        }
    }

    pb.finish_and_clear();

    if failed > 0 {
        return Err(TransferError::IncompleteScrape {
            failed,
            total: leagues.len() * seasons.len(),
        });
    }

    println!();
    println!("{}", style("Done.").green().bold());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn any(_: u32) -> Result<()> {
        Ok(())
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1", any).unwrap(), vec![1]);
        assert_eq!(parse_selection(" 3  5 ", any).unwrap(), vec![3, 5]);
        assert_eq!(parse_selection("6-10", any).unwrap(), vec![6, 7, 8, 9, 10]);
        assert_eq!(parse_selection("2 1-3", any).unwrap(), vec![2, 1, 3]);
    }

    #[test]
    fn test_parse_selection_invalid() {
        for input in ["", "   ", "a", "1-", "-3", "4-2", "1,2", "1-2-3"] {
            assert!(
                matches!(parse_selection(input, any), Err(TransferError::InvalidSelection(_))),
                "expected '{input}' to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_selection_checks_bounds_before_expanding() {
        let started = std::time::Instant::now();

        assert!(matches!(
            resolve_selection(Some("1"), Some("1-4000000000")),
            Err(TransferError::InvalidSeason(1))
        ));
        assert!(matches!(
            resolve_selection(Some("1-4294967295"), None),
            Err(TransferError::InvalidLeague(_))
        ));
        assert!(matches!(
            resolve_selection(Some("1"), Some("2020-4294967295")),
            Err(TransferError::InvalidSelection(_))
        ));

        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn test_resolve_selection_dedups_seasons() {
        let (_, seasons) = resolve_selection(None, Some("2018-2020 2019 2018")).unwrap();
        assert_eq!(seasons, vec![2018, 2019, 2020]);
    }

    #[test]
    fn test_resolve_selection_defaults() {
        let (leagues, seasons) = resolve_selection(None, None).unwrap();
        assert_eq!(leagues.len(), 5);
        assert_eq!(leagues[0].slug, "premier-league");
        assert_eq!(seasons, vec![current_season()]);
    }

    #[test]
    fn test_resolve_selection_rejects_out_of_range() {
        assert!(matches!(
            resolve_selection(Some("11"), None),
            Err(TransferError::InvalidLeague(_))
        ));
        assert!(matches!(
            resolve_selection(None, Some("1980 2020")),
            Err(TransferError::InvalidSeason(1980))
        ));
    }

    #[test]
    fn test_cli_parse_scrape_defaults() {
        let cli = Cli::parse_from(["tm-transfers", "scrape"]);

        let Commands::Scrape {
            site,
            leagues,
            window,
            loans,
            include_internal,
            raw,
            output,
            ..
        } = cli.command
        else {
            panic!("expected scrape command");
        };
        assert_eq!(site, Site::Eur);
        assert!(leagues.is_none());
        assert_eq!(window, WindowArg::Both);
        assert_eq!(loans, LoanFilter::ExcludeReturning);
        assert!(!include_internal);
        assert!(!raw);
        assert!(output.is_none());
    }

    #[test]
    fn test_cli_parse_scrape_with_options() {
        let cli = Cli::parse_from([
            "tm-transfers",
            "scrape",
            "--site",
            "gbp",
            "--leagues",
            "1 3-4",
            "--seasons",
            "2020",
            "--window",
            "winter",
            "--loans",
            "only",
            "--raw",
        ]);

        let Commands::Scrape {
            site,
            leagues,
            seasons,
            window,
            loans,
            raw,
            ..
        } = cli.command
        else {
            panic!("expected scrape command");
        };
        assert_eq!(site, Site::Gbp);
        assert_eq!(leagues.as_deref(), Some("1 3-4"));
        assert_eq!(seasons.as_deref(), Some("2020"));
        assert_eq!(window.window(), Some(Window::Winter));
        assert_eq!(loans, LoanFilter::Only);
        assert!(raw);
    }

    #[test]
    fn test_cli_parse_leagues() {
        let cli = Cli::parse_from(["tm-transfers", "leagues"]);
        assert!(matches!(cli.command, Commands::Leagues));
    }
}
