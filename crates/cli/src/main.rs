use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use directory_data::DirectoryCatalog;
use listing::{FacetDimension, FilterSpec, PageRequest, ResultSet, SortKey, DEFAULT_PAGE_SIZE};
use server::DirectoryService;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// AlumLink - Alumni directory search
#[derive(Parser)]
#[command(name = "alumlink")]
#[command(about = "Search the alumni directory, job board, and events", long_about = None)]
struct Cli {
    /// Path to the directory dataset (alumni.jsonl, jobs.jsonl, events.jsonl)
    #[arg(short, long, default_value = "data/directory")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Filter criteria shared by the search subcommands.
#[derive(Args)]
struct FilterArgs {
    /// Free-text search query
    #[arg(long)]
    search: Option<String>,

    /// Restrict to a company (repeatable)
    #[arg(long = "company")]
    companies: Vec<String>,

    /// Restrict to a skill (repeatable)
    #[arg(long = "skill")]
    skills: Vec<String>,

    /// Restrict to a location (repeatable)
    #[arg(long = "location")]
    locations: Vec<String>,

    /// Restrict to a role tag: current role, job type, experience level,
    /// or event type (repeatable)
    #[arg(long = "role")]
    roles: Vec<String>,

    /// Only verified profiles / active postings
    #[arg(long)]
    verified: bool,

    /// Earliest batch year (inclusive)
    #[arg(long)]
    year_from: Option<u16>,

    /// Latest batch year (inclusive)
    #[arg(long)]
    year_to: Option<u16>,
}

impl FilterArgs {
    fn into_spec(self) -> FilterSpec {
        let year_range = match (self.year_from, self.year_to) {
            (None, None) => None,
            (from, to) => Some((from.unwrap_or(u16::MIN), to.unwrap_or(u16::MAX))),
        };
        FilterSpec {
            search: self.search.unwrap_or_default(),
            companies: self.companies,
            skills: self.skills,
            locations: self.locations,
            roles: self.roles,
            verified_only: self.verified,
            year_range,
        }
    }
}

/// Pagination and ordering shared by the search subcommands.
#[derive(Args)]
struct PageArgs {
    /// Sort order: name, recent, popular (anything else keeps input order)
    #[arg(long, default_value = "name")]
    sort: String,

    /// Page number (1-based)
    #[arg(long, default_value = "1")]
    page: usize,

    /// Records per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,
}

impl PageArgs {
    fn sort_key(&self) -> SortKey {
        SortKey::parse_lenient(&self.sort)
    }

    fn request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search alumni profiles
    Alumni {
        #[command(flatten)]
        filters: FilterArgs,
        #[command(flatten)]
        page: PageArgs,
    },

    /// Search job postings
    Jobs {
        #[command(flatten)]
        filters: FilterArgs,
        #[command(flatten)]
        page: PageArgs,
    },

    /// Search event listings
    Events {
        #[command(flatten)]
        filters: FilterArgs,
        #[command(flatten)]
        page: PageArgs,
    },

    /// List distinct filter values with counts
    Facets {
        /// Which dataset: alumni or jobs
        entity: String,
        /// Which dimension: company, skill, location, role
        dimension: String,
    },

    /// Show dataset counts
    Stats,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Load the catalog (this may take a moment for large datasets)
    println!("Loading directory data from {}...", cli.data_dir.display());
    let start = Instant::now();
    let catalog = Arc::new(
        DirectoryCatalog::load_from_dir(&cli.data_dir)
            .context("Failed to load directory datasets")?,
    );
    println!("{} Loaded in {:?}", "✓".green(), start.elapsed());

    let mut service = DirectoryService::new(catalog.clone());

    match cli.command {
        Commands::Alumni { filters, page } => {
            let result = service.search_alumni(&filters.into_spec(), page.sort_key(), page.request());
            print_page_header(&result);
            for profile in &result.data {
                let badge = if profile.is_verified {
                    "✓".green().to_string()
                } else {
                    " ".to_string()
                };
                println!(
                    "{} {} — {} @ {} [{}]",
                    badge,
                    profile.name.bold(),
                    profile.current_role.as_deref().unwrap_or("-"),
                    profile.current_company.as_deref().unwrap_or("-"),
                    profile
                        .batch_year
                        .map(|y| y.to_string())
                        .unwrap_or_else(|| "????".to_string()),
                );
                if !profile.skills.is_empty() {
                    println!("    {}", profile.skills.join(", ").dimmed());
                }
            }
        }

        Commands::Jobs { filters, page } => {
            let result = service.search_jobs(&filters.into_spec(), page.sort_key(), page.request());
            print_page_header(&result);
            for job in &result.data {
                println!(
                    "{} at {} — {} / {} [{}]",
                    job.title.bold(),
                    job.company,
                    job.job_type.as_str(),
                    job.experience_required.as_str(),
                    job.location.as_deref().unwrap_or("anywhere"),
                );
                if let Some(salary) = &job.salary_range {
                    println!("    {}", salary.dimmed());
                }
            }
        }

        Commands::Events { filters, page } => {
            let result = service.search_events(&filters.into_spec(), page.sort_key(), page.request());
            print_page_header(&result);
            for event in &result.data {
                let mode = if event.is_virtual { "virtual" } else { "in person" };
                println!(
                    "{} — {} ({}) at {}",
                    event.title.bold(),
                    event.event_type.as_str(),
                    mode,
                    event.location.as_deref().unwrap_or("TBA"),
                );
            }
        }

        Commands::Facets { entity, dimension } => {
            let dimension = parse_dimension(&dimension)?;
            let facets = match entity.as_str() {
                "alumni" => service.alumni_facets(dimension),
                "jobs" => service.job_facets(dimension),
                other => return Err(anyhow!("Unknown entity '{}', expected alumni or jobs", other)),
            };
            println!(
                "{} {} values:",
                facets.len(),
                dimension.as_str().bold()
            );
            for (value, count) in facets {
                println!("  {} ({})", value, count);
            }
        }

        Commands::Stats => {
            let (profiles, jobs, events) = catalog.counts();
            println!("Profiles: {}", profiles.to_string().bold());
            println!("Jobs:     {}", jobs.to_string().bold());
            println!("Events:   {}", events.to_string().bold());
        }
    }

    Ok(())
}

fn parse_dimension(token: &str) -> Result<FacetDimension> {
    match token {
        "company" => Ok(FacetDimension::Company),
        "skill" => Ok(FacetDimension::Skill),
        "location" => Ok(FacetDimension::Location),
        "role" => Ok(FacetDimension::Role),
        other => Err(anyhow!(
            "Unknown dimension '{}', expected company, skill, location, or role",
            other
        )),
    }
}

fn print_page_header<T>(result: &ResultSet<T>) {
    println!(
        "Showing {} of {} results (page {}/{}{})",
        result.data.len().to_string().bold(),
        result.total_results,
        result.current_page,
        result.total_pages,
        if result.has_more { ", more available" } else { "" },
    );
}
