//! Command-line probe over the portfolio catalog.
//!
//! # Responsibility
//! - Exercise `folio_core` listing, detail, facet and featured flows against a
//!   projects file without the Flutter host.
//! - Keep output deterministic for quick local sanity checks.

use clap::{Args, Parser, Subcommand};
use folio_core::{
    init_logging, try_load_records_from_path, CatalogService, DetailView, FilterState,
    FolioConfig, StaticProjectRepository,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Inspect the portfolio projects catalog", long_about = None)]
struct Cli {
    /// Projects JSON file (defaults to FOLIO_PROJECTS_PATH or data/projects.json)
    #[arg(short, long, global = true)]
    projects: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print core linkage info
    Ping,
    /// List projects newest first, optionally filtered
    List(ListArgs),
    /// Show one project's detail page
    Show {
        /// Project slug
        slug: String,
    },
    /// Print distinct domains, languages and tags
    Facets,
    /// Print the featured rotation
    Featured {
        /// Advance the rotation N times before printing
        #[arg(short, long, default_value_t = 0)]
        advance: usize,
    },
    /// Suggest tags containing TEXT
    Suggest {
        text: String,
        /// Tags already selected (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },
}

#[derive(Args)]
struct ListArgs {
    /// Case-insensitive free text
    #[arg(short, long, default_value = "")]
    query: String,
    #[arg(short, long, default_value = "")]
    domain: String,
    #[arg(short, long, default_value = "")]
    language: String,
    /// Only projects with a GitHub link
    #[arg(long)]
    github: bool,
    /// Only projects with a demo link
    #[arg(long)]
    demo: bool,
    /// Only projects with a paper or write-up link
    #[arg(long)]
    paper: bool,
    /// Required skill or tool (repeatable)
    #[arg(short, long = "tag")]
    tags: Vec<String>,
}

impl ListArgs {
    fn into_filter(self) -> FilterState {
        let mut filter = FilterState::new();
        filter.set_query(self.query);
        filter.set_domain(self.domain);
        filter.set_language(self.language);
        filter.has_github = self.github;
        filter.has_demo = self.demo;
        filter.has_paper = self.paper;
        for tag in self.tags {
            filter.add_tag(tag);
        }
        filter
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = FolioConfig::from_env();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("folio: {err}");
            return ExitCode::FAILURE;
        }
    }

    if matches!(cli.command, Commands::Ping) {
        println!("folio_core ping={}", folio_core::ping());
        println!("folio_core version={}", folio_core::core_version());
        return ExitCode::SUCCESS;
    }

    let source = cli.projects.unwrap_or(config.projects_path);
    let records = match try_load_records_from_path(&source) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("folio: {err}");
            return ExitCode::FAILURE;
        }
    };
    let catalog = CatalogService::new(StaticProjectRepository::new(records));

    match cli.command {
        Commands::Ping => {}
        Commands::List(args) => run_list(&catalog, args.into_filter()),
        Commands::Show { slug } => return run_show(&catalog, &slug),
        Commands::Facets => run_facets(&catalog),
        Commands::Featured { advance } => run_featured(&catalog, advance),
        Commands::Suggest { text, tags } => {
            for tag in catalog.tag_suggestions(&text, &tags) {
                println!("{tag}");
            }
        }
    }
    ExitCode::SUCCESS
}

fn run_list(catalog: &CatalogService<StaticProjectRepository>, filter: FilterState) {
    let cards = catalog.cards(&filter);
    println!("Showing {} of {}", cards.len(), catalog.total());
    if cards.is_empty() {
        println!("No projects match these filters.");
        return;
    }
    for card in cards {
        println!("{}  {}  [{}]  {}", card.year, card.slug, card.chips.join(", "), card.title);
    }
}

fn run_show(catalog: &CatalogService<StaticProjectRepository>, slug: &str) -> ExitCode {
    match catalog.detail(slug) {
        DetailView::Found(detail) => {
            println!("{} ({})", detail.title, detail.year);
            if !detail.domain.is_empty() {
                println!("domain: {}", detail.domain);
            }
            if !detail.blurb.is_empty() {
                println!("{}", detail.blurb);
            }
            for (label, href) in [
                ("github", &detail.github_href),
                ("demo", &detail.demo_href),
                ("paper", &detail.paper_href),
            ] {
                if let Some(href) = href {
                    println!("{label}: {href}");
                }
            }
            for stat in &detail.stats {
                println!("{}: {}", stat.label, stat.value);
            }
            for section in detail.body.sections() {
                println!();
                println!("## {}", section.title);
                for paragraph in &section.body {
                    println!("{paragraph}");
                }
            }
            ExitCode::SUCCESS
        }
        DetailView::NotFound(missing) => {
            eprintln!(
                "{}: `{}` (back to {})",
                missing.title, missing.requested_slug, missing.back_path
            );
            ExitCode::FAILURE
        }
    }
}

fn run_facets(catalog: &CatalogService<StaticProjectRepository>) {
    let facets = catalog.facets();
    println!("domains: {}", facets.domains.join(", "));
    println!("languages: {}", facets.languages.join(", "));
    println!("tags: {}", facets.tags.join(", "));
}

fn run_featured(catalog: &CatalogService<StaticProjectRepository>, advance: usize) {
    let mut rotation = catalog.featured_rotation();
    if rotation.is_empty() {
        println!("No featured projects.");
        return;
    }
    for _ in 0..advance {
        rotation.tick();
    }
    for (index, slide) in rotation.slides().iter().enumerate() {
        let marker = if index == rotation.index() { '>' } else { ' ' };
        println!("{marker} {}  {}", slide.slug, slide.title);
    }
    if let Some(position) = rotation.position() {
        println!("{position}/{}", rotation.len());
    }
}
