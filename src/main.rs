// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use note_index::utils::logging::{format_count, format_heading, format_success, format_warning};
use note_index::{
    Config, FilterCriteria, JsonExporter, Note, NoteLoader, NoteQuery, SortKey, SortOrder,
    Validator, filter_notes, group_notes, run_query, search_by_topic, sort_notes,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "note_index")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Sort, filter and search classroom note snapshots", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// JSON snapshot as returned by the notes API
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "NOTE_INDEX_NOTES",
        default_value = "notes.json"
    )]
    notes: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FilterArgs {
    #[arg(long)]
    department: Option<String>,

    #[arg(long)]
    semester: Option<u32>,

    #[arg(long)]
    subject: Option<String>,
}

impl FilterArgs {
    fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();
        if let Some(department) = &self.department {
            criteria = criteria.department(department.as_str());
        }
        if let Some(semester) = self.semester {
            criteria = criteria.semester(semester);
        }
        if let Some(subject) = &self.subject {
            criteria = criteria.subject(subject.as_str());
        }
        criteria
    }
}

#[derive(Args)]
struct ExportArgs {
    /// Also write the result as JSON into this directory
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Pretty-print the export; overrides `output.pretty` from the config
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pretty: Option<bool>,
}

impl ExportArgs {
    fn pretty(&self, config: &Config) -> bool {
        self.pretty.unwrap_or(config.output.pretty)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Order notes by a key sequence
    Sort {
        #[arg(
            long,
            value_delimiter = ',',
            default_value = "department,semester,subject"
        )]
        keys: Vec<SortKey>,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Exact-match filter on department, semester and subject
    Filter {
        #[command(flatten)]
        filter: FilterArgs,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Case-insensitive substring search on topics
    Search {
        term: String,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Filter, then search within the filtered notes
    Query {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long)]
        search: Option<String>,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Show notes grouped by department, semester and subject
    Groups,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    note_index::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    let loader = NoteLoader::new(config.catalog.clone());
    let notes = loader
        .load_file(&cli.notes)
        .with_context(|| format!("Failed to load notes from {}", cli.notes.display()))?;
    info!("Loaded {} notes", notes.len());

    match cli.command {
        Commands::Sort { keys, export } => cmd_sort(&config, &notes, keys, &export),
        Commands::Filter { filter, export } => cmd_filter(&config, &notes, &filter, &export),
        Commands::Search { term, export } => cmd_search(&config, &notes, &term, &export),
        Commands::Query {
            filter,
            search,
            export,
        } => cmd_query(&config, &notes, &filter, search, &export),
        Commands::Groups => cmd_groups(&notes),
    }
}

fn cmd_sort(
    config: &Config,
    notes: &[Note],
    keys: Vec<SortKey>,
    export: &ExportArgs,
) -> Result<()> {
    let order = SortOrder::new(keys).context("Invalid sort keys")?;
    let started = Instant::now();
    let sorted = sort_notes(notes, &order);
    info!("Sorted in {:.2}ms", started.elapsed().as_secs_f64() * 1000.0);

    let description = format!("sorted by {}", order);
    print_notes(config, &description, &sorted);
    export_result(config, export, "sorted", &description, &sorted)
}

fn cmd_filter(
    config: &Config,
    notes: &[Note],
    filter: &FilterArgs,
    export: &ExportArgs,
) -> Result<()> {
    let criteria = filter.criteria();
    let matching = filter_notes(notes, &criteria);

    let description = describe_criteria(&criteria);
    print_notes(config, &description, &matching);
    export_result(config, export, "filtered", &description, &matching)
}

fn cmd_search(config: &Config, notes: &[Note], term: &str, export: &ExportArgs) -> Result<()> {
    if term.is_empty() {
        println!("{}", format_warning("Empty search term matches no notes"));
    }

    let matching = search_by_topic(notes, term);

    let description = format!("topic contains \"{}\"", term);
    print_notes(config, &description, &matching);
    export_result(config, export, "search", &description, &matching)
}

fn cmd_query(
    config: &Config,
    notes: &[Note],
    filter: &FilterArgs,
    search: Option<String>,
    export: &ExportArgs,
) -> Result<()> {
    let mut query = NoteQuery::new(filter.criteria());
    if let Some(term) = search {
        query = query.with_search(term);
    }

    let matching = run_query(notes, &query);

    let mut description = describe_criteria(&query.criteria);
    if let Some(term) = query.search.as_deref().filter(|t| !t.is_empty()) {
        description.push_str(&format!(", topic contains \"{}\"", term));
    }
    print_notes(config, &description, &matching);
    export_result(config, export, "query", &description, &matching)
}

fn cmd_groups(notes: &[Note]) -> Result<()> {
    let groups = group_notes(notes);

    if groups.is_empty() {
        println!("{}", format_warning("No notes available"));
        return Ok(());
    }

    for department in &groups {
        println!(
            "\n{} ({})",
            format_heading(department.department),
            format_count(department.note_count(), "note")
        );
        for semester in &department.semesters {
            println!(
                "  Semester {} ({})",
                semester.semester,
                format_count(semester.note_count(), "note")
            );
            for subject in &semester.subjects {
                println!(
                    "    {:<24} {}",
                    subject.subject,
                    format_count(subject.notes.len(), "note")
                );
            }
        }
    }
    println!();

    Ok(())
}

fn describe_criteria(criteria: &FilterCriteria) -> String {
    let mut parts = Vec::new();
    if let Some(department) = &criteria.department {
        parts.push(format!("department={}", department));
    }
    if let Some(semester) = criteria.semester {
        parts.push(format!("semester={}", semester));
    }
    if let Some(subject) = &criteria.subject {
        parts.push(format!("subject={}", subject));
    }

    if parts.is_empty() {
        "all notes".to_string()
    } else {
        parts.join(", ")
    }
}

fn print_notes(config: &Config, description: &str, notes: &[&Note]) {
    println!("\n{}", format_heading(&format!("Notes: {}", description)));
    println!("Found {}\n", format_count(notes.len(), "note"));

    if notes.is_empty() {
        return;
    }

    let width = config.output.preview_width;
    println!("{}", "=".repeat(80));
    for (idx, note) in notes.iter().enumerate() {
        println!(
            "{:>4}. {:<8} sem {:<3} {:<20} {}",
            idx + 1,
            note.department,
            note.semester,
            Validator::truncate_text(&note.subject, 20),
            Validator::truncate_text(&note.topic, width)
        );
        if !note.file.file_name.is_empty() {
            println!(
                "      {} ({} bytes, {})",
                note.file.file_name, note.file.file_size, note.file.file_type
            );
        }
    }
    println!("{}", "=".repeat(80));
}

fn export_result(
    config: &Config,
    export: &ExportArgs,
    name: &str,
    description: &str,
    notes: &[&Note],
) -> Result<()> {
    let Some(dir) = &export.output else {
        return Ok(());
    };

    let exporter = JsonExporter::new(dir.clone()).context("Failed to prepare export directory")?;
    let manifest = exporter
        .export(name, description, notes, export.pretty(config))
        .context("Failed to export results")?;

    println!(
        "{}",
        format_success(&format!(
            "Exported {} to {}",
            format_count(manifest.total_notes, "note"),
            manifest.file
        ))
    );
    Ok(())
}
