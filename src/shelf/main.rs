use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use shelf::api::ShelfApi;
use shelf::commands::config::ConfigAction;
use shelf::commands::stats::Dashboard;
use shelf::commands::{CmdMessage, MessageLevel};
use shelf::error::{Result, ShelfError};
use shelf::model::{Record, RecordDraft, RecordKind};
use shelf::query::Filters;
use shelf::stats::CapStatus;
use shelf::store::fs::FileStore;
use shelf::validate::FieldErrors;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ShelfApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add {
            title,
            kind,
            author,
            pages,
            tag,
            isbn,
            notes,
        }) => handle_add(&mut ctx, title, kind, author, pages, tag, isbn, notes),
        Some(Commands::Edit {
            selector,
            title,
            kind,
            author,
            pages,
            tag,
            isbn,
            notes,
        }) => handle_edit(
            &mut ctx, selector, title, kind, author, pages, tag, isbn, notes,
        ),
        Some(Commands::List { kind, tag, search }) => handle_list(&ctx, kind, tag, search),
        Some(Commands::Search { query }) => handle_search(&ctx, query),
        Some(Commands::Delete { selectors }) => handle_delete(&mut ctx, selectors),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Tags) => handle_tags(&ctx),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Export { path }) => handle_export(&ctx, path),
        Some(Commands::Import { path }) => handle_import(&mut ctx, path),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, None, None, None),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("shelf={}", level)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_context() -> Result<AppContext> {
    let root = match std::env::var_os("SHELF_HOME") {
        Some(home) => PathBuf::from(home),
        None => ProjectDirs::from("com", "shelf", "shelf")
            .expect("Could not determine data dir")
            .data_dir()
            .to_path_buf(),
    };

    let store = FileStore::new(root);
    Ok(AppContext {
        api: ShelfApi::open(store),
    })
}

#[allow(clippy::too_many_arguments)]
fn build_draft(
    title: String,
    kind: String,
    author: Option<String>,
    pages: Option<String>,
    tag: Option<String>,
    isbn: Option<String>,
    notes: Option<String>,
) -> Result<RecordDraft> {
    let kind: RecordKind = kind.parse().map_err(ShelfError::Validation)?;
    Ok(RecordDraft {
        kind,
        title,
        author: author.unwrap_or_default(),
        pages: pages.unwrap_or_default(),
        tag: tag.unwrap_or_default(),
        isbn: isbn.unwrap_or_default(),
        notes: notes.unwrap_or_default(),
    })
}

#[allow(clippy::too_many_arguments)]
fn handle_add(
    ctx: &mut AppContext,
    title: String,
    kind: String,
    author: Option<String>,
    pages: Option<String>,
    tag: Option<String>,
    isbn: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let draft = build_draft(title, kind, author, pages, tag, isbn, notes)?;

    let errors = ctx.api.validate(&draft);
    if !errors.is_empty() {
        print_field_errors(&errors);
        return Err(ShelfError::Validation("invalid record fields".into()));
    }

    let result = ctx.api.add_record(&draft)?;
    print_messages(&result.messages);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_edit(
    ctx: &mut AppContext,
    selector: String,
    title: String,
    kind: String,
    author: Option<String>,
    pages: Option<String>,
    tag: Option<String>,
    isbn: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let draft = build_draft(title, kind, author, pages, tag, isbn, notes)?;

    let errors = ctx.api.validate(&draft);
    if !errors.is_empty() {
        print_field_errors(&errors);
        return Err(ShelfError::Validation("invalid record fields".into()));
    }

    let result = ctx.api.update_record(&selector, &draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &AppContext,
    kind: Option<String>,
    tag: Option<String>,
    search: Option<String>,
) -> Result<()> {
    let kind = match kind {
        Some(k) => Some(k.parse::<RecordKind>().map_err(ShelfError::Validation)?),
        None => None,
    };
    let filters = Filters {
        kind,
        tag,
        query: search,
    };

    let result = ctx.api.list_records(&filters)?;
    print_records(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: String) -> Result<()> {
    let result = ctx.api.search_records(&query)?;
    print_records(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_records(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let result = ctx.api.clear_records(yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_tags(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.tags()?;
    for (tag, count) in &result.tags {
        println!("{:>4}  {}", count, tag);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.dashboard()?;
    if let Some(dashboard) = &result.dashboard {
        print_dashboard(dashboard);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, path: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export_records(path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.import_records(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_field_errors(errors: &FieldErrors) {
    for (field, message) in errors {
        eprintln!("{}", format!("{}: {}", field, message).red());
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const KIND_WIDTH: usize = 6;

fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("No records found.");
        return;
    }

    for (i, record) in records.iter().enumerate() {
        let idx_str = format!("{:>3}. ", i + 1);

        let mut text = record.title.clone();
        if !record.author.is_empty() {
            text.push_str(&format!(" by {}", record.author));
        }
        if !record.tag.is_empty() {
            text.push_str(&format!(" • {}", record.tag));
        }
        if let Some(pages) = record.pages {
            text.push_str(&format!(" • {}p", format_pages(pages)));
        }

        let fixed_width = idx_str.width() + KIND_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let text_display = truncate_to_width(&text, available);
        let padding = available.saturating_sub(text_display.width());

        let kind_str = format!("{:<width$}", record.kind.as_str(), width = KIND_WIDTH);
        let time_str = format!("{:>width$}", format_time_ago(record.date_added), width = TIME_WIDTH);

        println!(
            "{}{}{}{}{}",
            idx_str,
            text_display,
            " ".repeat(padding),
            kind_str.dimmed(),
            time_str.dimmed()
        );
    }
}

fn print_dashboard(dashboard: &Dashboard) {
    println!(
        "Records: {}   Pages: {}",
        dashboard.totals.count.to_string().bold(),
        format_pages(dashboard.totals.total_pages).bold()
    );

    match &dashboard.top_tag {
        Some(top) => println!("Top tag: {} ({})", top.tag, top.count),
        None => println!("Top tag: {}", "none".dimmed()),
    }

    match dashboard.cap_status {
        CapStatus::Disabled => println!("{}", "No cap set.".dimmed()),
        CapStatus::Under { remaining } => println!(
            "{} pages remaining until cap ({}).",
            format_pages(remaining),
            dashboard.cap
        ),
        CapStatus::Exceeded { over } => println!(
            "{}",
            format!("Cap exceeded by {} pages!", format_pages(over)).red()
        ),
    }

    println!("\nAdded last 7 days:");
    for bucket in &dashboard.trend {
        let bar = "▇".repeat(bucket.count);
        println!("  {:>6}  {:<3}{}", bucket.label, bucket.count, bar);
    }
}

// Page sums are decimals on the wire but usually whole numbers; render
// "412" rather than "412.0".
fn format_pages(pages: f64) -> String {
    if pages.fract() == 0.0 {
        format!("{}", pages as i64)
    } else {
        format!("{}", pages)
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
