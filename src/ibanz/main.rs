use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use ibanz::api::{
    CmdMessage, ConfigAction, CopyField, IbanzApi, IbanzPaths, MessageLevel, RecordEdit,
};
use ibanz::clipboard::{copied_message, copy_to_clipboard};
use ibanz::config::{IbanzConfig, KEYS};
use ibanz::error::{IbanzError, Result};
use ibanz::iban::{format_iban, truncate_iban};
use ibanz::index::DisplayRecord;
use ibanz::model::Record;
use ibanz::store::fs_backend::FsBackend;
use std::io::{self, Write};
use std::path::PathBuf;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: IbanzApi<FsBackend>,
    config: IbanzConfig,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { name, iban, desc }) => handle_add(&ctx, name, iban, desc),
        Some(Commands::List { json }) => handle_list(&ctx, json),
        Some(Commands::Show { selectors }) => handle_show(&ctx, selectors),
        Some(Commands::Edit {
            selector,
            name,
            iban,
            desc,
        }) => handle_edit(&ctx, selector, name, iban, desc),
        Some(Commands::Delete { selectors, yes }) => handle_delete(&ctx, selectors, yes),
        Some(Commands::Copy {
            selector,
            name,
            compact,
        }) => handle_copy(&ctx, selector, name, compact),
        Some(Commands::Clear { yes }) => handle_clear(&ctx, yes),
        Some(Commands::Format { text }) => handle_format(&ctx, text),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::About) => handle_about(&ctx),
        None => handle_list(&ctx, false),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("IBANZ_DATA") {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "ibanz", "ibanz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| IbanzError::Api("Could not determine data directory".to_string()))
}

fn init_context() -> Result<AppContext> {
    let paths = IbanzPaths::new(data_dir()?);
    let config = IbanzConfig::load(paths.config_dir()).unwrap_or_else(|e| {
        log::warn!("Ignoring unreadable config: {}", e);
        IbanzConfig::default()
    });
    log::debug!("Using data directory {}", paths.data.display());

    Ok(AppContext {
        api: IbanzApi::open(paths),
        config,
    })
}

/// Applies the configured input cap, warning when it cut something off.
fn capped_iban(ctx: &AppContext, raw: &str) -> String {
    let capped = truncate_iban(raw, ctx.config.max_iban_length);
    if capped.len() < format_iban(raw).len() {
        print_messages(&[CmdMessage::warning(format!(
            "IBAN truncated to {} characters",
            ctx.config.max_iban_length
        ))]);
    }
    capped
}

fn handle_add(ctx: &AppContext, name: String, iban: String, desc: String) -> Result<()> {
    let iban = capped_iban(ctx, &iban);
    let result = ctx.api.add_record(name, iban, desc)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.list_records()?;
    if json {
        let records: Vec<&Record> = result.listed_records.iter().map(|dr| &dr.record).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        print_records(&result.listed_records);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.view_records(&selectors)?;
    print_full_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &AppContext,
    selector: String,
    name: Option<String>,
    iban: Option<String>,
    desc: Option<String>,
) -> Result<()> {
    let edit = RecordEdit {
        name,
        iban: iban.map(|raw| capped_iban(ctx, &raw)),
        desc,
    };
    let result = ctx.api.update_record(&selector, edit)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &AppContext, selectors: Vec<String>, yes: bool) -> Result<()> {
    if ctx.config.confirm_delete && !yes {
        let targets = ctx.api.view_records(&selectors)?.listed_records;
        println!("This will permanently remove the following records:");
        for dr in &targets {
            println!("  {}. {} {}", dr.index, dr.record.name, dr.record.iban.dimmed());
        }
        if !confirm()? {
            print_messages(&[CmdMessage::info("Operation cancelled.")]);
            return Ok(());
        }
    }

    let result = ctx.api.delete_records(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_copy(ctx: &AppContext, selector: String, name: bool, compact: bool) -> Result<()> {
    let field = if name {
        CopyField::Name
    } else if compact {
        CopyField::CompactIban
    } else {
        CopyField::Iban
    };

    let result = ctx.api.copy_field(&selector, field)?;
    if let Some(clip) = &result.clipboard {
        copy_to_clipboard(&clip.text)?;
        print_messages(&[CmdMessage::success(copied_message(&clip.label))]);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &AppContext, yes: bool) -> Result<()> {
    if ctx.config.confirm_delete && !yes {
        println!("All data will be deleted. This cannot be undone.");
        if !confirm()? {
            print_messages(&[CmdMessage::info("Operation cancelled.")]);
            return Ok(());
        }
    }

    let result = ctx.api.clear_all()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_format(ctx: &AppContext, text: Vec<String>) -> Result<()> {
    println!("{}", capped_iban(ctx, &text.join(" ")));
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            for key in KEYS {
                println!("{} = {}", key, config.get(key).unwrap_or_default());
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_about(ctx: &AppContext) -> Result<()> {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        println!("{} v{}", "ibanz".bold(), env!("CARGO_PKG_VERSION"));
    } else {
        println!(
            "{} v{} ({} {})",
            "ibanz".bold(),
            env!("CARGO_PKG_VERSION"),
            hash,
            env!("GIT_COMMIT_DATE")
        );
    }
    println!("{}", env!("CARGO_PKG_DESCRIPTION").dimmed());
    println!("Data: {}", ctx.api.paths().data.display());
    Ok(())
}

fn confirm() -> Result<bool> {
    print!("[Y] To delete: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim() == "Y")
}

/// Info and success go to stdout; warnings and errors to stderr, so piped
/// output carries only results.
fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

const NAME_WIDTH: usize = 24;
const IBAN_WIDTH: usize = 40;

fn print_records(records: &[DisplayRecord]) {
    if records.is_empty() {
        println!("No records found.");
        return;
    }

    for dr in records {
        let idx_str = format!("{:>3}. ", dr.index);
        let name = truncate_to_width(&dr.record.name, NAME_WIDTH);
        let name_padding = NAME_WIDTH.saturating_sub(name.width());
        let iban_padding = IBAN_WIDTH.saturating_sub(dr.record.iban.width());

        println!(
            "{}{}{} {}{}{}",
            idx_str.yellow(),
            name.bold(),
            " ".repeat(name_padding),
            dr.record.iban,
            " ".repeat(iban_padding),
            dr.record.desc.dimmed()
        );
    }
}

fn print_full_records(records: &[DisplayRecord]) {
    for (i, dr) in records.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} {}", format!("{}.", dr.index).yellow(), dr.record.name.bold());
        println!("   IBAN: {}", dr.record.iban);
        if !dr.record.desc.is_empty() {
            println!("   Note: {}", dr.record.desc);
        }
        println!("   {}", format!("Id:   {}", dr.record.id).dimmed());
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

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
