use super::confirm::{AssumeYes, Confirm, StdinConfirm};
use super::render::{print_messages, render_config, render_habit_detail, render_habit_list};
use super::setup::{Cli, Commands};
use clap::Parser;
use habitz::api::{CmdResult, HabitUpdate, HabitzApi};
use habitz::config::{default_config_file, resolve_data_file, HabitzConfig};
use habitz::error::{HabitzError, Result};
use habitz::store::fs::FileStore;
use habitz::store::HabitStore;
use std::path::{Path, PathBuf};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "HABITZ_LOG";

struct AppContext {
    api: HabitzApi<FileStore>,
    config: HabitzConfig,
    config_file: PathBuf,
    data_file: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { name, short }) => handle_add(&mut ctx, &name.join(" "), short),
        Some(Commands::Done { refs, date }) => handle_done(&mut ctx, &refs, date),
        Some(Commands::Undo { reference, date }) => handle_undo(&mut ctx, &reference, date),
        Some(Commands::Edit {
            reference,
            name,
            short,
        }) => handle_edit(&mut ctx, &reference, HabitUpdate { name, short_name: short }),
        Some(Commands::Delete { reference, yes }) => handle_delete(&mut ctx, &reference, yes),
        Some(Commands::Show { reference }) => handle_show(&ctx, &reference),
        Some(Commands::Export { file }) => handle_export(&ctx, &file),
        Some(Commands::Import { file }) => handle_import(&mut ctx, &file),
        Some(Commands::Config) => handle_config(&ctx),
        Some(Commands::List) | None => handle_list(&ctx),
    }
}

/// Logs go to stderr so stdout stays clean for command output.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("habitz=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("habitz=warn"))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_file = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_file()?,
    };
    let config = HabitzConfig::load(&config_file)?;
    let data_file = resolve_data_file(cli.data_file.clone(), &config)?;
    tracing::debug!(data_file = %data_file.display(), config_file = %config_file.display(), "context ready");

    let api = HabitzApi::new(FileStore::new(&data_file))
        .with_auto_short_name(config.auto_short_name);
    Ok(AppContext {
        api,
        config,
        config_file,
        data_file,
    })
}

fn handle_add(ctx: &mut AppContext, name: &str, short: Option<String>) -> Result<()> {
    let result = ctx.api.add_habit(name, short.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_done(ctx: &mut AppContext, refs: &[String], date: Option<String>) -> Result<()> {
    let result = ctx.api.mark_done(refs, date.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_undo(ctx: &mut AppContext, reference: &str, date: Option<String>) -> Result<()> {
    let result = ctx.api.unmark(reference, date.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, reference: &str, update: HabitUpdate) -> Result<()> {
    let result = ctx.api.edit_habit(reference, update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, reference: &str, yes: bool) -> Result<()> {
    let outcome = if yes {
        delete_confirmed(&mut ctx.api, reference, &mut AssumeYes)?
    } else {
        delete_confirmed(&mut ctx.api, reference, &mut StdinConfirm)?
    };
    match outcome {
        Some(result) => print_messages(&result.messages),
        None => println!("Nothing deleted."),
    }
    Ok(())
}

/// Deletes only if `confirm` agrees. `None` means the user declined.
fn delete_confirmed<S: HabitStore>(
    api: &mut HabitzApi<S>,
    reference: &str,
    confirm: &mut dyn Confirm,
) -> Result<Option<CmdResult>> {
    let target = api.delete_preview(reference)?;
    let prompt = format!("Delete habit {}: {}?", target.index, target.habit.name);
    let accepted = confirm
        .confirm(&prompt)
        .map_err(|source| HabitzError::Read {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
    if !accepted {
        return Ok(None);
    }
    api.delete_habit(reference).map(Some)
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_habits()?;
    print!("{}", render_habit_list(&result.listed_habits, ctx.api.today()));
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, reference: &str) -> Result<()> {
    let result = ctx.api.show_habit(reference)?;
    if let (Some(ih), Some(stats)) = (result.listed_habits.first(), &result.stats) {
        print!("{}", render_habit_detail(ih, stats, ctx.api.today()));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, file: &Path) -> Result<()> {
    let result = ctx.api.export_habits(file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: &Path) -> Result<()> {
    let result = ctx.api.import_habits(file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    print!(
        "{}",
        render_config(&ctx.config, &ctx.config_file, &ctx.data_file)
    );
    Ok(())
}
