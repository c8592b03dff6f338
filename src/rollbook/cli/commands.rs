use super::render::{print_config, print_messages, print_students, print_summary};
use super::setup::{Cli, Commands};
use clap::Parser;
use rollbook::api::{ConfigAction, StudentFilter};
use rollbook::commands::import::read_names_file;
use rollbook::error::{Result, RollbookError};
use rollbook::init::{initialize, RollbookContext};
use rollbook::model::StudentPatch;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize(cli.data_dir.as_deref())?;
    let outcome = dispatch(&mut ctx, cli.command);
    ctx.api.close();
    outcome
}

/// Log to stderr. `RUST_LOG` wins; otherwise warnings only, or debug with `-v`.
fn init_logging(verbose: bool) {
    let default = if verbose { "rollbook=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn dispatch(ctx: &mut RollbookContext, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Init) => handle_init(ctx),
        Some(Commands::Import { class, file, names }) => handle_import(ctx, class, file, names),
        Some(Commands::List { grade, class, json }) => handle_list(ctx, grade, class, json),
        None => handle_list(ctx, None, None, false),
        Some(Commands::Edit {
            id,
            name,
            class,
            grade,
        }) => handle_edit(
            ctx,
            &id,
            StudentPatch {
                name,
                class_name: class,
                grade,
            },
        ),
        Some(Commands::Status) => handle_status(ctx),
        Some(Commands::Path) => {
            println!("{}", ctx.api.data_path().display());
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(ctx, key, value),
    }
}

fn handle_init(ctx: &mut RollbookContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(
    ctx: &mut RollbookContext,
    class: Option<String>,
    file: Option<PathBuf>,
    mut names: Vec<String>,
) -> Result<()> {
    let class_info = class
        .or_else(|| ctx.config.default_class.clone())
        .ok_or_else(|| {
            RollbookError::InvalidImportInput(
                "no class given: pass --class or set default_class".to_string(),
            )
        })?;
    if let Some(path) = file {
        let mut from_file = read_names_file(&path)?;
        from_file.append(&mut names);
        names = from_file;
    }

    ctx.api.init()?;
    let result = ctx.api.import_students(&names, &class_info)?;
    print_students(&result.affected_students);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &mut RollbookContext,
    grade: Option<String>,
    class_name: Option<String>,
    json: bool,
) -> Result<()> {
    ctx.api.init()?;
    let filter = StudentFilter { grade, class_name };
    let result = ctx.api.list_students(&filter)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result.listed_students)?);
    } else {
        print_students(&result.listed_students);
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_edit(ctx: &mut RollbookContext, id: &str, patch: StudentPatch) -> Result<()> {
    ctx.api.init()?;
    let result = ctx.api.update_student(id, &patch)?;
    print_students(&result.affected_students);
    print_messages(&result.messages);
    Ok(())
}

fn handle_status(ctx: &mut RollbookContext) -> Result<()> {
    ctx.api.init()?;
    let result = ctx.api.status()?;
    if let Some(summary) = &result.summary {
        print_summary(summary);
    }
    Ok(())
}

fn handle_config(
    ctx: &mut RollbookContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
