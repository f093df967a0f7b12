use clap::Parser;
use colored::*;
use shipshape::api::{CmdMessage, CmdResult, ConfigAction, MessageLevel, ShipshapeApi, SitePaths};
use shipshape::config::SiteConfig;
use shipshape::error::Result;
use shipshape::model::Outcome;
use shipshape::runner::RunOptions;
use shipshape::store::fs::FileStore;
use shipshape::venues::{Ship, Venue};
use std::path::PathBuf;

mod args;
use args::{Cli, Commands, VenuesCommands};

fn main() {
    match run() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

struct AppContext {
    api: ShipshapeApi<FileStore>,
    verbose: bool,
    sample_cap: usize,
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Patch {
            names,
            dry_run,
            backup,
            strict,
        } => handle_patch(&mut ctx, names, RunOptions { dry_run, backup }, strict),
        Commands::Patches => handle_patches(&ctx),
        Commands::Venues { command } => handle_venues(&mut ctx, command),
        Commands::Sitemap { output, pages } => handle_sitemap(&mut ctx, output, pages),
        Commands::Images { paths } => handle_images(&mut ctx, paths),
        Commands::Config { key, value } => handle_config(&mut ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let paths = SitePaths::new(root);
    let config = SiteConfig::load(&paths.config_dir).unwrap_or_default();
    let sample_cap = config.report_sample;
    let api = ShipshapeApi::new(FileStore::new(), paths, config);

    Ok(AppContext {
        api,
        verbose: cli.verbose,
        sample_cap,
    })
}

fn handle_patch(
    ctx: &mut AppContext,
    names: Vec<String>,
    opts: RunOptions,
    strict: bool,
) -> Result<i32> {
    let result = ctx.api.run_patches(&names, opts)?;
    print_report(&result, ctx.verbose, ctx.sample_cap);
    print_messages(&result.messages);

    let errored = result.report.as_ref().map(|r| r.errored).unwrap_or(0);
    if strict && errored > 0 {
        return Ok(1);
    }
    Ok(0)
}

fn handle_patches(ctx: &AppContext) -> Result<i32> {
    let result = ctx.api.list_patches()?;
    for info in &result.patches {
        println!("{:<18} {}", info.name.bold(), info.description);
    }
    Ok(0)
}

fn handle_venues(ctx: &mut AppContext, command: VenuesCommands) -> Result<i32> {
    let result = match command {
        VenuesCommands::AddVenue {
            slug,
            name,
            category,
            description,
        } => ctx.api.add_venue(Venue {
            slug,
            name,
            category,
            description,
        })?,
        VenuesCommands::AddShip {
            slug,
            name,
            class,
            tonnage,
            venues,
        } => ctx.api.add_ship(
            &slug,
            Ship {
                name,
                class,
                gross_tonnage: tonnage,
                venues,
            },
        )?,
        VenuesCommands::Check => {
            let result = ctx.api.check_venues()?;
            print_messages(&result.messages);
            let broken = result
                .messages
                .iter()
                .any(|m| matches!(m.level, MessageLevel::Error));
            return Ok(if broken { 1 } else { 0 });
        }
    };
    print_messages(&result.messages);
    Ok(0)
}

fn handle_sitemap(
    ctx: &mut AppContext,
    output: Option<PathBuf>,
    pages: Option<PathBuf>,
) -> Result<i32> {
    let result = ctx.api.sitemap(output, pages)?;
    print_messages(&result.messages);
    Ok(0)
}

fn handle_images(ctx: &mut AppContext, paths: Vec<PathBuf>) -> Result<i32> {
    let result = ctx.api.convert_images(paths)?;
    print_report(&result, ctx.verbose, ctx.sample_cap);
    print_messages(&result.messages);
    Ok(0)
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<i32> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = ctx.api.config(action)?;
    print_messages(&result.messages);
    Ok(0)
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

fn print_report(result: &CmdResult, verbose: bool, sample_cap: usize) {
    let Some(report) = &result.report else {
        return;
    };

    let fixed: Vec<_> = report.files_with(Outcome::Fixed).collect();
    let shown = if verbose { fixed.len() } else { fixed.len().min(sample_cap) };
    for file in fixed.iter().take(shown) {
        println!("  {} {}", "fixed".green(), file.path.display());
        if verbose {
            for note in &file.notes {
                println!("        {}", note.dimmed());
            }
        }
    }
    if fixed.len() > shown {
        println!("  {} ({} more not shown)", "…".dimmed(), fixed.len() - shown);
    }

    for file in report.files_with(Outcome::Errored) {
        println!("  {} {}", "error".red(), file.path.display());
        for note in &file.notes {
            println!("        {}", note.red());
        }
    }
}
