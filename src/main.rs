//! Sando CLI - sandwich pipeline driver
//!
//! Usage: sando <COMMAND>
//!
//! Commands:
//!   make     Run a recipe through a kitchen and print the result
//!   recipes  List the registered recipes

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sando::application::MakeUseCase;
use sando::domain::ports::{NoopEventSink, PrepEventSink};
use sando::domain::value_objects::Ingredient;
use sando::infrastructure::{build_kitchen, ConsoleEventSink, InMemoryPantry, KitchenKind};
use sando::presentation::{render_outcome_json, render_recipes_json, OutputFormat, TextRenderer};
use std::sync::Arc;

/// Sando - validated, composable sandwich assembly
#[derive(Parser, Debug)]
#[command(name = "sando")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a recipe through a kitchen and print the result
    Make {
        /// Recipe name (defaults to the first registered recipe)
        #[arg(short, long)]
        recipe: Option<String>,

        /// Kitchen interpreter to use
        #[arg(short, long, default_value = "home")]
        kitchen: KitchenKind,

        /// Mark ingredients as out of stock (repeatable)
        #[arg(long = "out-of-stock", value_name = "INGREDIENT")]
        out_of_stock: Vec<Ingredient>,

        /// Suppress step narration on stderr
        #[arg(long)]
        quiet_log: bool,

        /// Emit the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the registered recipes
    Recipes {
        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Make {
            recipe,
            kitchen,
            out_of_stock,
            quiet_log,
            json,
        } => {
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            };
            make(recipe.as_deref(), kitchen, &out_of_stock, quiet_log, format)
        }
        Commands::Recipes { json } => {
            let book = sando::application::RecipeBook::builtin();
            if json {
                println!("{}", render_recipes_json(&book));
            } else {
                println!("{}", TextRenderer::detect().render_recipes(&book));
            }
            Ok(())
        }
    }
}

fn make(
    recipe: Option<&str>,
    kitchen: KitchenKind,
    out_of_stock: &[Ingredient],
    quiet_log: bool,
    format: OutputFormat,
) -> Result<()> {
    let pantry = InMemoryPantry::without(out_of_stock);
    let events: Arc<dyn PrepEventSink> = if quiet_log || format == OutputFormat::Json {
        Arc::new(NoopEventSink)
    } else {
        Arc::new(ConsoleEventSink::new())
    };

    let tech = build_kitchen(kitchen, Arc::new(pantry), events)
        .with_context(|| format!("assembling the '{}' kitchen", kitchen))?;

    let use_case = MakeUseCase::default();
    let outcome = use_case
        .execute(recipe, &tech)
        .context("selecting a recipe")?;

    match format {
        OutputFormat::Json => println!("{}", render_outcome_json(&outcome)),
        OutputFormat::Text => println!("{}", TextRenderer::detect().render_outcome(&outcome)),
    }

    if outcome.result.is_err() {
        std::process::exit(1);
    }
    Ok(())
}
