use std::path::Path;

use clap::Parser;
use tracing::{debug, warn};

use prenatal_nutrition_rs::catalog::{FoodCatalog, FoodLookup, load_catalog};
use prenatal_nutrition_rs::cli::{Cli, Command};
use prenatal_nutrition_rs::error::{NutritionError, Result};
use prenatal_nutrition_rs::interface::{
    SessionAction, describe_error, display_food_list, display_report, display_requirements,
    display_suggestions, prompt_action, prompt_age_bracket, prompt_food_name, prompt_removal,
    prompt_suggestion, prompt_trimester, prompt_yes_no,
};
use prenatal_nutrition_rs::models::{AgeBracket, ResolvedFood, Trimester};
use prenatal_nutrition_rs::nutrition::{FoodResolver, MatchPolicy, SUGGESTION_LIMIT, requirements};
use prenatal_nutrition_rs::session::NutritionSession;
use prenatal_nutrition_rs::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let resolver = FoodResolver::new().with_policy(MatchPolicy {
        min_score: cli.min_score,
    });
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Session => cmd_session(&cli.catalog, &resolver),
        Command::Report {
            foods,
            age,
            trimester,
            json,
        } => cmd_report(&cli.catalog, &resolver, &foods, age, trimester, json),
        Command::Search { query, limit } => cmd_search(&cli.catalog, &resolver, &query, limit),
        Command::Requirements { age, trimester } => cmd_requirements(age, trimester),
    }
}

fn open_catalog(file_path: &str) -> Result<Option<FoodCatalog>> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Food catalog not found: {}", file_path);
        eprintln!("Pass --catalog with a CSV or JSON food composition file.");
        return Ok(None);
    }

    let catalog = load_catalog(path)?;
    if catalog.is_empty() {
        eprintln!("Food catalog {} has no entries.", file_path);
        return Ok(None);
    }

    Ok(Some(catalog))
}

/// Interactive loop: add and remove foods, then calculate.
fn cmd_session(file_path: &str, resolver: &FoodResolver) -> Result<()> {
    let Some(catalog) = open_catalog(file_path)? else {
        return Ok(());
    };

    println!("Loaded {} foods", catalog.len());
    let mut session = NutritionSession::new();

    loop {
        match prompt_action()? {
            SessionAction::AddFood => add_food_interactive(&mut session, &catalog, resolver)?,
            SessionAction::RemoveFood => {
                if session.is_empty() {
                    println!("Nothing to remove.");
                    continue;
                }
                if let Some(index) = prompt_removal(session.foods())? {
                    let removed = session.remove(index)?;
                    println!("Removed: {}", removed.name());
                }
            }
            SessionAction::ShowFoods => display_food_list(session.foods()),
            SessionAction::Calculate => {
                if session.is_empty() {
                    println!("{}", describe_error(&NutritionError::EmptySession));
                    continue;
                }
                let age = prompt_age_bracket()?;
                let trimester = prompt_trimester()?;
                display_report(&session.report(age, trimester)?);
            }
            SessionAction::Clear => {
                if prompt_yes_no("Remove all foods?", false)? {
                    session.clear();
                    println!("Session cleared.");
                }
            }
            SessionAction::Quit => break,
        }
    }

    Ok(())
}

fn add_food_interactive(
    session: &mut NutritionSession,
    catalog: &FoodCatalog,
    resolver: &FoodResolver,
) -> Result<()> {
    let Some(text) = prompt_food_name()? else {
        return Ok(());
    };

    let added = session
        .add_by_name(&text, catalog, resolver)
        .map(|food| (food.name().to_string(), food.score));

    match added {
        Ok((name, score)) => println!("Added: {} ({}% match)", name, score),
        Err(NutritionError::LowConfidenceMatch { .. }) => {
            println!("No confident match for '{}'.", text);
            let suggestions = resolver.top_matches(&text, catalog.all_names(), SUGGESTION_LIMIT);
            if let Some(name) = prompt_suggestion(&suggestions, resolver.policy().min_score)? {
                let score = suggestions
                    .iter()
                    .find(|s| s.name == name)
                    .map_or(0, |s| s.score);
                session.add(ResolvedFood::new(catalog.lookup(&name)?, text, score));
                println!("Added: {}", name);
            } else {
                println!("Check the spelling or try another name.");
            }
        }
        Err(e) if e.is_user_recoverable() => println!("{}", describe_error(&e)),
        Err(e) => return Err(e),
    }

    Ok(())
}

/// Resolve every food, skip the ones that fail, then print the gap.
fn cmd_report(
    file_path: &str,
    resolver: &FoodResolver,
    foods: &[String],
    age: u8,
    trimester: u8,
    json: bool,
) -> Result<()> {
    let age = AgeBracket::try_from(age)?;
    let trimester = Trimester::try_from(trimester)?;

    let Some(catalog) = open_catalog(file_path)? else {
        return Ok(());
    };

    let mut session = NutritionSession::new();
    for text in foods {
        match session.add_by_name(text, &catalog, resolver) {
            Ok(food) => debug!(query = %text, matched = %food.name(), "food counted"),
            Err(e) if e.is_user_recoverable() => {
                warn!(query = %text, error = %e, "food skipped");
                eprintln!("Skipped: {}", describe_error(&e));
            }
            Err(e) => return Err(e),
        }
    }

    let report = match session.report(age, trimester) {
        Ok(report) => report,
        Err(NutritionError::EmptySession) => {
            eprintln!("{}", describe_error(&NutritionError::EmptySession));
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_food_list(session.foods());
        display_report(&report);
    }

    Ok(())
}

/// List the closest catalog names for a query.
fn cmd_search(file_path: &str, resolver: &FoodResolver, query: &str, limit: usize) -> Result<()> {
    let Some(catalog) = open_catalog(file_path)? else {
        return Ok(());
    };

    let matches = resolver.top_matches(query, catalog.all_names(), limit);
    display_suggestions(query, &matches, resolver.policy().min_score);
    Ok(())
}

/// Print the requirement table, optionally narrowed to one bracket or trimester.
fn cmd_requirements(age: Option<u8>, trimester: Option<u8>) -> Result<()> {
    let age = age.map(AgeBracket::try_from).transpose()?;
    let trimester = trimester.map(Trimester::try_from).transpose()?;

    display_requirements(requirements::all().filter(|(a, t, _)| {
        age.is_none_or(|want| want == *a) && trimester.is_none_or(|want| want == *t)
    }));
    Ok(())
}
