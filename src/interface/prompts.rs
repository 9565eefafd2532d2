use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::interface::render::format_suggestion;
use crate::models::{AgeBracket, ResolvedFood, Trimester};
use crate::nutrition::Resolution;

/// Top-level choices in an interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    AddFood,
    RemoveFood,
    ShowFoods,
    Calculate,
    Clear,
    Quit,
}

impl SessionAction {
    pub const ALL: [SessionAction; 6] = [
        SessionAction::AddFood,
        SessionAction::RemoveFood,
        SessionAction::ShowFoods,
        SessionAction::Calculate,
        SessionAction::Clear,
        SessionAction::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SessionAction::AddFood => "Add a food",
            SessionAction::RemoveFood => "Remove a food",
            SessionAction::ShowFoods => "Show foods eaten",
            SessionAction::Calculate => "Calculate nutrient gap",
            SessionAction::Clear => "Start over",
            SessionAction::Quit => "Quit",
        }
    }
}

/// Prompt for the next action.
pub fn prompt_action() -> Result<SessionAction> {
    let labels: Vec<&str> = SessionAction::ALL.iter().map(|a| a.label()).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(SessionAction::ALL[selection])
}

/// Prompt for a food name. Empty input returns `None`.
pub fn prompt_food_name() -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Food name (or press Enter to go back)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    Ok(if input.is_empty() {
        None
    } else {
        Some(input.to_string())
    })
}

/// Offer near matches after a rejected lookup, marking those under `min_score`.
pub fn prompt_suggestion(suggestions: &[Resolution], min_score: u8) -> Result<Option<String>> {
    if suggestions.is_empty() {
        return Ok(None);
    }

    let mut options: Vec<String> = suggestions
        .iter()
        .map(|s| format_suggestion(s, min_score))
        .collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Did you mean one of these?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(suggestions.get(selection).map(|s| s.name.clone()))
}

/// Prompt for which food to remove.
pub fn prompt_removal(foods: &[ResolvedFood]) -> Result<Option<usize>> {
    let mut options: Vec<String> = foods.iter().map(|f| f.name().to_string()).collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Remove which food?")
        .items(&options)
        .default(options.len() - 1)
        .interact()?;

    Ok((selection < foods.len()).then_some(selection))
}

/// Prompt for the age bracket.
pub fn prompt_age_bracket() -> Result<AgeBracket> {
    let labels: Vec<&str> = AgeBracket::ALL.iter().map(|b| b.label()).collect();
    let selection = Select::new()
        .with_prompt("Select age group")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(AgeBracket::ALL[selection])
}

/// Prompt for the trimester.
pub fn prompt_trimester() -> Result<Trimester> {
    let labels: Vec<&str> = Trimester::ALL.iter().map(|t| t.label()).collect();
    let selection = Select::new()
        .with_prompt("Select trimester")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Trimester::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
