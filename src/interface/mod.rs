pub mod prompts;
pub mod render;

pub use prompts::{
    SessionAction, prompt_action, prompt_age_bracket, prompt_food_name, prompt_removal,
    prompt_suggestion, prompt_trimester, prompt_yes_no,
};
pub use render::{
    describe_error, display_food_list, display_report, display_requirements, display_suggestions,
    format_gap, format_suggestion, threshold_marker,
};
