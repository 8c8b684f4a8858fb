// Prompt text for the ranking module.

use crate::llm_client::prompts::{join_or, or_placeholder};
use crate::models::{TalentToken, User};

/// System instruction for talent scoring.
pub const SCORE_SYSTEM: &str = "You are a talent assessment expert. \
    Analyze talent profiles and provide numerical rankings based on their skills, \
    experience, and achievements.";

/// System instruction for skill recommendations.
pub const RECOMMEND_SYSTEM: &str = "You are a career development expert \
    specializing in technology and skill recommendations.";

const NO_BIO: &str = "No bio provided";
const NO_SKILLS: &str = "No skills listed";
const NO_PORTFOLIO: &str = "No portfolio provided";

/// Builds the scoring prompt. Output depends only on the inputs.
pub fn build_score_prompt(talent: &User, token: Option<&TalentToken>) -> String {
    let mut prompt = format!(
        "Analyze this talent's profile and provide a ranking score:\n\n\
         Name: {}\n\
         Bio: {}\n\
         Skills: {}\n\
         Portfolio: {}\n",
        talent.display_name(),
        or_placeholder(talent.bio.as_deref(), NO_BIO),
        join_or(&talent.skills, NO_SKILLS),
        or_placeholder(talent.portfolio.as_deref(), NO_PORTFOLIO),
    );

    if let Some(token) = token {
        prompt.push_str(&format!(
            "Goals: {}\nMilestones: {}\n",
            token.goals.join(", "),
            token.milestones.join(", ")
        ));
    }

    prompt.push_str(
        "\nBased on the above information, analyze the talent's potential and current achievements.\n\
         Respond with a JSON object containing:\n\
         - score (number between 0-100)\n\
         - confidence (number between 0-1)\n\
         - reasoning (string explaining the ranking)",
    );
    prompt
}

/// Builds the recommendation prompt from the talent's current profile.
pub fn build_recommend_prompt(talent: &User) -> String {
    format!(
        "Based on this talent's profile, recommend additional skills they should learn:\n\n\
         Current Skills: {}\n\
         Bio: {}\n\
         Portfolio: {}\n\n\
         Analyze their current skills and suggest exactly 3 new skills they should learn \
         to enhance their career prospects. For each skill, explain why it would be valuable \
         based on their current profile.\n\n\
         Respond with a JSON object with a \"recommendations\" array of objects, each containing:\n\
         - skill (string): The recommended skill name\n\
         - reason (string): Why this skill would be valuable\n\
         - confidence (number): Confidence in this recommendation (0-1)",
        join_or(&talent.skills, NO_SKILLS),
        or_placeholder(talent.bio.as_deref(), NO_BIO),
        or_placeholder(talent.portfolio.as_deref(), NO_PORTFOLIO),
    )
}
