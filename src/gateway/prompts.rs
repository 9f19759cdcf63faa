//! Prompt templates for the gateway calls.

use crate::model::UserProfile;

/// Career advice prompt. Profile fields go in verbatim.
pub fn career_advice(profile: &UserProfile) -> String {
    format!(
        "You are an expert HR consultant for the \"Silver Economy\". Analyze this elderly user profile:\n\
         Name: {name}, Experience: {years} years.\n\
         Skills: {skills}.\n\
         Digital Literacy: {literacy}/100.\n\
         \n\
         Suggest 2 specific \"Silver+Agent\" job roles where their human wisdom combines with AI speed.\n\
         Keep it encouraging and brief (under 50 words).",
        name = profile.name,
        years = profile.experience_years,
        skills = profile.skills.join(", "),
        literacy = profile.digital_literacy_score,
    )
}

/// Goal decomposition prompt asking for a strict JSON array.
pub fn task_decomposition(goal: &str, steps: usize) -> String {
    format!(
        "Break down the work goal: \"{goal}\" into {steps} actionable steps for an elderly worker \
         collaborating with an AI Agent.\n\
         Return strictly a JSON array.\n\
         Format: [{{\"content\": \"string\", \"type\": \"HUMAN\" | \"AGENT\"}}]\n\
         \n\
         Rules:\n\
         - \"HUMAN\" tasks involve judgment, empathy, decision making, or verify quality.\n\
         - \"AGENT\" tasks involve data processing, drafting, searching, or calculation."
    )
}
