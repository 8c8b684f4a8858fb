// Skill endorsements: validation against the talent's declared skills,
// creation, and per-talent / per-skill aggregation.

pub mod handlers;
pub mod validation;
