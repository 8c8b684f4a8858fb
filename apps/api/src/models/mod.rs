pub mod endorsement;
pub mod investment;
pub mod token;
pub mod user;

pub use endorsement::{NewEndorsement, SkillEndorsement};
pub use investment::Investment;
pub use token::TalentToken;
pub use user::{ProfileUpdate, Role, User};
