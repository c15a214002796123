//! Pure recipe logic: difficulty tiers, nutrition scoring and share links.

pub mod difficulty;
pub mod nutrition;
pub mod share;

pub use difficulty::{calculate_difficulty, ingredient_count, sort_by_difficulty};
pub use nutrition::parse_nutritional_info;
pub use share::{SharePlatform, email_body, share_url};
