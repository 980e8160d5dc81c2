//! Widget components for the TUI

mod catalog;
mod course_card;
mod key_hints;
mod onboarding;

pub use catalog::{CatalogView, HEADER};
pub use course_card::CourseCard;
pub use key_hints::KeyHints;
pub use onboarding::{OnboardingView, CONTINUE, WELCOME};
