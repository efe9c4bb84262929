pub mod converter;
pub mod dismissal;
pub mod engine;
pub mod finance;
pub mod planning;
pub mod progress;
pub mod report;
pub mod season;
pub mod suggestions;
pub mod travel;

pub use crate::domain::model::{ChecklistItem, Suggestion, UserContext};
pub use crate::domain::ports::{Clock, ConfigProvider, DismissalStore, RateProvider, Storage};
pub use crate::utils::error::Result;
