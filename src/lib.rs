pub mod initials;
pub mod models;
pub mod registry;
pub mod render;
pub mod runner;

pub use initials::{InitialsDeriver, InitialsStrategy, derive_initials};
pub use models::{Color, CompanyEntry};
pub use registry::portfolio_companies;
pub use render::BadgeRenderer;
pub use runner::{RunSummary, run};
