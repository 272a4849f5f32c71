pub mod admin;
pub mod auth;
pub mod report;

pub use admin::{AdminCommands, CompanyCommands, PersonCommands};
pub use auth::AuthCommands;
pub use report::ReportCommands;
