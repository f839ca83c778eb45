pub mod config;
pub mod intake;
pub mod llm;
pub mod mailer;
pub mod pages;
pub mod report;
pub mod session;
pub mod tasks;
pub mod web;

pub use config::{MailConfig, ServiceConfig};
pub use web::{AppState, create_app};

#[cfg(test)]
pub(crate) mod test_support;
