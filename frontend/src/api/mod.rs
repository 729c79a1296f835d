mod attendance;
mod auth;
mod bulk_import;
pub mod client;
mod department;
mod employee;
mod leave;
mod menu;
mod onboarding;
mod profile;
mod timesheet;
pub mod types;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
