pub mod approval;
pub mod attendance;
pub mod auth;
pub mod flash;
pub mod loader;
pub mod policy;
pub mod session;
