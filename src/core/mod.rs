pub mod add;
pub mod config;
pub mod del;
pub mod export;
pub mod gatekeeper;
pub mod log;
pub mod notifier;
pub mod scan;
pub mod session;
pub mod sync;
