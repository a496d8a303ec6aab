pub mod client;
pub mod error;
pub mod types;

pub use client::{SteamClient, parse_app_list};
pub use error::SteamError;
pub use types::{AppEntry, app_pairs};
