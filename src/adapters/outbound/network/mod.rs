/// Network adapters for external API calls
mod hoodaw_client;

pub use hoodaw_client::HoodawClient;
