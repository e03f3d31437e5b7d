// Typed GraphQL client for the draft API

pub mod draft_client;
pub mod errors;
pub mod types;

pub use draft_client::DraftClient;
pub use errors::ClientError;
