//! Songbook Lookup Client
//!
//! HTTP client for the external song details service that enriches newly
//! created songs with their release date, lyrics, and link.
//!
//! # Example
//!
//! ```ignore
//! use songbook_lookup::{LookupClient, LookupConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LookupClient::new(LookupConfig::new("https://lookup.example.com"))?;
//!
//!     let details = client.song_details("Muse", "Supermassive Black Hole").await?;
//!     println!("Released {}", details.release_date);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::LookupClient;
pub use error::{LookupError, Result};
pub use types::{LookupConfig, SongDetails};
