//! DeskQueue SDK - Rust Client Library
//!
//! Provides a convenient client for the DeskQueue daemon.
//!
//! # Example
//!
//! ```no_run
//! use deskqueue_sdk::{DeskQueueClient, ServiceType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DeskQueueClient::connect("http://127.0.0.1:9530").await?;
//!
//!     let ana = client.append("Ana", ServiceType::Normal).await?;
//!     println!("{} is at position {}", ana.name, ana.position);
//!
//!     let next = client.advance().await?;
//!     println!("Served {}", next.served.name);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::DeskQueueClient;
pub use error::{Result, SdkError};
pub use types::{AdvanceResponse, Client, ListResponse, RemoveResponse, ServiceType, StatsResponse};
