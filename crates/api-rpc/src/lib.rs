//! JSON-RPC API Layer
//!
//! Implements the JSON-RPC 2.0 server for DeskQueue.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use jsonrpsee::server::ServerHandle;
pub use server::{RpcServer, RpcServerConfig};
