//! DeskQueue CLI - Command-line interface for the service desk queue

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9530";

#[derive(Parser)]
#[command(name = "deskqueue")]
#[command(about = "DeskQueue service desk CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "DESKQUEUE_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the waiting queue
    List,

    /// Show the client at a position
    Show {
        /// Zero-based position
        #[arg(allow_negative_numbers = true)]
        position: i64,
    },

    /// Register a client at the end of the queue
    Add {
        /// Client name (max 20 characters)
        name: String,

        /// Service type: N (normal) or P (priority)
        #[arg(short = 't', long, default_value = "N")]
        service_type: String,
    },

    /// Serve the client at the head of the queue
    Next,

    /// Remove the client at a position
    Remove {
        /// Zero-based position
        #[arg(allow_negative_numbers = true)]
        position: i64,
    },

    /// Show daemon status
    Status,
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: serde_json::Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<serde_json::Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Deserialize, Tabled)]
struct ClientRow {
    position: usize,
    name: String,
    service_type: String,
    arrival_time: String,
}

#[derive(Deserialize)]
struct ListResult {
    clients: Vec<ClientRow>,
}

async fn call_rpc(url: &str, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to daemon")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            let result = call_rpc(&cli.rpc_url, "queue.list.v1", json!({})).await?;
            let list: ListResult = serde_json::from_value(result)?;

            if list.clients.is_empty() {
                println!("{}", "Queue is empty".yellow());
            } else {
                println!("{}", Table::new(list.clients));
            }
        }

        Commands::Show { position } => {
            let result = call_rpc(&cli.rpc_url, "queue.get.v1", json!({ "position": position }))
                .await?;
            let row: ClientRow = serde_json::from_value(result)?;

            println!("{}", Table::new(vec![row]));
        }

        Commands::Add { name, service_type } => {
            let params = json!({
                "name": name,
                "service_type": service_type,
            });

            let result = call_rpc(&cli.rpc_url, "queue.append.v1", params).await?;
            let row: ClientRow = serde_json::from_value(result)?;

            println!("{}", "✓ Client registered".green().bold());
            println!();
            println!("{}", Table::new(vec![row]));
        }

        Commands::Next => {
            let result = call_rpc(&cli.rpc_url, "queue.advance.v1", json!({})).await?;

            let name = result["served"]["name"].as_str().unwrap_or("?");
            println!("{}", format!("✓ Now serving {}", name).green().bold());
        }

        Commands::Remove { position } => {
            let result = call_rpc(&cli.rpc_url, "queue.remove.v1", json!({ "position": position }))
                .await?;

            let message = result["message"].as_str().unwrap_or("Client removed");
            println!("{}", format!("✓ {}", message).green().bold());
        }

        Commands::Status => {
            println!("{}", "System Status".cyan().bold());
            println!();

            match call_rpc(&cli.rpc_url, "admin.stats.v1", json!({})).await {
                Ok(stats) => {
                    println!("  {} {}", "RPC URL:".bold(), cli.rpc_url);
                    println!("  {} {}", "Status:".bold(), "ONLINE".green());
                    println!();
                    println!("  {} {}", "Waiting:".bold(), stats["waiting"]);
                    println!("  {} {}", "Normal:".bold(), stats["normal_waiting"]);
                    println!("  {} {}", "Priority:".bold(), stats["priority_waiting"]);
                    println!("  {} {} seconds", "Uptime:".bold(), stats["uptime_seconds"]);
                }
                Err(e) => {
                    println!("  {} {}", "Status:".bold(), "ERROR".red());
                    println!("  {} {}", "Error:".bold(), e);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_defaults_to_normal() {
        let cli = Cli::try_parse_from(["deskqueue", "add", "Ana"]).unwrap();
        match cli.command {
            Commands::Add { name, service_type } => {
                assert_eq!(name, "Ana");
                assert_eq!(service_type, "N");
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_parse_negative_position() {
        let cli = Cli::try_parse_from(["deskqueue", "remove", "-1"]).unwrap();
        assert!(matches!(cli.command, Commands::Remove { position: -1 }));
    }

    #[test]
    fn test_client_row_from_rpc_result() {
        let row: ClientRow = serde_json::from_value(json!({
            "name": "Bia",
            "service_type": "P",
            "served": false,
            "arrival_time": "2024-03-01T09:00:00Z",
            "position": 1,
        }))
        .unwrap();

        assert_eq!(row.position, 1);
        assert_eq!(row.service_type, "P");
    }
}
