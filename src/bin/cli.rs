//! Bookstore CLI Client
//!
//! Command-line interface for interacting with the bookstore server.

use std::collections::HashMap;

use clap::{Parser, Subcommand};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::Method;

/// Bookstore CLI
#[derive(Parser, Debug)]
#[command(name = "bookstore-cli")]
#[command(about = "CLI for the bookstore REST API")]
struct Args {
    /// Server base URL
    #[arg(short, long, default_value = "http://127.0.0.1:5000")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every book
    List,

    /// Get a book by id
    Get {
        /// The book id
        id: String,
    },

    /// Create a book from a JSON document
    Create {
        /// Full book as JSON, e.g. '{"id":8,"title":"T","isbn":"1"}'
        json: String,
    },

    /// Replace a book with a JSON document
    Replace {
        /// The book id
        id: String,

        /// Full book as JSON
        json: String,
    },

    /// Update individual fields
    Patch {
        /// The book id
        id: String,

        /// Field assignments as name=value (e.g. prices=9.99 status=false)
        #[arg(required = true)]
        fields: Vec<String>,
    },

    /// Delete a book by id
    #[command(alias = "del")]
    Delete {
        /// The book id
        id: String,
    },

    /// Search books (not available on the server)
    Search {
        /// Query parameters as name=value
        criteria: Vec<String>,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new();
    let base = args.server.trim_end_matches('/');
    let book_url = |id: &str| format!("{}/books/{}", base, id);

    let request = match args.command {
        Commands::List => client.get(format!("{}/books", base)),
        Commands::Get { id } => client.get(book_url(&id)),
        Commands::Create { json } => json_body(client.post(format!("{}/books", base)), json),
        Commands::Replace { id, json } => json_body(client.put(book_url(&id)), json),
        Commands::Patch { id, fields } => {
            let fields = parse_assignments(&fields)?;
            client.request(Method::PATCH, book_url(&id)).json(&fields)
        }
        Commands::Delete { id } => client.delete(book_url(&id)),
        Commands::Search { criteria } => {
            let criteria = parse_assignments(&criteria)?;
            client.get(format!("{}/books/search", base)).query(&criteria)
        }
    };

    let response = request.send()?;
    let status = response.status();
    let body = response.text()?;

    println!("{}", status);
    if !body.is_empty() {
        println!("{}", body);
    }

    Ok(())
}

fn json_body(request: RequestBuilder, json: String) -> RequestBuilder {
    request
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(json)
}

fn parse_assignments(pairs: &[String]) -> Result<HashMap<String, String>, String> {
    pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .ok_or_else(|| format!("expected name=value, got '{}'", pair))
        })
        .collect()
}
