//! Server command implementation

use std::path::Path;

use anyhow::Result;
use tally_server::ServerConfig;

use super::open_store;

pub async fn cmd_serve(
    data_path: &Path,
    host: &str,
    port: u16,
    static_dir: Option<&Path>,
    allow_origins: Vec<String>,
) -> Result<()> {
    println!("🚀 Starting Tally web server...");
    println!("   Data file: {}", data_path.display());
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }
    if !allow_origins.is_empty() {
        println!("   CORS origins: {}", allow_origins.join(", "));
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let store = open_store(data_path)?;

    let config = ServerConfig {
        allowed_origins: allow_origins,
    };

    let static_dir_str =
        static_dir.map(|p| p.to_str().expect("static_dir path must be valid UTF-8"));
    tally_server::serve_with_config(store, host, port, static_dir_str, config).await?;

    Ok(())
}
