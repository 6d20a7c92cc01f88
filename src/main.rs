// src/main.rs

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use image_search::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().context("loading configuration")?;
    tracing::debug!("Config: {:?}", config);

    let db_path = config.db_path();
    let mut store = SqliteStore::open(&db_path)
        .with_context(|| format!("opening index at {}", db_path.display()))?;

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("image-search");
    let verb = args.get(1).map(String::as_str).unwrap_or_default();
    let arg = args.get(2).map(String::as_str);

    match verb {
        "index" => {
            let root = arg.map(PathBuf::from).unwrap_or_else(|| config.sample_root.clone());
            let filter = ExtensionFilter::new(&config.extensions);
            let extractor = TesseractExtractor::new(&config.ocr_binary, config.ocr_language.clone());

            Scanner::new(&filter, &extractor, &mut store)
                .scan_folder(&root)
                .with_context(|| format!("scanning {}", root.display()))?;
        }
        "search" | "f" | "s" => {
            let Some(query) = arg else {
                eprintln!("Usage: {} {} <query>", program, verb);
                return Ok(());
            };
            for path in store.search(query)? {
                println!("{}", path);
            }
        }
        "pluck" | "plucky" | "pl" => {
            let Some(query) = arg else {
                eprintln!("Usage: {} {} <query>", program, verb);
                return Ok(());
            };
            let opener = match &config.opener {
                Some(program) => SystemOpener::new(program),
                None => SystemOpener::default(),
            };
            if Searcher::pluck(&store, &opener, query)?.is_none() {
                eprintln!("No match for '{}'", query);
            }
        }
        "list" | "ls" => {
            for file in store.list_all()? {
                println!("{}", serde_json::to_string(&file)?);
            }
        }
        other => println!("what even is {}", other),
    }

    Ok(())
}
