use annas_core::{AnnasArchiveStore, DEFAULT_TIMEOUT};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let query = std::env::args().nth(1).unwrap_or_else(|| "1984".to_string());
    let store = AnnasArchiveStore::new()?;

    println!("Searching for '{}'...\n", query);

    let mut results: Vec<_> = store.search(&query, 5, DEFAULT_TIMEOUT).await?.collect();

    println!("Found {} results:", results.len());
    for (i, book) in results.iter().enumerate() {
        println!("  {}. {} - {} [{}] (md5: {})", i + 1, book.title, book.author, book.format, book.content_id);
    }

    // Resolve the first result that has a known format
    if let Some(book) = results.iter_mut().find(|b| !b.format.is_empty()) {
        println!("\nResolving downloads for: {}\n", book.title);

        store.resolve(book, DEFAULT_TIMEOUT).await?;

        if book.downloads.is_empty() {
            println!("No direct download links passed the probe.");
        }
        for (label, url) in &book.downloads {
            println!("  {} -> {}", label, url);
        }

        println!("\nOpen in browser: {}", store.open(Some(book.content_id.as_str()), true).url());
    }

    Ok(())
}
