use anyhow::{bail, Result};
use nwsscraper::{parse_table_file, TableConfig};
use std::env;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (html_path, location) = match args.as_slice() {
        [path, location, ..] => (path, location),
        _ => bail!("Usage: nwsscraper <HTML_FILE> <LOCATION> [CONFIG_JSON]"),
    };

    let config = match args.get(2) {
        Some(path) => TableConfig::load(path)?,
        None => TableConfig::default(),
    };

    let map = parse_table_file(html_path, location, &config)?;
    info!(headers = map.len(), "parsed {}", html_path);

    println!("{}", serde_json::to_string_pretty(&map)?);
    Ok(())
}
