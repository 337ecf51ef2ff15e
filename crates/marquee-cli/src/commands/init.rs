use std::path::Path;

use anyhow::{anyhow, Result};

const SAMPLE_DECK: &str = r##"title = "Front page"

[[slides]]
title = "Fresh sourdough, every morning"
body = ["Baked at 6am from our own starter"]
link = "https://example.com/shop"
accent = "#d8a657"

[[slides]]
title = "Weekend special"
body = ["Two croissants for the price of one", "Saturday and Sunday only"]

[[slides]]
title = "Order ahead"
body = ["Skip the line, pick up at the counter"]
link = "https://example.com/order"
"##;

pub fn run(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(anyhow!("{} already exists, not overwriting", path.display()));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, SAMPLE_DECK)?;
    println!("Wrote sample deck to {}", path.display());
    println!("Play it with:\n  marquee run {}", path.display());

    Ok(())
}
