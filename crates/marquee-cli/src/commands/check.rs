use std::path::Path;

use anyhow::Result;

use marquee_core::Deck;

pub fn run(deck_path: &Path) -> Result<()> {
    // Unreadable files are errors so `check` exits non-zero on them
    let deck = Deck::load(deck_path)?;

    if deck.is_empty() {
        println!(
            "{}: valid, but contains no slides (the carousel will be disabled)",
            deck_path.display()
        );
        return Ok(());
    }

    println!("{}: {} slides\n", deck_path.display(), deck.len());
    for (i, slide) in deck.slides.iter().enumerate() {
        let link = slide.link.as_deref().unwrap_or("-");
        println!("  [{}] {} ({})", i + 1, slide.title, link);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_deck_is_an_error() {
        assert!(run(Path::new("/nonexistent/deck.toml")).is_err());
    }
}
