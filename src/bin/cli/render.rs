use flashlink_lib::flashcards::CardSet;

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";
    pub const DIM: &'static str = "\x1b[2m";
    pub const RED: &'static str = "\x1b[31m";
    pub const GREEN: &'static str = "\x1b[32m";
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Wrap text in a color code when colors are enabled
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Render a card set as a titled, numbered list of cards
pub fn render_card_set(set: &CardSet, use_color: bool) -> String {
    let title = if set.title.is_empty() { "(untitled)" } else { set.title.as_str() };
    let mut lines = vec![
        paint(title, Color::BOLD, use_color),
        paint(&format!("{} cards  id: {}", set.cards.len(), set.id), Color::DIM, use_color),
    ];

    if set.cards.is_empty() {
        lines.push("  (no cards)".to_string());
    }
    for (i, card) in set.cards.iter().enumerate() {
        lines.push(format!(
            "{:>3}. {} {} {}",
            i + 1,
            card.front,
            paint("->", Color::CYAN, use_color),
            card.back
        ));
    }

    lines.join("\n")
}
