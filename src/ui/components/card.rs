//! Post card component renderer.
//!
//! Renders one feed entry as a three-line card (identity and caption with a
//! right-aligned age label, then the image reference, then the reaction
//! tallies) followed by a separator line.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PostCard;

/// Renders all post cards starting at the specified row.
///
/// Returns the next available row position.
pub fn render_cards(row: usize, cards: &[PostCard], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_card(current_row, card, theme, cols);
    }
    current_row
}

/// Renders a single post card starting at the specified row.
///
/// Returns the next available row position (row + 4).
///
/// # Layout
///
/// ```text
///   #3  Weekend coffee break                                    26h ago
///   https://images.unsplash.com/photo-1705743244403-337b88a69b71
///   like 5 · wow 1 · laugh 0
/// ──────────────────────────────────────────────────────────────────────
/// ```
fn render_card(row: usize, card: &PostCard, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("  ");
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("#{}", card.id);
    print!("{}", Theme::reset());
    print!("  ");
    print!("{}", Theme::fg(&theme.colors.caption_fg));
    print!("{}", card.caption);
    print!("{}", Theme::reset());

    let age_len = card.age.chars().count();
    position_cursor(row, cols.saturating_sub(age_len + 1));
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", card.age);
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("  ");
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", card.image_url);
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("  ");
    print!("{}", Theme::fg(&theme.colors.count_fg));
    print!("{}", card.tallies);
    print!("{}", Theme::reset());

    position_cursor(row + 3, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.border));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());

    row + 4
}

/// Renders the notice for posts cut by the row budget.
///
/// Returns the next available row position.
pub fn render_hidden_notice(row: usize, hidden: usize, theme: &Theme) -> usize {
    let noun = if hidden == 1 { "post" } else { "posts" };

    position_cursor(row, 1);
    print!("  ");
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("+ {hidden} older {noun}");
    print!("{}", Theme::reset());
    row + 1
}
