//! Text rendering for catalog items and box entries.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use pokedex_core::{CatalogItem, CollectionEntry, STAT_MAX, SpriteVariant};

/// Moves shown in the detail view.
const MOVES_SHOWN: usize = 8;

const BAR_WIDTH: usize = 20;

/// Horizontal bar for a stat, scaled against [`STAT_MAX`].
pub(crate) fn stat_bar(value: u8, width: usize) -> String {
    let filled = (usize::from(value) * width).div_ceil(usize::from(STAT_MAX));
    let filled = filled.min(width);
    format!("{}{}", "\u{2588}".repeat(filled), "\u{2591}".repeat(width - filled))
}

/// `#25 pikachu`
pub(crate) fn item_title(item: &CatalogItem) -> String {
    format!("#{} {}", item.id, item.name)
}

/// One line for list views: `#25 pikachu  [electric]`.
pub(crate) fn log_item_line(item: &CatalogItem) {
    log::info!(
        "  {:<24} {}",
        item_title(item).if_supports_color(Stdout, |t| t.bold()),
        format!("[{}]", item.type_names()).if_supports_color(Stdout, |t| t.cyan()),
    );
}

/// Full detail view.
pub(crate) fn log_item_details(item: &CatalogItem) {
    log::info!(
        "{}  {}",
        item_title(item).if_supports_color(Stdout, |t| t.bold()),
        format!("[{}]", item.type_names()).if_supports_color(Stdout, |t| t.cyan()),
    );
    if !item.description.is_empty() {
        crate::log_blank();
        log::info!("  {}", item.description);
    }

    crate::log_blank();
    log::info!("{}", "Stats".if_supports_color(Stdout, |t| t.bold()));
    for (name, value) in item.stats.named() {
        log::info!(
            "  {:<12} {:>3} {}",
            name,
            value,
            stat_bar(value, BAR_WIDTH).if_supports_color(Stdout, |t| t.green()),
        );
    }
    log::info!("  {:<12} {:>3}", "Total", item.stats.total());

    if !item.moves.is_empty() {
        crate::log_blank();
        log::info!("{}", "Moves".if_supports_color(Stdout, |t| t.bold()));
        for mv in item.moves.iter().take(MOVES_SHOWN) {
            let power = mv
                .power
                .map(|p| format!("Power: {}", p))
                .unwrap_or_default();
            log::info!(
                "  {:<20} {:<10} {}",
                mv.name,
                mv.move_type.name.if_supports_color(Stdout, |t| t.cyan()),
                power.if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        if item.moves.len() > MOVES_SHOWN {
            log::info!(
                "  {}",
                format!("... and {} more", item.moves.len() - MOVES_SHOWN)
                    .if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }

    let sprites: Vec<_> = SpriteVariant::ALL
        .iter()
        .filter_map(|v| item.sprites.get(*v).map(|url| (v.label(), url)))
        .collect();
    if !sprites.is_empty() {
        crate::log_blank();
        log::info!("{}", "Sprites".if_supports_color(Stdout, |t| t.bold()));
        for (label, url) in sprites {
            log::info!("  {:<12} {}", label, url.if_supports_color(Stdout, |t| t.dimmed()));
        }
    }
}

/// A box entry with the item it refers to.
pub(crate) fn log_entry(entry: &CollectionEntry, item: &CatalogItem) {
    log::info!(
        "{}  {}",
        item_title(item).if_supports_color(Stdout, |t| t.bold()),
        format!("[{}]", item.type_names()).if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "  {} {}",
        "Entry:".if_supports_color(Stdout, |t| t.dimmed()),
        entry.id
    );
    log::info!("  Level:    {}", entry.level);
    log::info!("  Location: {}", entry.location);
    log::info!("  Caught:   {}", format_caught_at(entry));
    if let Some(notes) = &entry.notes {
        log::info!("  Notes:    {}", notes);
    }
}

pub(crate) fn format_caught_at(entry: &CollectionEntry) -> String {
    entry.created_at.format("%Y-%m-%d %H:%M UTC").to_string()
}

#[cfg(test)]
#[path = "tests/display_tests.rs"]
mod tests;
