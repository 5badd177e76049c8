use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_client::PokedexApi;
use pokedex_core::{page_for_number, total_pages};

use crate::display;
use crate::session::Session;
use crate::{CliError, spinner};

/// List one catalog page. `page` is 1-based; out-of-range pages are clamped.
pub(crate) fn run_list(session: &Session, page: u32, quiet: bool) -> Result<(), CliError> {
    let client = session.client();
    let page_size = session.page_size();
    let total = total_pages(client.max_id(), page_size);
    let Some(request) = page_for_number(page.saturating_sub(1), page_size, client.max_id()) else {
        log::info!("The catalog is empty.");
        return Ok(());
    };
    let shown = request.offset / page_size + 1;
    log::debug!(
        "Loading page {} (offset {}, limit {})",
        shown,
        request.offset,
        request.limit
    );

    let pb = spinner::start(format!("Loading page {}...", shown), quiet);
    let items = session.block_on(client.list_page(request.limit, request.offset));
    pb.finish_and_clear();
    let items = items?;

    log::info!(
        "{}",
        format!("Catalog page {} of {}", shown, total).if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();
    for item in &items {
        display::log_item_line(item);
    }
    crate::log_blank();

    let mut hints = Vec::new();
    if shown > 1 {
        hints.push(format!("--page {} for previous", shown - 1));
    }
    if shown < total {
        hints.push(format!("--page {} for next", shown + 1));
    }
    if !hints.is_empty() {
        log::info!(
            "{}",
            hints.join(", ").if_supports_color(Stdout, |t| t.dimmed())
        );
    }
    Ok(())
}

/// Show the detail view for one item.
pub(crate) fn run_show(session: &Session, name: &str, quiet: bool) -> Result<(), CliError> {
    let name = name.trim().to_lowercase();
    let pb = spinner::start(format!("Loading {}...", name), quiet);
    let item = session.block_on(session.client().item_by_name(&name));
    pb.finish_and_clear();

    display::log_item_details(&item?);
    Ok(())
}
