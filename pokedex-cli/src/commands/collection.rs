use std::io::Write;
use std::str::FromStr;

use chrono::Utc;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_client::PokedexApi;
use pokedex_core::{NewCollectionEntry, parse_timestamp};

use crate::display;
use crate::session::Session;
use crate::{CliError, spinner};

/// A creature named on the command line, by catalog id or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PokemonRef {
    Id(u32),
    Name(String),
}

impl FromStr for PokemonRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches('#');
        if s.is_empty() {
            return Err("expected a Pokemon name or id".to_string());
        }
        Ok(match s.parse::<u32>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Name(s.to_lowercase()),
        })
    }
}

/// Fields for catching a new Pokemon.
pub(crate) struct AddArgs {
    pub pokemon: PokemonRef,
    pub level: u8,
    pub location: String,
    pub notes: Option<String>,
    pub caught_at: Option<String>,
}

/// Fields to change on an existing entry. `None` keeps the current value.
pub(crate) struct EditArgs {
    pub id: String,
    pub level: Option<u8>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub caught_at: Option<String>,
}

/// Show every entry in the box with its catalog details.
///
/// Warming starts first so entries resolved later in the batch can find
/// their names in the index instead of fetching a page each. The warmup is
/// not awaited: whatever it has not finished when the command returns is
/// cancelled along with the runtime, and misses fall back to a single page
/// fetch.
pub(crate) fn run_box_list(session: &Session, quiet: bool) -> Result<(), CliError> {
    session.start_warmup();
    let sync = session.sync();

    let pb = spinner::start("Loading your box...", quiet);
    let resolved = session.block_on(sync.resolve_collection());
    pb.finish_and_clear();
    let resolved = resolved?;

    if resolved.is_empty() {
        log::info!(
            "{}",
            "Your box is empty".if_supports_color(Stdout, |t| t.bold())
        );
        log::info!("Catch some Pokemon with 'pokedex box add <name> --level <n> --location <place>'.");
        return Ok(());
    }

    log::info!(
        "{}",
        format!("Your box ({} Pokemon)", resolved.len()).if_supports_color(Stdout, |t| t.bold()),
    );
    for r in &resolved {
        crate::log_blank();
        display::log_entry(&r.entry, &r.item);
    }
    Ok(())
}

/// Catch a Pokemon: create a new box entry.
pub(crate) fn run_box_add(session: &Session, args: AddArgs, quiet: bool) -> Result<(), CliError> {
    let created_at = match &args.caught_at {
        Some(ts) => parse_timestamp(ts)?,
        None => Utc::now(),
    };
    let sync = session.sync();

    let pb = spinner::start("Catching...", quiet);
    let result = session.block_on(async {
        let (pokemon_id, name) = match &args.pokemon {
            PokemonRef::Id(id) => (*id, sync.resolve_name(*id).await?),
            PokemonRef::Name(name) => {
                let item = sync.api().item_by_name(name).await?;
                sync.index().insert(item.id, item.name.clone()).await;
                (item.id, item.name)
            }
        };
        let entry = NewCollectionEntry::new(
            pokemon_id,
            args.level,
            &args.location,
            args.notes.as_deref(),
            created_at,
        )?;
        let created = sync.create(&entry).await?;
        Ok::<_, CliError>((name, created))
    });
    pb.finish_and_clear();
    let (name, created) = result?;

    log::info!(
        "{} Caught {} (entry {})",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        name.if_supports_color(Stdout, |t| t.bold()),
        created.id,
    );
    Ok(())
}

/// Edit level, location, notes, or catch time of an entry.
pub(crate) fn run_box_edit(session: &Session, args: EditArgs, quiet: bool) -> Result<(), CliError> {
    if args.level.is_none()
        && args.location.is_none()
        && args.notes.is_none()
        && args.caught_at.is_none()
    {
        log::info!("Nothing to change. Pass --level, --location, --notes, or --caught-at.");
        return Ok(());
    }
    let caught_at = args.caught_at.as_deref().map(parse_timestamp).transpose()?;
    let sync = session.sync();

    let pb = spinner::start("Updating...", quiet);
    let result = session.block_on(async {
        let current = sync.api().get_entry(&args.id).await?;
        let mut update = current.to_update();
        if let Some(level) = args.level {
            update = update.with_level(level);
        }
        if let Some(location) = &args.location {
            update = update.with_location(location);
        }
        if let Some(notes) = &args.notes {
            update = update.with_notes(notes);
        }
        if let Some(ts) = caught_at {
            update = update.with_created_at(ts);
        }
        sync.update(&args.id, &update).await
    });
    pb.finish_and_clear();
    let updated = result?;

    log::info!(
        "{} Updated entry {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        updated.id,
    );
    log::info!("  Level:    {}", updated.level);
    log::info!("  Location: {}", updated.location);
    log::info!("  Caught:   {}", display::format_caught_at(&updated));
    if let Some(notes) = &updated.notes {
        log::info!("  Notes:    {}", notes);
    }
    Ok(())
}

/// Release one entry from the box.
pub(crate) fn run_box_release(
    session: &Session,
    id: &str,
    yes: bool,
    quiet: bool,
) -> Result<(), CliError> {
    if !yes && !confirm(&format!("Release entry {} from your box?", id))? {
        log::info!("Cancelled.");
        return Ok(());
    }

    let sync = session.sync();
    let pb = spinner::start("Releasing...", quiet);
    let result = session.block_on(sync.delete(id));
    pb.finish_and_clear();
    result?;

    log::info!(
        "{} Released entry {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        id,
    );
    Ok(())
}

/// Release every entry in the box.
pub(crate) fn run_box_clear(session: &Session, yes: bool, quiet: bool) -> Result<(), CliError> {
    if !yes && !confirm("Release every Pokemon in your box?")? {
        log::info!("Cancelled.");
        return Ok(());
    }

    let sync = session.sync();
    let pb = spinner::start("Clearing box...", quiet);
    let result = session.block_on(sync.clear());
    pb.finish_and_clear();
    result?;

    log::info!(
        "{} Box cleared",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
    );
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool, CliError> {
    print!("{} [y/N]: ", prompt);
    std::io::stdout().flush()?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
#[path = "../tests/collection_tests.rs"]
mod tests;
