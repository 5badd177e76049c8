use serde::{Deserialize, Serialize};

/// Upper bound for every stat in a [`Stats`] block.
pub const STAT_MAX: u8 = 255;

/// A creature as returned by the catalog endpoints.
///
/// Items are never mutated client-side; only the `id -> name` projection is
/// cached (see `CatalogIndex` in `pokedex-client`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeTag>,
    #[serde(default)]
    pub stats: Stats,
    #[serde(default)]
    pub moves: Vec<Move>,
    #[serde(default)]
    pub description: String,
}

impl CatalogItem {
    /// Comma-separated type names (e.g. "grass, poison").
    pub fn type_names(&self) -> String {
        self.types
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A categorical tag with its display color (e.g. `fire` / `#F08030`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeTag {
    pub name: String,
    #[serde(default)]
    pub color: String,
}

/// Sprite image URLs keyed by variant. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub back_shiny: Option<String>,
}

/// The four sprite variants the catalog serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteVariant {
    FrontDefault,
    BackDefault,
    FrontShiny,
    BackShiny,
}

impl SpriteVariant {
    pub const ALL: [SpriteVariant; 4] = [
        Self::FrontDefault,
        Self::BackDefault,
        Self::FrontShiny,
        Self::BackShiny,
    ];

    /// Human label used in detail views.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FrontDefault => "Front",
            Self::BackDefault => "Back",
            Self::FrontShiny => "Shiny Front",
            Self::BackShiny => "Shiny Back",
        }
    }
}

impl Sprites {
    pub fn get(&self, variant: SpriteVariant) -> Option<&str> {
        match variant {
            SpriteVariant::FrontDefault => self.front_default.as_deref(),
            SpriteVariant::BackDefault => self.back_default.as_deref(),
            SpriteVariant::FrontShiny => self.front_shiny.as_deref(),
            SpriteVariant::BackShiny => self.back_shiny.as_deref(),
        }
    }
}

/// The six base stats, each in `0..=255`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub special_attack: u8,
    pub special_defense: u8,
    pub speed: u8,
}

impl Stats {
    /// Stats paired with their display names, in catalog order.
    pub fn named(&self) -> [(&'static str, u8); 6] {
        [
            ("HP", self.hp),
            ("Attack", self.attack),
            ("Defense", self.defense),
            ("Sp. Attack", self.special_attack),
            ("Sp. Defense", self.special_defense),
            ("Speed", self.speed),
        ]
    }

    pub fn total(&self) -> u32 {
        self.named().iter().map(|(_, v)| u32::from(*v)).sum()
    }
}

/// A learnable move. Status moves have no power.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: TypeTag,
    #[serde(default)]
    pub power: Option<u32>,
}

#[cfg(test)]
#[path = "tests/item_tests.rs"]
mod tests;
