use super::*;

const BULBASAUR: &str = r##"{
    "id": 1,
    "name": "bulbasaur",
    "sprites": {
        "front_default": "https://img.example/1.png",
        "back_default": "https://img.example/back/1.png",
        "front_shiny": null
    },
    "types": [
        { "name": "grass", "color": "#78C850" },
        { "name": "poison", "color": "#A040A0" }
    ],
    "stats": {
        "hp": 45, "attack": 49, "defense": 49,
        "specialAttack": 65, "specialDefense": 65, "speed": 45
    },
    "moves": [
        { "name": "tackle", "type": { "name": "normal", "color": "#A8A878" }, "power": 40 },
        { "name": "growl", "type": { "name": "normal", "color": "#A8A878" }, "power": null }
    ],
    "description": "A strange seed was planted on its back at birth."
}"##;

#[test]
fn deserialize_full_item() {
    let item: CatalogItem = serde_json::from_str(BULBASAUR).unwrap();
    assert_eq!(item.id, 1);
    assert_eq!(item.name, "bulbasaur");
    assert_eq!(item.type_names(), "grass, poison");
    assert_eq!(item.stats.special_attack, 65);
    assert_eq!(item.stats.total(), 318);
    assert_eq!(item.moves[0].power, Some(40));
    assert_eq!(item.moves[1].power, None);
    assert_eq!(item.moves[1].move_type.name, "normal");
}

#[test]
fn sprites_missing_variants_are_none() {
    let item: CatalogItem = serde_json::from_str(BULBASAUR).unwrap();
    assert_eq!(
        item.sprites.get(SpriteVariant::FrontDefault),
        Some("https://img.example/1.png")
    );
    assert_eq!(item.sprites.get(SpriteVariant::FrontShiny), None);
    assert_eq!(item.sprites.get(SpriteVariant::BackShiny), None);
}

#[test]
fn deserialize_minimal_item() {
    let item: CatalogItem = serde_json::from_str(r#"{"id": 25, "name": "pikachu"}"#).unwrap();
    assert_eq!(item.name, "pikachu");
    assert!(item.types.is_empty());
    assert_eq!(item.stats, Stats::default());
}

#[test]
fn stat_above_max_is_rejected() {
    let json = r#"{"id": 1, "name": "x", "stats": {"hp": 300, "attack": 0, "defense": 0,
        "specialAttack": 0, "specialDefense": 0, "speed": 0}}"#;
    assert!(serde_json::from_str::<CatalogItem>(json).is_err());
}
