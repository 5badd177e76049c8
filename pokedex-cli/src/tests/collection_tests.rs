use super::*;

#[test]
fn pokemon_ref_parses_ids() {
    assert_eq!("25".parse::<PokemonRef>(), Ok(PokemonRef::Id(25)));
    assert_eq!("#150".parse::<PokemonRef>(), Ok(PokemonRef::Id(150)));
}

#[test]
fn pokemon_ref_parses_names_case_insensitively() {
    assert_eq!(
        " Pikachu ".parse::<PokemonRef>(),
        Ok(PokemonRef::Name("pikachu".to_string()))
    );
    assert_eq!(
        "mr-mime".parse::<PokemonRef>(),
        Ok(PokemonRef::Name("mr-mime".to_string()))
    );
}

#[test]
fn pokemon_ref_rejects_blank() {
    assert!("  ".parse::<PokemonRef>().is_err());
    assert!("#".parse::<PokemonRef>().is_err());
}
