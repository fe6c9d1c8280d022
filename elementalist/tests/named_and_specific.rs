//! Name-aware registries: per-name grouping and exact-name addressing.

use elementalist::{
    ALL, Arg, DEFAULT, Details, LookupError, NamedElementRegistry, Registry,
    SpecificElementRegistry,
};

mod common;
use common::{Document, Folder, JsonRequest, Page, Request, kinds};

fn views() -> NamedElementRegistry<&'static str> {
    let k = kinds();
    let mut registry = NamedElementRegistry::new(k.hierarchy.clone());
    let named = |name: &str| Details::named(name);
    registry
        .create_with("index", [&k.request, &k.page], named("index"))
        .unwrap();
    registry
        .create_with("folder index", [&k.request, &k.folder], named("index"))
        .unwrap();
    registry
        .create_with("edit", [&k.request, &k.page], named("edit"))
        .unwrap();
    registry
        .create_with("json edit", [&k.json_request, &k.document], named("edit"))
        .unwrap();
    registry
        .create_with("default", [&k.request, &k.page], Details::new())
        .unwrap();
    registry
}

#[test]
fn test_one_winner_per_name() {
    let registry = views();
    let found = registry.match_all(&[Arg::value(&Request), Arg::value(&Folder)]);

    let grouped: Vec<(&str, &str)> = found
        .iter()
        .map(|(name, element)| (name.as_str(), *element.value()))
        .collect();
    assert_eq!(grouped.len(), 3);
    assert!(grouped.contains(&("index", "folder index")));
    assert!(grouped.contains(&("edit", "edit")));
    assert!(grouped.contains(&(DEFAULT, "default")));
}

#[test]
fn test_specific_name_beats_wildcard_per_name() {
    let registry = views();
    let found = registry.match_all(&[Arg::value(&JsonRequest), Arg::value(&Document)]);
    assert_eq!(*found["edit"].value(), "json edit");
    assert_eq!(*found["index"].value(), "index");
}

#[test]
fn test_get_by_name() {
    let registry = views();
    let args = [Arg::value(&Request), Arg::value(&Folder)];

    assert_eq!(*registry.get(&args, "index").unwrap().value(), "folder index");
    assert_eq!(*registry.get_default(&args).unwrap().value(), "default");
    assert!(matches!(
        registry.get(&args, "delete"),
        Err(LookupError::NoMatch { .. })
    ));
}

#[test]
fn test_lookup_with_all_is_ambiguous_across_names() {
    let registry = views();
    let err = registry
        .lookup(&[Arg::value(&Request), Arg::value(&Page), Arg::ALL])
        .unwrap_err();
    match err {
        LookupError::AmbiguousMatch { candidates, .. } => assert_eq!(candidates.len(), 3),
        other => panic!("expected ambiguity, got {other}"),
    }
}

#[test]
fn test_specific_requires_exact_name() {
    let k = kinds();
    let mut registry = SpecificElementRegistry::new(k.hierarchy.clone());
    registry
        .create_with("view", [&k.page], Details::named("view"))
        .unwrap();
    registry
        .create_with("folder view", [&k.folder], Details::named("view"))
        .unwrap();
    registry
        .create_with("edit", [&k.page], Details::named("edit"))
        .unwrap();

    let winner = registry.get(&[Arg::value(&Folder)], "view").unwrap();
    assert_eq!(*winner.value(), "folder view");

    let winner = registry.get(&[Arg::value(&Folder)], "edit").unwrap();
    assert_eq!(*winner.value(), "edit");

    assert!(registry.get(&[Arg::value(&Folder)], "delete").is_err());
    assert!(
        registry
            .match_all(&[ALL.into(), Arg::value(&Folder)])
            .is_empty()
    );

    let views: Vec<&str> = registry
        .match_name("view", &[Arg::value(&Folder)])
        .into_iter()
        .map(|element| *element.value())
        .collect();
    assert_eq!(views, ["folder view", "view"]);
}
