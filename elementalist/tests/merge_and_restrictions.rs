//! Registry merge laws and registration-time restrictions.

use elementalist::{
    AnyRegistry, Arg, CollectionRegistry, Details, Handler, Hierarchy, MappingRegistry,
    NamedElementRegistry, Pattern, Registry, RegistryBuilder, RegistryError, Signature,
};

mod common;
use common::{Document, Folder, JsonRequest, Page, Request, kinds, values};

#[test]
fn test_merge_leaves_operands_untouched() {
    let k = kinds();
    let mut left = CollectionRegistry::new(k.hierarchy.clone());
    left.create("left", [&k.page]).unwrap();
    let mut right = CollectionRegistry::new(k.hierarchy.clone());
    right.create("right", [&k.folder]).unwrap();

    let mut merged = &left | &right;
    assert_eq!(merged.len(), 2);
    assert_eq!(left.len(), 1);
    assert_eq!(right.len(), 1);

    merged.create("later", [&k.document]).unwrap();
    assert_eq!(merged.len(), 3);
    assert_eq!(left.len(), 1);
    let found = merged.match_all(&[Arg::value(&Folder)]);
    assert_eq!(values(found), ["right", "left"]);
}

#[test]
fn test_merge_across_hierarchies_combines_type_tables() {
    let pages_only = Hierarchy::builder().declare::<Page>().build().unwrap();
    let page = pages_only.kind::<Page>().unwrap();
    let mut left = CollectionRegistry::new(pages_only.into());
    left.create("page", [&page]).unwrap();

    let with_folders = Hierarchy::builder()
        .declare::<Page>()
        .declare::<Folder>()
        .extends::<Folder, Page>()
        .build()
        .unwrap();
    let folder = with_folders.kind::<Folder>().unwrap();
    let mut right = CollectionRegistry::new(with_folders.into());
    right.create("folder", [&folder]).unwrap();

    assert!(left.match_all(&[Arg::value(&Folder)]).is_empty());

    let merged = &left | &right;
    assert!(merged.base().hierarchy().contains::<Folder>());
    let found = merged.match_all(&[Arg::value(&Folder)]);
    assert_eq!(values(found), ["folder", "page"]);
    let found = merged.match_all(&[Arg::value(&Page)]);
    assert_eq!(values(found), ["page"]);
}

#[test]
fn test_mapping_merge_right_operand_wins() {
    let k = kinds();
    let mut left = MappingRegistry::new(k.hierarchy.clone());
    left.create("left page", [&k.page]).unwrap();
    left.create("left folder", [&k.folder]).unwrap();
    let mut right = MappingRegistry::new(k.hierarchy.clone());
    right.create("right page", [&k.page]).unwrap();

    let merged = &left | &right;
    assert_eq!(merged.len(), 2);
    let winner = merged.lookup(&[Arg::value(&Document)]).unwrap();
    assert_eq!(*winner.value(), "right page");
    let winner = merged.lookup(&[Arg::value(&Folder)]).unwrap();
    assert_eq!(*winner.value(), "left folder");

    let reversed = &right | &left;
    let winner = reversed.lookup(&[Arg::value(&Document)]).unwrap();
    assert_eq!(*winner.value(), "left page");
}

#[test]
fn test_merge_is_associative_on_contents() {
    let k = kinds();
    let mut a = MappingRegistry::new(k.hierarchy.clone());
    a.create("a", [&k.page]).unwrap();
    let mut b = MappingRegistry::new(k.hierarchy.clone());
    b.create("b", [&k.page]).unwrap();
    b.create("b folder", [&k.folder]).unwrap();
    let mut c = MappingRegistry::new(k.hierarchy.clone());
    c.create("c", [&k.document]).unwrap();

    let left_first = &(&a | &b) | &c;
    let right_first = &a | &(&b | &c);
    assert_eq!(values(left_first.elements()), values(right_first.elements()));
}

#[test]
fn test_merge_across_variants_is_rejected() {
    let k = kinds();
    let collection: AnyRegistry<&str> = CollectionRegistry::new(k.hierarchy.clone()).into();
    let named: AnyRegistry<&str> = NamedElementRegistry::new(k.hierarchy.clone()).into();

    assert!(matches!(
        collection.try_merge(&named),
        Err(RegistryError::IncompatibleMerge { .. })
    ));
    assert!(collection.try_merge(&collection).is_ok());
}

#[test]
fn test_restriction_violation_leaves_registry_unchanged() {
    let k = kinds();
    let mut registry = RegistryBuilder::new(k.hierarchy.clone())
        .restrict([&k.request, &k.page])
        .mapping::<&str>();

    registry.create("ok", [&k.json_request, &k.folder]).unwrap();
    registry.create("also ok", [&k.request, &k.page]).unwrap();

    let err = registry.create("bad", [&k.page, &k.request]).unwrap_err();
    assert_eq!(
        err,
        RegistryError::RestrictionViolation {
            signature: Signature::new([&k.page, &k.request]),
        }
    );
    let err = registry.create("wrong arity", [&k.request]).unwrap_err();
    assert!(matches!(err, RegistryError::RestrictionViolation { .. }));

    assert_eq!(registry.len(), 2);
    assert!(
        registry
            .match_all(&[Arg::value(&Request), Arg::value(&Folder)])
            .iter()
            .all(|element| *element.value() != "bad")
    );
}

#[test]
fn test_restrictions_accept_any_member() {
    let k = kinds();
    let mut registry = RegistryBuilder::new(k.hierarchy.clone())
        .restrict([&k.request])
        .restrict([Pattern::from(&k.request), Pattern::Any])
        .collection::<&str>();

    registry.create("one", [&k.json_request]).unwrap();
    registry.create("two", [&k.request, &k.document]).unwrap();
    assert!(registry.create("three", [&k.page]).is_err());
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.restrictions().len(), 2);
}

#[test]
fn test_register_returns_handler_unchanged() {
    let k = kinds();
    let mut registry = MappingRegistry::<Handler<usize>>::new(k.hierarchy.clone());
    let handler = registry
        .register([&k.json_request], Details::named("json"), |args: &[Arg<'_>]| {
            args.len() * 10
        })
        .unwrap();

    assert_eq!(handler(&[]), 0);
    let element = registry.lookup(&[Arg::value(&JsonRequest)]).unwrap();
    assert_eq!(element.name(), "json");
    assert_eq!(element.call(&[Arg::value(&JsonRequest)]).unwrap(), Some(10));
}
