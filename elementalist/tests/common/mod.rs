#![allow(dead_code)]

use elementalist::{Arg, Element, Handler, Hierarchy, Kind};
use std::sync::{Arc, Mutex};

// ============================================================================
// Test Domain Types
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct Request;

#[derive(Clone, Debug, Default)]
pub struct JsonRequest;

#[derive(Clone, Debug, Default)]
pub struct Page;

#[derive(Clone, Debug, Default)]
pub struct Folder;

/// Mixin-style marker shared by several content types.
#[derive(Clone, Debug, Default)]
pub struct Publishable;

/// Extends both `Page` and `Publishable`.
#[derive(Clone, Debug, Default)]
pub struct Document;

/// Never declared in the hierarchy.
#[derive(Clone, Debug, Default)]
pub struct Stranger;

// ============================================================================
// Hierarchy
// ============================================================================

pub struct Kinds {
    pub hierarchy: Arc<Hierarchy>,
    pub request: Kind,
    pub json_request: Kind,
    pub page: Kind,
    pub folder: Kind,
    pub publishable: Kind,
    pub document: Kind,
}

pub fn kinds() -> Kinds {
    let hierarchy = Hierarchy::builder()
        .declare::<Request>()
        .declare::<JsonRequest>()
        .declare::<Page>()
        .declare::<Folder>()
        .declare::<Publishable>()
        .declare::<Document>()
        .extends::<JsonRequest, Request>()
        .extends::<Folder, Page>()
        .extends::<Document, Page>()
        .extends::<Document, Publishable>()
        .build()
        .unwrap();
    Kinds {
        request: hierarchy.kind::<Request>().unwrap(),
        json_request: hierarchy.kind::<JsonRequest>().unwrap(),
        page: hierarchy.kind::<Page>().unwrap(),
        folder: hierarchy.kind::<Folder>().unwrap(),
        publishable: hierarchy.kind::<Publishable>().unwrap(),
        document: hierarchy.kind::<Document>().unwrap(),
        hierarchy: Arc::new(hierarchy),
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Payload values of the given elements, in order.
pub fn values<'a, I>(found: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = &'a Arc<Element<&'static str>>>,
{
    found.into_iter().map(|element| *element.value()).collect()
}

/// A handler that appends `label` to `log` on every invocation.
pub fn logging_handler(label: &'static str, log: &Arc<Mutex<Vec<&'static str>>>) -> Handler<&'static str> {
    let log = Arc::clone(log);
    Handler::new(move |_: &[Arg<'_>]| {
        log.lock().unwrap().push(label);
        label
    })
}
