//! Standard guards.
//!
//! - [`Traced`]: logs each verdict of the wrapped guard
//! - [`Not`]: inverts a guard
//! - [`Arity`]: requires a fixed number of call arguments

use elementalist_core::{Arg, Element, Guard};
use std::borrow::Cow;

/// Logs each verdict of the wrapped guard.
///
/// Without the `tracing` feature this is a transparent wrapper.
pub struct Traced<G> {
    inner: G,
}

impl<G> Traced<G> {
    /// Wrap a guard.
    pub fn new(inner: G) -> Self {
        Self { inner }
    }

    /// The wrapped guard.
    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<V, G: Guard<V>> Guard<V> for Traced<G> {
    fn describe(&self) -> Cow<'_, str> {
        self.inner.describe()
    }

    fn check(&self, element: &Element<V>, args: &[Arg<'_>]) -> bool {
        let passed = self.inner.check(element, args);
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                guard = %self.inner.describe(),
                element = %element,
                passed,
                "Guard evaluated"
            );
        }
        passed
    }
}

/// Passes when the wrapped guard fails.
pub struct Not<G> {
    inner: G,
}

impl<G> Not<G> {
    /// Invert a guard.
    pub fn new(inner: G) -> Self {
        Self { inner }
    }
}

impl<V, G: Guard<V>> Guard<V> for Not<G> {
    fn describe(&self) -> Cow<'_, str> {
        Cow::Owned(format!("not {}", self.inner.describe()))
    }

    fn check(&self, element: &Element<V>, args: &[Arg<'_>]) -> bool {
        !self.inner.check(element, args)
    }
}

/// Requires exactly `n` call arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity(pub usize);

impl<V> Guard<V> for Arity {
    fn describe(&self) -> Cow<'_, str> {
        Cow::Owned(format!("arity {}", self.0))
    }

    fn check(&self, _element: &Element<V>, args: &[Arg<'_>]) -> bool {
        args.len() == self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Context, RecordingGuard};
    use elementalist_core::{Details, Handler, InvokeError, Signature};

    fn element_with(details: Details<&'static str>) -> Element<&'static str> {
        Element::new("payload", Signature::default(), details.name("guarded"))
    }

    fn count_args() -> Handler<usize> {
        Handler::from(|args: &[Arg<'_>]| args.len())
    }

    #[test]
    fn test_traced_forwards_verdict() {
        let recorder = RecordingGuard::accepting("always");
        let guard = Traced::new(recorder.clone());
        let element = element_with(Details::new());

        assert!(Guard::<&str>::check(&guard, &element, &[]));
        assert_eq!(Guard::<&str>::describe(&guard), "always");
        assert_eq!(recorder.count(), 1);
    }

    #[test]
    fn test_not_inverts() {
        let element = element_with(Details::new().condition(Not::new(Arity(1))));
        assert_eq!(element.evaluate(&[]), Vec::<String>::new());
        assert_eq!(element.evaluate(&[Arg::value(&Context)]), ["not arity 1"]);
    }

    #[test]
    fn test_arity_rejects_secure_call() {
        let element = Element::new(
            count_args(),
            Signature::default(),
            Details::new().condition(Arity(2)),
        );
        assert_eq!(element.call(&[Arg::value(&Context)]).unwrap(), None);
        assert_eq!(
            element.call(&[Arg::value(&Context), Arg::value(&Context)]).unwrap(),
            Some(2)
        );
        let err = element.call_secure(&[Arg::value(&Context)]).unwrap_err();
        assert_eq!(
            err,
            InvokeError::GuardRejected {
                failed: vec!["arity 2".to_string()]
            }
        );
    }
}
