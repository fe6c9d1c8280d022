//! Invocable payloads.
//!
//! An element's payload is invoked through [`Invoke`]. [`Handler`] wraps a
//! closure over the call arguments; plain data payloads implement `Invoke`
//! as non-callable so that invoking them is reported instead of silently
//! ignored.

use crate::{arg::Arg, error::InvokeError};
use std::{convert::Infallible, fmt, sync::Arc};

/// A payload that may be invoked with the call arguments.
pub trait Invoke: Send + Sync {
    /// What a successful invocation returns.
    type Output;

    /// Whether the payload can be invoked at all.
    fn is_callable(&self) -> bool {
        true
    }

    /// Invoke the payload.
    fn invoke(&self, args: &[Arg<'_>]) -> Result<Self::Output, InvokeError>;
}

/// A shared closure over the call arguments.
pub struct Handler<R> {
    func: Arc<dyn Fn(&[Arg<'_>]) -> R + Send + Sync>,
}

impl<R: 'static> Handler<R> {
    /// Wrap a closure.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&[Arg<'_>]) -> R + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }
}

impl<R> Clone for Handler<R> {
    fn clone(&self) -> Self {
        Self {
            func: Arc::clone(&self.func),
        }
    }
}

impl<R> fmt::Debug for Handler<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

impl<R, F> From<F> for Handler<R>
where
    R: 'static,
    F: Fn(&[Arg<'_>]) -> R + Send + Sync + 'static,
{
    fn from(func: F) -> Self {
        Handler::new(func)
    }
}

impl<R> Invoke for Handler<R> {
    type Output = R;

    fn invoke(&self, args: &[Arg<'_>]) -> Result<R, InvokeError> {
        Ok((self.func)(args))
    }
}

/// Implement `Invoke` for plain data payloads, which are never callable.
macro_rules! impl_inert_payload {
    ($($T:ty),+ $(,)?) => {
        $(
            impl Invoke for $T {
                type Output = Infallible;

                fn is_callable(&self) -> bool {
                    false
                }

                fn invoke(&self, _args: &[Arg<'_>]) -> Result<Infallible, InvokeError> {
                    Err(InvokeError::NotCallable(format!("{self:?}")))
                }
            }
        )+
    };
}

impl_inert_payload!(
    &'static str,
    String,
    i64,
    u64,
    bool,
    (),
    serde_json::Value
);
