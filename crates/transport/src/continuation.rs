//! Success/error continuation pair handed to a transport
//!
//! A `Continuations` value is consumed when completed, so at most one of the
//! two channels can ever fire, and only once. Callers that prefer awaiting
//! over callbacks use `Continuations::channel()` and await the receiver.

use std::fmt;

use serde_json::Value;
use tokio::sync::oneshot;

use crate::error::{Result, TransportError};

type SuccessFn = Box<dyn FnOnce(Value) + Send + 'static>;
type ErrorFn = Box<dyn FnOnce(TransportError) + Send + 'static>;

enum Inner {
    Callbacks {
        on_success: SuccessFn,
        on_error: ErrorFn,
    },
    Channel(oneshot::Sender<Result<Value>>),
}

/// The caller's two completion channels for a single request.
pub struct Continuations {
    inner: Inner,
}

impl Continuations {
    /// Build a continuation pair from two callables.
    pub fn new<S, E>(on_success: S, on_error: E) -> Self
    where
        S: FnOnce(Value) + Send + 'static,
        E: FnOnce(TransportError) + Send + 'static,
    {
        Self {
            inner: Inner::Callbacks {
                on_success: Box::new(on_success),
                on_error: Box::new(on_error),
            },
        }
    }

    /// Build a continuation pair whose outcome is delivered on a oneshot channel.
    ///
    /// If the transport drops the continuations without completing them the
    /// receiver resolves to `RecvError`.
    pub fn channel() -> (Self, oneshot::Receiver<Result<Value>>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                inner: Inner::Channel(tx),
            },
            rx,
        )
    }

    /// Fire the success channel.
    pub fn succeed(self, value: Value) {
        match self.inner {
            Inner::Callbacks { on_success, .. } => on_success(value),
            Inner::Channel(tx) => {
                // Receiver gone means the caller stopped waiting
                let _ = tx.send(Ok(value));
            }
        }
    }

    /// Fire the error channel.
    pub fn fail(self, error: TransportError) {
        match self.inner {
            Inner::Callbacks { on_error, .. } => on_error(error),
            Inner::Channel(tx) => {
                let _ = tx.send(Err(error));
            }
        }
    }

    /// Route an outcome to the matching channel.
    pub fn complete(self, outcome: Result<Value>) {
        match outcome {
            Ok(value) => self.succeed(value),
            Err(error) => self.fail(error),
        }
    }
}

impl fmt::Debug for Continuations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.inner {
            Inner::Callbacks { .. } => "callbacks",
            Inner::Channel(_) => "channel",
        };
        f.debug_struct("Continuations").field("kind", &kind).finish()
    }
}
