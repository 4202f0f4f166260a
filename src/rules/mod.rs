//! Rule-evaluation service client.
//!
//! Move legality and colour scoring live in an external logic-evaluation
//! service, treated as an opaque oracle: the crate ships it a textual term
//! and decodes the verdict that comes back. Three pieces:
//!
//! - [`RuleService`]: the transport seam. The shipped implementation is
//!   [`ChannelRuleService`], a non-blocking channel pair whose far end is
//!   driven by a bridge process in production and by a test harness here.
//! - [`protocol`]: query encoding and response parsing.
//! - [`RuleClient`]: single-shot request bookkeeping, response decoding and
//!   the timeout policy.
//!
//! Issuing a request never blocks the tick loop; the orchestrator drains
//! [`RuleClient::poll`] once per tick, which is where responses (or the
//! lack of them) re-enter the game.

pub mod protocol;

mod client;
mod service;

pub use client::{ResponseKind, RuleClient, RuleEvent};
pub use service::{ChannelRuleService, RuleServiceHarness};

use thiserror::Error;

/// Errors from the rule-service boundary.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The transport's far end went away.
    #[error("rule service channel closed")]
    ChannelClosed,

    /// A second request was issued while one was still in flight.
    #[error("a rule request is already in flight")]
    RequestPending,

    /// The service answered with a payload neither parser recognizes.
    #[error("malformed rule service response: {payload}")]
    Malformed {
        /// The raw payload, kept for diagnostics.
        payload: String,
    },
}

/// Transport seam to the external rule service.
///
/// `send` must not block; responses surface later through `poll`, one
/// payload per call, in arrival order.
pub trait RuleService {
    /// Ship one encoded query to the service.
    fn send(&mut self, query: &str) -> Result<(), RuleError>;

    /// Non-blocking check for a response payload.
    fn poll(&mut self) -> Option<String>;
}
