//! Request/response bookkeeping over a [`RuleService`].

use crate::core::DominationState;

use super::{protocol, RuleError, RuleService};

/// Which response shape a pending request expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseKind {
    /// A colour-domination tuple (placement verdict).
    Domination,
    /// An acknowledgement atom (undo synchronization).
    Ack,
}

/// A decoded occurrence at the rule-service boundary, surfaced to the
/// orchestrator once per tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleEvent {
    /// The service accepted a placement and reported new domination flags.
    Verdict(DominationState),

    /// The service acknowledged an undo synchronization.
    Ack,

    /// The pending request went unanswered past its deadline.
    TimedOut,

    /// The service answered, but the payload did not decode.
    Fault(RuleError),
}

#[derive(Debug)]
struct PendingRequest {
    expecting: ResponseKind,
    deadline: f64,
}

/// Single-shot client for the external rule service.
///
/// Holds at most one pending request; the orchestrator's state machine
/// guarantees it never issues a second one while the first is in flight,
/// and [`RuleClient::request`] surfaces a violation as
/// [`RuleError::RequestPending`] rather than silently replacing it.
///
/// Time is game time in seconds, as passed by the orchestrator; an
/// unanswered request past `timeout` seconds produces
/// [`RuleEvent::TimedOut`] instead of stalling the game forever.
pub struct RuleClient {
    service: Box<dyn RuleService>,
    timeout: f64,
    pending: Option<PendingRequest>,
}

impl RuleClient {
    /// Wrap a transport with the given timeout in seconds.
    #[must_use]
    pub fn new(service: Box<dyn RuleService>, timeout: f64) -> Self {
        Self {
            service,
            timeout,
            pending: None,
        }
    }

    /// Whether a request is awaiting its response.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Issue one query and register what shape its response must take.
    ///
    /// `now` is the current game time; the request's deadline is measured
    /// from it.
    pub fn request(
        &mut self,
        query: &str,
        expecting: ResponseKind,
        now: f64,
    ) -> Result<(), RuleError> {
        if self.pending.is_some() {
            return Err(RuleError::RequestPending);
        }
        self.service.send(query)?;
        tracing::debug!("Rule query issued: {}", query);
        self.pending = Some(PendingRequest {
            expecting,
            deadline: now + self.timeout,
        });
        Ok(())
    }

    /// Drain the transport and the timeout clock. Called once per tick.
    ///
    /// Returns at most one event; `None` while the request is still in
    /// flight (or nothing is pending).
    pub fn poll(&mut self, now: f64) -> Option<RuleEvent> {
        if let Some(payload) = self.service.poll() {
            let Some(pending) = self.pending.take() else {
                tracing::warn!("Dropping unsolicited rule service response: {}", payload);
                return None;
            };

            let event = match pending.expecting {
                ResponseKind::Domination => match protocol::parse_domination(&payload) {
                    Ok(state) => RuleEvent::Verdict(state),
                    Err(error) => RuleEvent::Fault(error),
                },
                ResponseKind::Ack => match protocol::parse_ack(&payload) {
                    Ok(()) => RuleEvent::Ack,
                    Err(error) => RuleEvent::Fault(error),
                },
            };
            return Some(event);
        }

        if let Some(pending) = &self.pending {
            if now >= pending.deadline {
                tracing::error!("Rule request unanswered after {} seconds", self.timeout);
                self.pending = None;
                return Some(RuleEvent::TimedOut);
            }
        }

        None
    }
}
