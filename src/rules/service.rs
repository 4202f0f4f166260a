//! Channel-backed rule-service transport.

use crossbeam_channel::{unbounded, Receiver, Sender};

use super::{RuleError, RuleService};

/// [`RuleService`] implementation over a pair of unbounded channels.
///
/// The far end of the pair is a [`RuleServiceHarness`]: in production a
/// bridge task forwards queries to the real logic service and feeds the
/// answers back; in tests the harness is scripted directly. Either way the
/// game side never blocks.
#[derive(Debug)]
pub struct ChannelRuleService {
    queries: Sender<String>,
    responses: Receiver<String>,
}

impl ChannelRuleService {
    /// Create a connected service/harness pair.
    #[must_use]
    pub fn pair() -> (ChannelRuleService, RuleServiceHarness) {
        let (query_tx, query_rx) = unbounded();
        let (response_tx, response_rx) = unbounded();

        (
            ChannelRuleService {
                queries: query_tx,
                responses: response_rx,
            },
            RuleServiceHarness {
                queries: query_rx,
                responses: response_tx,
            },
        )
    }
}

impl RuleService for ChannelRuleService {
    fn send(&mut self, query: &str) -> Result<(), RuleError> {
        self.queries
            .send(query.to_owned())
            .map_err(|_| RuleError::ChannelClosed)
    }

    fn poll(&mut self) -> Option<String> {
        self.responses.try_recv().ok()
    }
}

/// The service-side half of a [`ChannelRuleService::pair`].
#[derive(Debug)]
pub struct RuleServiceHarness {
    queries: Receiver<String>,
    responses: Sender<String>,
}

impl RuleServiceHarness {
    /// Take the next outstanding query, if one has been sent.
    #[must_use]
    pub fn next_query(&self) -> Option<String> {
        self.queries.try_recv().ok()
    }

    /// Deliver a response payload. Returns `false` if the game side has
    /// been dropped.
    pub fn respond(&self, payload: impl Into<String>) -> bool {
        self.responses.send(payload.into()).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_reaches_harness() {
        let (mut service, harness) = ChannelRuleService::pair();

        assert!(harness.next_query().is_none());
        service.send("player_move(...)").unwrap();
        assert_eq!(harness.next_query().as_deref(), Some("player_move(...)"));
        assert!(harness.next_query().is_none());
    }

    #[test]
    fn test_response_reaches_service() {
        let (mut service, harness) = ChannelRuleService::pair();

        assert!(service.poll().is_none());
        assert!(harness.respond("ok"));
        assert_eq!(service.poll().as_deref(), Some("ok"));
        assert!(service.poll().is_none());
    }

    #[test]
    fn test_send_after_harness_dropped() {
        let (mut service, harness) = ChannelRuleService::pair();
        drop(harness);

        assert_eq!(service.send("query"), Err(RuleError::ChannelClosed));
    }

    #[test]
    fn test_respond_after_service_dropped() {
        let (service, harness) = ChannelRuleService::pair();
        drop(service);

        assert!(!harness.respond("ok"));
    }
}
