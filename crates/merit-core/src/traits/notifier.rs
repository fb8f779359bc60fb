/// Fire-and-forget fan-out of interaction events.
///
/// Publishing happens after ledger state is settled and must never block or
/// fail the mint path — implementations swallow subscriber failures.
pub trait INotifier: Send + Sync {
    fn publish(&self, event_type: &str, payload: &serde_json::Value);
}

/// Null-object notifier for deployments without a transport.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl INotifier for NoopNotifier {
    fn publish(&self, _event_type: &str, _payload: &serde_json::Value) {}
}
