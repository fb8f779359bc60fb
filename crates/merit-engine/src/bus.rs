use merit_core::traits::INotifier;
use tracing::warn;

/// A subscriber callback: event type plus JSON payload.
pub type Subscriber = Box<dyn Fn(&str, &serde_json::Value) -> anyhow::Result<()> + Send + Sync>;

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

/// Basic in-memory event dispatcher.
///
/// Publishing is fire-and-forget: a failing subscriber is logged and
/// skipped, and subsequent subscribers still run. The mint path settles
/// before anything is published, so no subscriber can affect ledger state.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        callback: impl Fn(&str, &serde_json::Value) -> anyhow::Result<()> + Send + Sync + 'static,
    ) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl INotifier for EventBus {
    fn publish(&self, event_type: &str, payload: &serde_json::Value) {
        for (id, sub) in &self.subscribers {
            if let Err(err) = sub(event_type, payload) {
                warn!(subscriber = id.0, event_type, error = %err, "subscriber failed");
            }
        }
    }
}
