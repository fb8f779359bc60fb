pub mod agent;
pub mod identity;
pub mod notifier;

pub use agent::{FnAgent, IScoringAgent};
pub use identity::{IIdentityVerifier, NoopIdentityVerifier};
pub use notifier::{INotifier, NoopNotifier};
