/// A named content-scoring capability.
///
/// Implementations are expected to be deterministic from the system's point
/// of view: lookup tables, rule engines, or model calls behind one contract.
/// Non-finite evaluations are treated as invalid by the panel and skipped.
pub trait IScoringAgent: Send + Sync {
    fn name(&self) -> &str;

    /// Score a piece of content. No bounds are imposed here; the panel
    /// averages whatever the agents return.
    fn evaluate(&self, content: &str) -> f64;
}

/// Adapter wrapping a name and a closure as a scoring agent.
pub struct FnAgent {
    name: String,
    f: Box<dyn Fn(&str) -> f64 + Send + Sync>,
}

impl FnAgent {
    pub fn new(name: impl Into<String>, f: impl Fn(&str) -> f64 + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            f: Box::new(f),
        }
    }
}

impl IScoringAgent for FnAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, content: &str) -> f64 {
        (self.f)(content)
    }
}
