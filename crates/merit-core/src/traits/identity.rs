/// Verifies an identity token, returning the user id it belongs to.
pub trait IIdentityVerifier: Send + Sync {
    /// `None` means the token could not be verified.
    fn verify(&self, id_token: &str) -> Option<String>;
}

/// Null-object verifier: every token fails verification.
///
/// Selected at startup when no identity backend is configured, instead of
/// silent runtime feature-detection.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopIdentityVerifier;

impl IIdentityVerifier for NoopIdentityVerifier {
    fn verify(&self, _id_token: &str) -> Option<String> {
        None
    }
}
