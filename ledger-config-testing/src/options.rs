/// Canned behaviours of a [`crate::MockConfig`], fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MockConfigOptions {
    /// Client TLS is enabled
    pub tls_enabled: bool,
    /// The client record carries a mutual TLS key pair
    pub mutual_tls_enabled: bool,
    /// Error-sensitive queries fail instead of answering
    pub error_case: bool,
}

impl MockConfigOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tls_enabled(mut self, enabled: bool) -> Self {
        self.tls_enabled = enabled;
        self
    }

    pub fn with_mutual_tls_enabled(mut self, enabled: bool) -> Self {
        self.mutual_tls_enabled = enabled;
        self
    }

    pub fn with_error_case(mut self, error_case: bool) -> Self {
        self.error_case = error_case;
        self
    }
}
