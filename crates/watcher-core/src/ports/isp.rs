use async_trait::async_trait;

/// Secondary IP-to-ISP lookup service.
#[async_trait]
pub trait IspResolver: Send + Sync {
    /// Resolve the ISP name for an address. `Ok(None)` means the service
    /// answered but had no ISP for it.
    async fn resolve_isp(&self, ip_address: &str) -> Result<Option<String>, IspError>;
}

/// ISP lookup errors.
#[derive(Debug, thiserror::Error)]
pub enum IspError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Lookup rejected: {0}")]
    Rejected(String),
}
