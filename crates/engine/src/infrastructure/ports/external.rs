//! External service ports.

use async_trait::async_trait;
use culturelab_domain::{CertificateRecord, TokenRecord, UserId};

use super::error::RewardError;

// =============================================================================
// Rewards
// =============================================================================

/// Mints token and certificate records for a user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RewardPort: Send + Sync {
    async fn issue_tokens(
        &self,
        user_id: &UserId,
        amount: u32,
        reason: &str,
    ) -> Result<TokenRecord, RewardError>;

    async fn grant_certificate(
        &self,
        user_id: &UserId,
        certificate_type: &str,
    ) -> Result<CertificateRecord, RewardError>;
}
