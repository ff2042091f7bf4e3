//! Stub reward issuer.
//!
//! Mints record ids locally and writes an audit event per request; nothing
//! is persisted or sent anywhere.

use async_trait::async_trait;
use culturelab_domain::{CertificateRecord, RewardId, TokenRecord, UserId};

use crate::infrastructure::ports::{RewardError, RewardPort};

#[derive(Debug, Default, Clone, Copy)]
pub struct StubRewardIssuer;

impl StubRewardIssuer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RewardPort for StubRewardIssuer {
    async fn issue_tokens(
        &self,
        user_id: &UserId,
        amount: u32,
        reason: &str,
    ) -> Result<TokenRecord, RewardError> {
        if amount == 0 {
            return Err(RewardError::Rejected("token amount must be positive".into()));
        }
        let record = TokenRecord {
            id: RewardId::new(),
            amount,
        };
        tracing::info!(
            target: "audit",
            user_id = %user_id,
            amount,
            reason,
            reward_id = %record.id,
            "TOKEN_ISSUE_REQUEST"
        );
        Ok(record)
    }

    async fn grant_certificate(
        &self,
        user_id: &UserId,
        certificate_type: &str,
    ) -> Result<CertificateRecord, RewardError> {
        let record = CertificateRecord {
            id: RewardId::new(),
            certificate_type: certificate_type.to_string(),
        };
        tracing::info!(
            target: "audit",
            user_id = %user_id,
            certificate_type,
            reward_id = %record.id,
            "CERTIFICATE_GRANT_REQUEST"
        );
        Ok(record)
    }
}
