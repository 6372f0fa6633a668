//! In-process one-time-password store.
//!
//! Codes are six digits, hashed with SHA-256 before storage, and expire
//! after a configurable TTL or a bounded number of failed attempts.
//! Delivery (SMS/email gateways) is out of scope; callers log the send.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use dashmap::DashMap;
use rand::Rng;
use sha2::{Digest, Sha256};
use std::time::Duration;
use thiserror::Error;

/// What the code authorizes, kept separate so a login code cannot
/// complete onboarding and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OtpPurpose {
    Login,
    Onboarding,
}

#[derive(Debug, Error)]
pub enum OtpError {
    #[error("No verification code was requested")]
    NotRequested,

    #[error("Verification code has expired")]
    Expired,

    #[error("Invalid verification code")]
    Invalid,

    #[error("Too many failed attempts")]
    TooManyAttempts,
}

#[derive(Debug)]
struct OtpEntry {
    digest: [u8; 32],
    expires_at: DateTime<Utc>,
    attempts: u32,
}

/// Concurrent OTP store keyed by (purpose, destination)
#[derive(Debug)]
pub struct OtpStore {
    entries: DashMap<(OtpPurpose, String), OtpEntry>,
    ttl: Duration,
    max_attempts: u32,
}

impl OtpStore {
    pub fn new(ttl: Duration, max_attempts: u32) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            max_attempts,
        }
    }

    /// Issue a fresh code for a destination, replacing any previous one
    pub fn issue(&self, purpose: OtpPurpose, destination: &str) -> String {
        let code = format!("{:06}", rand::thread_rng().gen_range(0..1_000_000u32));
        let expires_at = Utc::now()
            + ChronoDuration::from_std(self.ttl).unwrap_or_else(|_| ChronoDuration::seconds(300));

        self.entries.insert(
            (purpose, destination.to_string()),
            OtpEntry {
                digest: digest_code(&code),
                expires_at,
                attempts: 0,
            },
        );
        self.prune_expired();

        code
    }

    /// Verify a code. The entry is consumed on success, on expiry, and when
    /// the attempt limit is reached.
    pub fn verify(&self, purpose: OtpPurpose, destination: &str, code: &str) -> Result<(), OtpError> {
        let key = (purpose, destination.to_string());

        let mut entry = self.entries.get_mut(&key).ok_or(OtpError::NotRequested)?;

        if entry.expires_at < Utc::now() {
            drop(entry);
            self.entries.remove(&key);
            return Err(OtpError::Expired);
        }

        if digests_match(&entry.digest, &digest_code(code)) {
            drop(entry);
            self.entries.remove(&key);
            return Ok(());
        }

        entry.attempts += 1;
        if entry.attempts >= self.max_attempts {
            drop(entry);
            self.entries.remove(&key);
            return Err(OtpError::TooManyAttempts);
        }

        Err(OtpError::Invalid)
    }

    fn prune_expired(&self) {
        let now = Utc::now();
        self.entries.retain(|_, entry| entry.expires_at > now);
    }
}

fn digest_code(code: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    hasher.finalize().into()
}

// Compare without short-circuiting on the first mismatch
fn digests_match(a: &[u8; 32], b: &[u8; 32]) -> bool {
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> OtpStore {
        OtpStore::new(Duration::from_secs(300), 3)
    }

    #[test]
    fn issued_code_verifies_once() {
        let store = store();
        let code = store.issue(OtpPurpose::Login, "+15550001111");
        assert_eq!(code.len(), 6);

        assert!(store.verify(OtpPurpose::Login, "+15550001111", &code).is_ok());
        // Consumed on success
        assert!(matches!(
            store.verify(OtpPurpose::Login, "+15550001111", &code),
            Err(OtpError::NotRequested)
        ));
    }

    #[test]
    fn purposes_are_isolated() {
        let store = store();
        let code = store.issue(OtpPurpose::Login, "+15550001111");
        assert!(matches!(
            store.verify(OtpPurpose::Onboarding, "+15550001111", &code),
            Err(OtpError::NotRequested)
        ));
    }

    #[test]
    fn wrong_code_counts_attempts() {
        let store = store();
        let code = store.issue(OtpPurpose::Login, "+15550001111");

        assert!(matches!(
            store.verify(OtpPurpose::Login, "+15550001111", "000000").unwrap_err(),
            OtpError::Invalid
        ));
        assert!(matches!(
            store.verify(OtpPurpose::Login, "+15550001111", "111111").unwrap_err(),
            OtpError::Invalid
        ));
        // Third failure hits the limit and consumes the entry
        assert!(matches!(
            store.verify(OtpPurpose::Login, "+15550001111", "222222").unwrap_err(),
            OtpError::TooManyAttempts
        ));
        assert!(matches!(
            store.verify(OtpPurpose::Login, "+15550001111", &code).unwrap_err(),
            OtpError::NotRequested
        ));
    }

    #[test]
    fn expired_code_is_rejected() {
        let store = OtpStore::new(Duration::from_secs(0), 3);
        let code = store.issue(OtpPurpose::Login, "+15550001111");
        std::thread::sleep(Duration::from_millis(5));
        assert!(matches!(
            store.verify(OtpPurpose::Login, "+15550001111", &code),
            Err(OtpError::Expired) | Err(OtpError::NotRequested)
        ));
    }

    #[test]
    fn reissue_replaces_previous_code() {
        let store = store();
        let first = store.issue(OtpPurpose::Login, "+15550001111");
        let second = store.issue(OtpPurpose::Login, "+15550001111");

        if first != second {
            assert!(matches!(
                store.verify(OtpPurpose::Login, "+15550001111", &first).unwrap_err(),
                OtpError::Invalid
            ));
        }
        assert!(store.verify(OtpPurpose::Login, "+15550001111", &second).is_ok());
    }
}
