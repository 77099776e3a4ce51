//! Property-based tests for password hashing and session tokens
//!
//! Uses proptest to generate random inputs and verify properties

#![cfg(feature = "ssr")]

use std::time::Duration;

use proptest::prelude::*;
use scoreboard::backend::auth::password::PasswordHasher;
use scoreboard::backend::auth::sessions::TokenIssuer;
use scoreboard::shared::{CredentialsRequest, MAX_PASSWORD_BYTES};

// bcrypt is slow even at cost 4; keep the case count low
proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_long_shared_prefix_does_not_verify(suffix in "[ -~]{1,40}") {
        let hasher = PasswordHasher::new(4);
        let password = "p".repeat(MAX_PASSWORD_BYTES);
        let hash = hasher.hash(&password).unwrap();

        let candidate = format!("{password}{suffix}");
        prop_assert!(!hasher.verify(&candidate, &hash));
    }

    #[test]
    fn test_hash_verifies_only_its_password(
        password in "[ -~]{1,40}",
        other in "[ -~]{1,40}",
    ) {
        let hasher = PasswordHasher::new(4);
        let hash = hasher.hash(&password).unwrap();

        prop_assert_ne!(&hash, &password);
        prop_assert!(hasher.verify(&password, &hash));
        if other != password {
            prop_assert!(!hasher.verify(&other, &hash));
        }
    }
}

proptest! {
    #[test]
    fn test_token_claims_roundtrip(
        user_id in "[a-f0-9-]{1,36}",
        email in "[a-z]{1,10}@[a-z]{1,10}\\.com",
    ) {
        let issuer = TokenIssuer::new(b"proptest-secret", Duration::from_secs(60 * 60));
        let token = issuer.issue(&user_id, &email).unwrap();
        let claims = issuer.verify(&token).unwrap();

        prop_assert_eq!(claims.user_id, user_id);
        prop_assert_eq!(claims.user_email, email);
        prop_assert_eq!(claims.exp - claims.iat, 60 * 60);
    }

    #[test]
    fn test_over_long_password_is_rejected(password in "[ -~]{72,200}") {
        let request = CredentialsRequest::new("a@x.com", password);
        prop_assert!(request.validate().is_err());
    }

    #[test]
    fn test_email_without_at_is_rejected(email in "[a-z0-9.]{0,30}") {
        let request = CredentialsRequest::new(email, "pw1");
        prop_assert!(request.validate().is_err());
    }
}
