/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Idempotency tokens fill bindings marked with [`FieldBinding::idempotency_token`] when the
//! caller left them unset. Requests containing such a binding are not deterministic unless a
//! fixed provider is used.
//!
//! [`FieldBinding::idempotency_token`]: crate::descriptor::FieldBinding::idempotency_token

use std::fmt;
use std::sync::{Arc, Mutex};

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Formats 122 bits of `input` as a version 4 (random) UUID
pub fn uuid_v4(input: u128) -> String {
    let mut out = String::with_capacity(36);
    let mut nibbles = (0..32).map(|idx| ((input >> (idx * 4)) & 0x0F) as u8);
    for position in 0..36 {
        match position {
            8 | 13 | 18 | 23 => out.push('-'),
            14 => out.push('4'),
            _ => {
                let mut nibble = nibbles.next().unwrap_or_default();
                if position == 19 {
                    nibble |= 0b1000;
                }
                out.push(HEX_CHARS[nibble as usize] as char);
            }
        }
    }
    out
}

pub trait MakeIdempotencyToken: Send + Sync {
    fn make_idempotency_token(&self) -> String;
}

impl MakeIdempotencyToken for Mutex<fastrand::Rng> {
    fn make_idempotency_token(&self) -> String {
        let input = match self.lock() {
            Ok(rng) => rng.u128(..),
            Err(poisoned) => poisoned.into_inner().u128(..),
        };
        uuid_v4(input)
    }
}

impl MakeIdempotencyToken for &'static str {
    fn make_idempotency_token(&self) -> String {
        self.to_string()
    }
}

/// Shared, cheaply cloneable token source
#[derive(Clone)]
pub struct IdempotencyTokenProvider {
    inner: Arc<dyn MakeIdempotencyToken>,
}

impl IdempotencyTokenProvider {
    pub fn new(inner: impl MakeIdempotencyToken + 'static) -> Self {
        IdempotencyTokenProvider {
            inner: Arc::new(inner),
        }
    }

    /// Random UUID v4 tokens
    pub fn random() -> Self {
        Self::new(Mutex::new(fastrand::Rng::new()))
    }

    /// Always returns `token`; makes requests with token bindings reproducible
    pub fn fixed(token: &'static str) -> Self {
        Self::new(token)
    }

    pub fn make_idempotency_token(&self) -> String {
        self.inner.make_idempotency_token()
    }
}

impl Default for IdempotencyTokenProvider {
    fn default() -> Self {
        Self::random()
    }
}

impl fmt::Debug for IdempotencyTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdempotencyTokenProvider").finish()
    }
}

#[cfg(test)]
mod test {
    use crate::idempotency_token::{uuid_v4, IdempotencyTokenProvider, MakeIdempotencyToken};
    use proptest::prelude::*;
    use std::sync::Mutex;

    #[test]
    fn test_uuid() {
        assert_eq!(uuid_v4(0), "00000000-0000-4000-8000-000000000000");
        assert_eq!(uuid_v4(12341234), "2ff4cb00-0000-4000-8000-000000000000");
        assert_eq!(
            uuid_v4(u128::max_value()),
            "ffffffff-ffff-4fff-ffff-ffffffffffff"
        );
    }

    #[test]
    fn seeded_generators_agree() {
        let a = Mutex::new(fastrand::Rng::with_seed(123));
        let b = Mutex::new(fastrand::Rng::with_seed(123));
        assert_eq!(a.make_idempotency_token(), b.make_idempotency_token());
    }

    #[test]
    fn random_provider_makes_distinct_tokens() {
        let provider = IdempotencyTokenProvider::random();
        let first = provider.make_idempotency_token();
        assert_valid(&first);
        assert_ne!(first, provider.make_idempotency_token());
    }

    #[test]
    fn fixed_provider() {
        let provider = IdempotencyTokenProvider::fixed("00000000-0000-4000-8000-000000000000");
        assert_eq!(
            provider.clone().make_idempotency_token(),
            provider.make_idempotency_token()
        );
    }

    fn assert_valid(uuid: &str) {
        assert_eq!(uuid.len(), 36);
        let bytes = uuid.as_bytes();
        let dashes: Vec<usize> = uuid
            .chars()
            .enumerate()
            .filter_map(|(idx, chr)| if chr == '-' { Some(idx) } else { None })
            .collect();
        assert_eq!(dashes, vec![8, 13, 18, 23]);
        // version
        assert_eq!(bytes[14] as char, '4');
        // variant
        assert!(bytes[19] as char >= '8');
    }

    proptest! {
        #[test]
        fn doesnt_crash_uuid(v in any::<u128>()) {
            assert_valid(&uuid_v4(v));
        }
    }
}
