#[cfg(test)]
mod tests {
    use mb64_core::constants::WIRE_OVERHEAD;
    use mb64_core::crypto::{CipherEngine, KeyDerivation};
    use mb64_core::Mb64Error;
    use proptest::prelude::*;

    fn test_key(label: &str) -> [u8; 32] {
        KeyDerivation::new().hash(label)
    }

    #[test]
    fn test_round_trip() {
        let key = test_key("cipher round trip");
        let mut engine = CipherEngine::new();

        let wire = engine.encrypt(&key, b"hello world").unwrap();
        assert_eq!(engine.decrypt(&key, &wire).unwrap(), b"hello world");
    }

    #[test]
    fn test_wire_length_is_overhead_plus_plaintext() {
        let key = test_key("wire length");
        let mut engine = CipherEngine::new();

        for n in [0usize, 1, 2, 15, 16, 17, 1024] {
            let plaintext = vec![0xA5u8; n];
            let wire = engine.encrypt(&key, &plaintext).unwrap();
            assert_eq!(wire.len(), WIRE_OVERHEAD + n);
        }
    }

    #[test]
    fn test_fresh_nonce_per_call() {
        let key = test_key("nonce freshness");
        let mut engine = CipherEngine::new();

        let first = engine.encrypt(&key, b"same payload").unwrap();
        let second = engine.encrypt(&key, b"same payload").unwrap();

        assert_ne!(first, second);
        assert_eq!(engine.decrypt(&key, &first).unwrap(), b"same payload");
        assert_eq!(engine.decrypt(&key, &second).unwrap(), b"same payload");
    }

    #[test]
    fn test_too_short_rejected() {
        let key = test_key("short input");
        let mut engine = CipherEngine::new();

        for n in 0..WIRE_OVERHEAD {
            let err = engine.decrypt(&key, &vec![0u8; n]).unwrap_err();
            assert_eq!(err, Mb64Error::InputTooShort { actual: n });
        }

        // Exactly 28 bytes is structurally valid (empty plaintext) but an
        // all-zero envelope fails the tag check.
        let err = engine.decrypt(&key, &[0u8; WIRE_OVERHEAD]).unwrap_err();
        assert_eq!(err, Mb64Error::AuthenticationFailure);
    }

    #[test]
    fn test_wrong_key_fails_authentication() {
        let mut engine = CipherEngine::new();
        let wire = engine.encrypt(&test_key("right key"), b"secret").unwrap();

        let err = engine.decrypt(&test_key("wrong key"), &wire).unwrap_err();
        assert_eq!(err, Mb64Error::AuthenticationFailure);
    }

    proptest! {
        #[test]
        fn prop_tampered_wire_fails(
            data in proptest::collection::vec(any::<u8>(), 1..128),
            flip_bit in 0u8..8,
            pos_seed in any::<usize>(),
        ) {
            let key = test_key("tamper");
            let mut engine = CipherEngine::new();

            let mut wire = engine.encrypt(&key, &data).unwrap();
            let pos = pos_seed % wire.len();
            wire[pos] ^= 1 << flip_bit;

            prop_assert_eq!(
                engine.decrypt(&key, &wire).unwrap_err(),
                Mb64Error::AuthenticationFailure
            );
        }

        #[test]
        fn prop_round_trip(data in proptest::collection::vec(any::<u8>(), 0..512)) {
            let key = test_key("prop round trip");
            let mut engine = CipherEngine::new();
            let wire = engine.encrypt(&key, &data).unwrap();
            prop_assert_eq!(engine.decrypt(&key, &wire).unwrap(), data);
        }
    }
}
