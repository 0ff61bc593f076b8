#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use mb64_core::crypto::KeyDerivation;
    use mb64_core::encoding::{permuted_alphabet, Alphabet};
    use proptest::prelude::*;

    fn keyed_alphabet(key: &str) -> Alphabet {
        let digest = KeyDerivation::new().alphabet_key(key);
        Alphabet::from_chars(permuted_alphabet(&digest))
    }

    #[test]
    fn test_canonical_matches_standard_base64() {
        let alphabet = Alphabet::canonical();
        for data in [
            &b""[..],
            b"f",
            b"fo",
            b"foo",
            b"foob",
            b"fooba",
            b"foobar",
            b"hello world",
            &[0, 1, 2, 3, 255, 254, 253, 128, 127],
        ] {
            assert_eq!(alphabet.encode(data), STANDARD.encode(data));
        }
    }

    #[test]
    fn test_padding_counts() {
        let alphabet = keyed_alphabet("padkey");
        // 1 trailing byte -> two '=', 2 trailing bytes -> one '='.
        assert!(alphabet.encode(b"f").ends_with("=="));
        assert!(alphabet.encode(b"fo").ends_with('='));
        assert!(!alphabet.encode(b"fo").ends_with("=="));
        assert!(!alphabet.encode(b"foo").contains('='));
    }

    #[test]
    fn test_round_trip_non_multiple_of_three() {
        let alphabet = keyed_alphabet("lengths");
        for n in 0..64usize {
            let data: Vec<u8> = (0..n as u8).collect();
            assert_eq!(alphabet.decode(&alphabet.encode(&data)), data, "len {n}");
        }
    }

    #[test]
    fn test_unknown_symbols_decode_to_zero() {
        let alphabet = keyed_alphabet("lenient");
        // '!' and '~' are outside every alphabet; they decode as value 0
        // rather than failing. Garbage flows through; authentication is
        // the integrity boundary.
        let text = alphabet.encode(b"abc");
        let corrupted: String = text.chars().map(|_| '!').collect();
        let decoded = alphabet.decode(&corrupted);
        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded, vec![0, 0, 0]);
    }

    #[test]
    fn test_decode_strips_trailing_padding_only() {
        let alphabet = Alphabet::canonical();
        assert_eq!(alphabet.decode("Zg=="), b"f");
        assert_eq!(alphabet.decode("Zm8="), b"fo");
        assert_eq!(alphabet.decode("Zm9v"), b"foo");
    }

    #[test]
    fn test_empty_input() {
        let alphabet = keyed_alphabet("empty");
        assert_eq!(alphabet.encode(b""), "");
        assert_eq!(alphabet.decode(""), Vec::<u8>::new());
    }

    proptest! {
        #[test]
        fn prop_canonical_equals_standard(data in proptest::collection::vec(any::<u8>(), 0..512)) {
            prop_assert_eq!(Alphabet::canonical().encode(&data), STANDARD.encode(&data));
        }

        #[test]
        fn prop_round_trip_keyed(
            key in "[ -~]{1,24}",
            data in proptest::collection::vec(any::<u8>(), 0..512),
        ) {
            let alphabet = keyed_alphabet(&key);
            prop_assert_eq!(alphabet.decode(&alphabet.encode(&data)), data);
        }
    }
}
