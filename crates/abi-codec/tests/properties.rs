//! Layout laws that must hold for any input.

use abi_codec::dynamic::{encode_bytes, encode_string};
use abi_codec::scalar::encode_uint;
use abi_codec::{encode_arguments, ArgumentValue, ElementKind, TypeDescriptor};
use proptest::prelude::*;

fn arb_argument() -> impl Strategy<Value = (TypeDescriptor, ArgumentValue)> {
    prop_oneof![
        any::<u128>().prop_map(|n| (TypeDescriptor::UInt256, ArgumentValue::uint(n.to_string()))),
        any::<[u8; 20]>().prop_map(|a| {
            (TypeDescriptor::Address, ArgumentValue::address(hex::encode(a)))
        }),
        any::<bool>().prop_map(|b| (TypeDescriptor::Bool, ArgumentValue::boolean(b))),
        proptest::collection::vec(any::<u8>(), 0..100).prop_map(|bytes| {
            (TypeDescriptor::Bytes, ArgumentValue::bytes(hex::encode(bytes)))
        }),
        ".{0,80}".prop_map(|s| (TypeDescriptor::String, ArgumentValue::string(s))),
        proptest::collection::vec(any::<u64>(), 0..8).prop_map(|items| {
            (
                TypeDescriptor::ArrayOf(ElementKind::UInt256),
                ArgumentValue::array(items, |n: u64| ArgumentValue::uint(n.to_string())),
            )
        }),
        proptest::collection::vec(".{0,40}", 0..6).prop_map(|items| {
            (
                TypeDescriptor::ArrayOf(ElementKind::String),
                ArgumentValue::array(items, ArgumentValue::string),
            )
        }),
    ]
}

proptest! {
    #[test]
    fn uint_words_are_left_padded(n in any::<u128>()) {
        let word = hex::encode(encode_uint(&n.to_string()).unwrap());

        prop_assert_eq!(word.len(), 64);
        let trimmed = word.trim_start_matches('0');
        let expected = format!("{n:x}");
        let expected = if n == 0 { "" } else { expected.as_str() };
        prop_assert_eq!(trimmed, expected);
    }

    #[test]
    fn bytes_data_is_word_aligned(bytes in proptest::collection::vec(any::<u8>(), 0..200)) {
        let fragment = encode_bytes(&hex::encode(&bytes)).unwrap();

        prop_assert_eq!(fragment.data.len(), bytes.len().div_ceil(32) * 32);
        prop_assert_eq!(&fragment.data[..bytes.len()], &bytes[..]);
        prop_assert!(fragment.data[bytes.len()..].iter().all(|b| *b == 0));
    }

    #[test]
    fn string_data_is_word_aligned(s in ".{0,120}") {
        let fragment = encode_string(&s);
        prop_assert_eq!(fragment.data.len(), s.len().div_ceil(32) * 32);
    }

    #[test]
    fn head_is_one_word_per_argument(args in proptest::collection::vec(arb_argument(), 0..8)) {
        let (types, values): (Vec<_>, Vec<_>) = args.into_iter().unzip();
        let block = encode_arguments(&types, &values).unwrap();

        prop_assert_eq!(block.len() % 32, 0);
        prop_assert!(block.len() >= 32 * types.len());

        // Every dynamic head word points inside the block, past the head.
        for (i, ty) in types.iter().enumerate() {
            if ty.is_dynamic() {
                let word = &block[32 * i..32 * (i + 1)];
                let offset = usize::from_str_radix(&hex::encode(word), 16).unwrap();
                prop_assert!(offset >= 32 * types.len());
                prop_assert!(offset < block.len());
                prop_assert_eq!(offset % 32, 0);
            }
        }
    }

    #[test]
    fn encoding_is_deterministic(args in proptest::collection::vec(arb_argument(), 0..8)) {
        let (types, values): (Vec<_>, Vec<_>) = args.into_iter().unzip();
        prop_assert_eq!(
            encode_arguments(&types, &values).unwrap(),
            encode_arguments(&types, &values).unwrap()
        );
    }
}
