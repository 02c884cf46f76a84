//! End-to-end Huffman pipeline tests.

use huffkit::{
    CodecConfig, HuffmanError, Node, SerializedTree, build, count, decode, decode_text,
    deserialize, encode, encode_text, generate, serialize,
};

fn roundtrip(text: &str) -> String {
    let root = build(&count(text)).expect("build failed");
    let bits = encode(text, &generate(&root)).expect("encode failed");
    decode(&bits, &root).expect("decode failed")
}

#[test]
fn test_roundtrip_abracadabra() {
    let text = "abracadabra";
    let entries = count(text);
    let root = build(&entries).expect("build failed");
    let codes = generate(&root);
    let bits = encode(text, &codes).expect("encode failed");

    assert_eq!(root.leaf_count(), 5);
    assert!(
        bits.len() <= text.len() * 3,
        "{} bits is worse than a fixed 3-bit code",
        bits.len()
    );
    assert_eq!(decode(&bits, &root).expect("decode failed"), text);
}

#[test]
fn test_roundtrip_user_fields() {
    // Typical short fields encoded one tree per field.
    for text in ["Juan", "Pérez García", "juan.perez@example.com"] {
        assert_eq!(roundtrip(text), text);
    }
}

#[test]
fn test_roundtrip_single_symbol() {
    let entries = count("aaaa");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].symbol, 'a');
    assert_eq!(entries[0].count, 4);

    let report = encode_text("aaaa").expect("encode failed");
    assert_eq!(report.encoded, "0000");
    assert_eq!(report.decoded, "aaaa");

    let decoded = decode_text(&report.encoded, &report.tree).expect("decode failed");
    assert_eq!(decoded.decoded, "aaaa");
}

#[test]
fn test_roundtrip_long_text() {
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(200);
    assert_eq!(roundtrip(&text), text);
}

#[test]
fn test_roundtrip_many_symbols() {
    // Skewed counts give a deep, unbalanced tree.
    let mut text = String::new();
    for (i, c) in ('a'..='z').enumerate() {
        for _ in 0..(1usize << (i % 12)) {
            text.push(c);
        }
    }
    assert_eq!(roundtrip(&text), text);
}

#[test]
fn test_decode_in_separate_call_from_json() {
    let report = encode_text("hello, world").expect("encode failed");
    let wire = serde_json::to_string(&report.tree).expect("serialize failed");

    // A later call only has the payload and the JSON tree.
    let tree: SerializedTree = serde_json::from_str(&wire).expect("parse failed");
    let decoded = decode_text(&report.encoded, &tree).expect("decode failed");
    assert_eq!(decoded.decoded, "hello, world");
}

#[test]
fn test_tree_serialization_roundtrip() {
    for text in ["x", "xy", "mississippi", "¡Hola, señor Núñez!"] {
        let root = build(&count(text)).expect("build failed");
        assert_eq!(deserialize(&serialize(&root)).expect("deserialize failed"), root);
    }
}

#[test]
fn test_truncated_payload_is_rejected() {
    let report = encode_text("abracadabra").expect("encode failed");
    // The final code is 'a' = "0"; dropping two bits leaves half of 'r'.
    let truncated = &report.encoded[..report.encoded.len() - 2];

    let err = decode_text(truncated, &report.tree).unwrap_err();
    assert!(matches!(err, HuffmanError::MalformedPayload { .. }));
}

#[test]
fn test_corrupted_tree_is_rejected() {
    let mut report = encode_text("abc").expect("encode failed");
    report.tree.right = None;

    let err = decode_text(&report.encoded, &report.tree).unwrap_err();
    assert!(matches!(err, HuffmanError::MalformedTree { .. }));
}

#[test]
fn test_foreign_code_table() {
    let codes = generate(&build(&count("abc")).expect("build failed"));
    let err = encode("abd", &codes).unwrap_err();
    assert!(matches!(
        err,
        HuffmanError::UnknownSymbol {
            symbol: 'd',
            position: 2
        }
    ));
}

#[test]
fn test_empty_inputs() {
    assert!(count("").is_empty());
    assert!(matches!(build(&[]), Err(HuffmanError::InvalidInput { .. })));
    assert!(matches!(
        encode_text(""),
        Err(HuffmanError::InvalidInput { .. })
    ));
}

#[test]
fn test_concurrent_calls_are_independent() {
    let texts = ["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"];

    let handles: Vec<_> = texts
        .iter()
        .map(|&text| {
            std::thread::spawn(move || {
                let report = encode_text(text).expect("encode failed");
                (text, report)
            })
        })
        .collect();

    for handle in handles {
        let (text, report) = handle.join().expect("thread panicked");
        assert_eq!(report.decoded, text);
        assert_eq!(report.codes.len(), count(text).len());
    }
}

#[test]
fn test_unbounded_config_accepts_deep_tree() {
    // Fibonacci counts produce a maximally deep tree.
    let mut text = String::new();
    let (mut a, mut b) = (1usize, 1usize);
    for c in 'a'..='t' {
        text.extend(std::iter::repeat_n(c, a));
        (a, b) = (b, a + b);
    }

    let root = build(&count(&text)).expect("build failed");
    assert_eq!(root.depth(), 19);

    let tree = serialize(&root);
    let shallow = CodecConfig::new(None, 10);
    assert!(huffkit::deserialize_with(&tree, &shallow).is_err());
    let back: Node =
        huffkit::deserialize_with(&tree, &CodecConfig::UNLIMITED).expect("deserialize failed");
    assert_eq!(back, root);
}
