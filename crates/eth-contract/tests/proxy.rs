//! Integration tests exercising the proxy through its public API:
//! config -> contract -> encode -> call request.

use std::sync::Arc;
use std::thread;

use abi_codec::ArgumentValue;
use eth_contract::{Contract, ContractConfig, ContractError};

const REGISTRY_ABI: &str = r#"[
    {"type": "function", "name": "register", "inputs": [
        {"name": "owner", "type": "address"},
        {"name": "names", "type": "string[]"},
        {"name": "payloads", "type": "bytes[]"}
    ]},
    {"type": "function", "name": "setName", "inputs": [
        {"name": "name", "type": "string"}
    ]},
    {"type": "event", "name": "Registered", "inputs": []}
]"#;

const REGISTRY: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

#[test]
fn config_to_call_request() {
    let config = ContractConfig::from_json(&format!(
        r#"{{"address": "{REGISTRY}", "abi": {REGISTRY_ABI}}}"#
    ))
    .unwrap();
    let contract = Contract::from_config(&config).unwrap();

    let request = contract.call_request("setName", r#"["hi"]"#).unwrap();
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "to": REGISTRY,
            "data": "0xc47f0027\
                     0000000000000000000000000000000000000000000000000000000000000020\
                     0000000000000000000000000000000000000000000000000000000000000002\
                     6869000000000000000000000000000000000000000000000000000000000000"
        })
    );
}

#[test]
fn tagged_and_positional_agree() {
    let contract = Contract::new(REGISTRY_ABI, REGISTRY).unwrap();

    let positional = contract
        .encode_call_json(
            "register",
            r#"["0x0000000000000000000000000000000000000001", ["a", "bc"], ["0x01", "0x0203"]]"#,
        )
        .unwrap();
    let tagged = contract
        .encode_call_json(
            "register",
            r#"[
                {"t": "address", "v": "0x0000000000000000000000000000000000000001"},
                {"t": "string[]", "v": ["a", "bc"]},
                {"t": "bytes[]", "v": ["0x01", "0x0203"]}
            ]"#,
        )
        .unwrap();

    assert_eq!(positional, tagged);
}

#[test]
fn concurrent_encoding_shares_one_catalog() {
    let contract = Arc::new(Contract::new(REGISTRY_ABI, REGISTRY).unwrap());
    let expected = contract
        .encode_call("setName", &[ArgumentValue::string("shared")])
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let contract = Arc::clone(&contract);
            thread::spawn(move || {
                contract
                    .encode_call("setName", &[ArgumentValue::string("shared")])
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn errors_carry_codes() {
    let contract = Contract::new(REGISTRY_ABI, REGISTRY).unwrap();

    let cases: [(&str, &str, u32); 4] = [
        ("nope", "[]", 1),
        ("setName", "[]", 2),
        ("register", r#"["0x01", [], []]"#, 4),
        ("register", r#"["0x0000000000000000000000000000000000000001", [], ["0xqq"]]"#, 6),
    ];

    for (name, args, code) in cases {
        let err = contract.encode_call_json(name, args).unwrap_err();
        assert_eq!(err.code(), code, "{name} {args}: {err}");
    }
}

#[test]
fn unsupported_type_in_interface() {
    let abi = r#"[{"type": "function", "name": "f", "inputs": [{"type": "bytes32"}]}]"#;
    let err = Contract::new(abi, REGISTRY).unwrap_err();

    assert!(matches!(err, ContractError::Abi(_)));
    assert_eq!(err.code(), 7);
}
