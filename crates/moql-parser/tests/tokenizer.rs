//! Property tests for the operator tokenizer
//!
//! Tokenizing then rejoining key, operator spelling, and value must
//! reconstruct the original token losslessly.

use moql_parser::tokenize;
use proptest::prelude::*;

// Keys and values drawn from characters that are not operator symbols
const KEY: &str = "[a-z_][a-z0-9_.]{0,11}";
const VALUE: &str = "[A-Za-z0-9_.,:/-]{0,16}";

proptest! {
    #[test]
    fn comparison_tokens_round_trip(
        key in KEY,
        op in prop::sample::select(vec!["=", "!=", "<", "<=", ">", ">="]),
        value in VALUE,
    ) {
        let token = format!("{key}{op}{value}");
        let param = tokenize(&token).unwrap();
        prop_assert_eq!(param.reconstruct(), token);
        prop_assert_eq!(param.operator.symbol(), op);
        prop_assert_eq!(param.key, key);
        prop_assert_eq!(param.value, value);
    }

    #[test]
    fn exists_tokens_round_trip(key in KEY) {
        let param = tokenize(&key).unwrap();
        prop_assert_eq!(param.reconstruct(), key.clone());
        prop_assert_eq!(param.key.as_str(), "");
        prop_assert_eq!(param.value, key);
    }

    #[test]
    fn not_exists_tokens_round_trip(key in KEY) {
        let token = format!("!{key}");
        let param = tokenize(&token).unwrap();
        prop_assert_eq!(param.reconstruct(), token);
        prop_assert_eq!(param.value, key);
    }
}
