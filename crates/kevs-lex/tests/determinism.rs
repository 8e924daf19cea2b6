//! Scanning the same input twice must yield structurally identical token
//! streams: repeated scans of the same input produce structurally
//! identical results.

use kevs_util::Diagnostics;
use proptest::prelude::*;

fn scan(src: &[u8]) -> Vec<(kevs_lex::TokenKind, Vec<u8>, u32)> {
    let mut diag = Diagnostics::new("prop", true, false);
    kevs_lex::scan(src, &mut diag)
        .unwrap()
        .into_iter()
        .map(|t| (t.kind, t.text.to_vec(), t.line))
        .collect()
}

proptest! {
    #[test]
    fn repeated_scans_agree(n in 0i64..1000) {
        let src = format!("a=1;b=\"x\";c=true;n={n};").into_bytes();
        prop_assert_eq!(scan(&src), scan(&src));
    }
}

#[test]
fn deeply_nested_list_scans() {
    let depth = 64;
    let mut src = String::from("root=");
    src.push_str(&"[".repeat(depth));
    src.push_str("1;");
    src.push_str(&"];".repeat(depth));
    let mut diag = Diagnostics::new("nest", true, false);
    let tokens = kevs_lex::scan(src.as_bytes(), &mut diag).expect("deep nest should scan");
    // key, '=', depth '[', the int value, the ';' that terminates it,
    // then depth pairs of (']', ';') closing each list level.
    assert_eq!(tokens.len(), 1 + 1 + depth + 1 + 1 + depth * 2);
}
