//! Property tests for the scanner pipeline.
//!
//! Arbitrary input must never panic, must reach end of file, and must keep
//! returning end of file afterwards.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use llace_ir::TokenKind;
use llace_lexer::{scan, Scanner, TokenSource};
use proptest::prelude::*;

/// Every token consumes at least one character, so a source of `n` chars
/// produces at most `n` tokens before end of file (plus synthetic tokens,
/// at most one per documentation token).
fn token_limit(source: &str) -> usize {
    source.chars().count() * 2 + 2
}

proptest! {
    #[test]
    fn base_scanner_terminates(source in "\\PC{0,80}") {
        let mut scanner = Scanner::new(&source, "prop.llace");
        let mut reached_eof = false;
        for _ in 0..token_limit(&source) {
            if scanner.read_token().kind == TokenKind::Eof {
                reached_eof = true;
                break;
            }
        }
        prop_assert!(reached_eof);
        prop_assert_eq!(scanner.read_token().kind, TokenKind::Eof);
    }

    #[test]
    fn pipeline_terminates(source in "[a-z0-9 ,;|()`/\n\"'-]{0,80}") {
        let mut tokens = scan(&source, "prop.llace");
        let mut count = 0;
        while tokens.has_unconsumed_input() {
            tokens.read_token();
            count += 1;
            prop_assert!(count <= token_limit(&source));
        }
        prop_assert_eq!(tokens.read_token().kind, TokenKind::Eof);
    }

    #[test]
    fn token_text_is_a_source_slice(source in "[a-z0-9 +*.()\"]{0,40}") {
        let mut scanner = Scanner::new(&source, "prop.llace");
        loop {
            let token = scanner.read_token();
            if token.kind == TokenKind::Eof {
                break;
            }
            prop_assert!(source.contains(&token.text));
        }
    }
}
