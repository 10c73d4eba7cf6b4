//! Classification of single-quoted literals.
//!
//! A `'...'` lexeme is matched against an ordered list of patterns; the
//! first pattern that matches decides the token kind.

use std::sync::LazyLock;

use llace_ir::TokenKind;
use regex::RegexSet;

const HEX: &str = "[a-fA-F0-9]";
const YEAR: &str = "([0-9]{4}|[+-][0-9]{4,10})";
const MONTH: &str = "[0-9]{2}";
const DAY: &str = "[0-9]{2}";
const HOUR: &str = "[0-9]{2}";
const MINUTE: &str = "[0-9]{2}";
const SECOND: &str = r"[0-9]{2}(\.[0-9]{1,6})?";
const IP_OCTET: &str = "(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";

/// Kinds in match priority order, parallel to [`patterns`].
const KINDS: [TokenKind; 6] = [
    TokenKind::CharLiteral,
    TokenKind::UuidLiteral,
    TokenKind::DateLiteral,
    TokenKind::DateTimeLiteral,
    TokenKind::IpAddressV4,
    TokenKind::IpAddressV6,
];

fn patterns() -> [String; 6] {
    let time_zone = format!("([zZ]|[+-]{HOUR}(:{MINUTE})?)");
    let ip_v4 = format!(r"{IP_OCTET}\.{IP_OCTET}\.{IP_OCTET}\.{IP_OCTET}");
    let seg = format!("{HEX}{{1,4}}");
    let dual = format!("({seg}:{seg}|{ip_v4})");
    let ip_v6 = [
        format!("({seg}:){{6}}{dual}"),
        format!("::({seg}:){{5}}{dual}"),
        format!("({seg})?::({seg}:){{4}}{dual}"),
        format!("(({seg}:)?{seg})?::({seg}:){{3}}{dual}"),
        format!("(({seg}:){{0,2}}{seg})?::({seg}:){{2}}{dual}"),
        format!("(({seg}:){{0,3}}{seg})?::({seg}:){dual}"),
        format!("(({seg}:){{0,4}}{seg})?::{dual}"),
        format!("(({seg}:){{0,5}}{seg})?::{seg}"),
        format!("(({seg}:){{0,6}}{seg})?::"),
    ]
    .join("|");

    [
        r"^'([^\\]|\\t|\\r|\\n|\\'|\\\\)'$".to_string(),
        format!("^'{HEX}{{8}}-{HEX}{{4}}-{HEX}{{4}}-{HEX}{{4}}-{HEX}{{12}}'$"),
        format!("^'{YEAR}-{MONTH}-{DAY}'$"),
        format!("^'{YEAR}-{MONTH}-{DAY}T{HOUR}:{MINUTE}(:{SECOND})?{time_zone}'$"),
        format!("^'{ip_v4}'$"),
        format!("^'({ip_v6})'$"),
    ]
}

#[allow(
    clippy::expect_used,
    reason = "patterns are compile-time constants covered by tests"
)]
static LITERAL_PATTERNS: LazyLock<RegexSet> =
    LazyLock::new(|| RegexSet::new(patterns()).expect("literal patterns are valid"));

/// Classify a complete single-quoted lexeme, quotes included.
///
/// Returns [`TokenKind::UnrecognizedLiteral`] when no pattern matches.
pub(crate) fn classify(text: &str) -> TokenKind {
    LITERAL_PATTERNS
        .matches(text)
        .iter()
        .next()
        .map_or(TokenKind::UnrecognizedLiteral, |index| KINDS[index])
}
