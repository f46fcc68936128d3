// Rewrites BigInt literals (42n, 1_000n, 0xFFn, 0b101n, 0o77n)
// into runtime expressions valid on pre-BigInt runtimes.

use regex::{Regex, Captures};
use std::sync::LazyLock;

static BIGINT_LITERAL
  : LazyLock<Regex>
  = LazyLock::new(|| {
    // Group 1 is a boundary guard: one preceding non-identifier
    // character, or the start of the text. Without it a literal
    // embedded in a longer identifier, e.g. abc123n, would match.
    // Group 2 is the numeric lexeme, base prefix included.
    // The trailing \b keeps the n suffix from matching
    // the first letter of a longer identifier.
    Regex::new(
      r"(^|[^\w$])((?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|0[oO][0-7_]+|[0-9][0-9_]*))n\b"
    ).unwrap() });

pub fn rewrite_bigint_literals (
  // Replaces every BigInt literal in src with an expression that
  // prefers native BigInt when available and falls back to Number
  // otherwise. All other text is preserved byte for byte.
  // Purely textual: a literal inside a quoted string or comment
  // is rewritten like any other.
  src : &str )
  -> String {

  BIGINT_LITERAL . replace_all (
    src,
    | caps : &Captures | {
      let guard : &str = &caps [1];
      let cleaned : String = // underscores are grouping only
        caps [2] . replace ( '_', "" );
      format! (
        // String form, so BigInt() rather than the regex decides
        // how to parse the 0x / 0b / 0o base prefixes.
        "{}(typeof BigInt!=='undefined'?BigInt('{}'):Number('{}'))",
        guard, cleaned, cleaned ) } )
    . into_owned () }
