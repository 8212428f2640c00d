// crates/enigma-cli/src/io/blocks.rs
//
// Batch output, one block per chunk:
//
//   START KEY CHARS\n
//   CIPHERTEXT\n
//   -------- (80 dashes) \n
//
// Non-letters pass through unchanged, so the ciphertext may itself contain
// newlines and dash lines. CHARS is the ciphertext length in chars and is
// what delimits it; the dash line is only checked as a trailer.

use anyhow::{bail, Context, Result};
use enigma_core::{Indicator, Transmission};

const RULE_WIDTH: usize = 80;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

pub fn format_block(t: &Transmission) -> String {
    format!(
        "{} {}\n{}\n{}\n",
        t.header(),
        t.ciphertext.chars().count(),
        t.ciphertext,
        rule()
    )
}

pub fn format_blocks(ts: &[Transmission]) -> String {
    ts.iter().map(format_block).collect()
}

/// Byte offset just past the first `n` chars of `s`.
fn char_offset(s: &str, n: usize) -> Option<usize> {
    if n == 0 {
        return Some(0);
    }
    s.char_indices().nth(n - 1).map(|(i, c)| i + c.len_utf8())
}

pub fn parse_blocks(s: &str) -> Result<Vec<Transmission>> {
    let trailer = format!("\n{}\n", rule());
    let mut out = Vec::new();

    let mut rest = s;
    while !rest.is_empty() {
        let idx = out.len();
        let Some((header, body)) = rest.split_once('\n') else {
            bail!("block {idx}: header line is not terminated");
        };

        let mut fields = header.split(' ');
        let (Some(start), Some(key), Some(len), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            bail!("block {idx}: bad header {header:?}");
        };
        let len: usize = len
            .parse()
            .with_context(|| format!("block {idx}: bad length {len:?}"))?;

        let Some(end) = char_offset(body, len) else {
            bail!("block {idx}: ciphertext shorter than {len} chars");
        };
        let (ciphertext, tail) = body.split_at(end);
        let Some(next) = tail.strip_prefix(trailer.as_str()) else {
            bail!("block {idx} is not terminated by a dash line");
        };
        rest = next;

        out.push(Transmission {
            start_position: Indicator::parse(start)
                .with_context(|| format!("block {idx}: start position"))?,
            encrypted_key: Indicator::parse(key)
                .with_context(|| format!("block {idx}: message key"))?,
            ciphertext: ciphertext.to_string(),
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(start: &str, key: &str, c: &str) -> Transmission {
        Transmission {
            start_position: Indicator::parse(start).unwrap(),
            encrypted_key: Indicator::parse(key).unwrap(),
            ciphertext: c.to_string(),
        }
    }

    #[test]
    fn blocks_round_trip_with_embedded_newlines() {
        let ts = vec![t("WZA", "IGI", "EVIV\nKEGI"), t("ABC", "DEF", ""), t("QQQ", "RRR", "X-Y\n")];
        let text = format_blocks(&ts);
        assert!(text.starts_with("WZA IGI 9\nEVIV\nKEGI\n----"));
        assert_eq!(parse_blocks(&text).unwrap(), ts);
    }

    #[test]
    fn dash_line_inside_ciphertext_is_not_a_separator() {
        let body = format!("ATTACK\n{}\nAT DAWN", rule());
        let ts = vec![t("WZA", "IGI", &body), t("ABC", "DEF", "\u{e9}\u{e9}")];
        let text = format_blocks(&ts);
        assert_eq!(parse_blocks(&text).unwrap(), ts);
    }

    #[test]
    fn unterminated_block_is_an_error() {
        assert!(parse_blocks("WZA IGI 4\nEVIV\n").is_err());
        assert!(parse_blocks("WZA IGI\nEVIV\n").is_err());
    }

    #[test]
    fn length_past_end_is_an_error() {
        let text = format!("WZA IGI 40\nEVIV\n{}\n", rule());
        assert!(parse_blocks(&text).is_err());
    }

    #[test]
    fn empty_file_has_no_blocks() {
        assert!(parse_blocks("").unwrap().is_empty());
    }
}
