/// Map an entropy string to a winning number in [1, 100].
///
/// Rolling `hash * 31 + code` over the string's UTF-16 code units with
/// 32-bit wraparound, then `|hash mod 100| + 1`. Deterministic for a
/// given input. This is a convenience generator: the entropy is sourced
/// by the same client that runs the draw, so it carries no fairness
/// guarantee.
pub fn draw_number(entropy: &str) -> u32 {
    let mut hash: i32 = 0;
    for code in entropy.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(code as i32);
    }
    (hash % 100).unsigned_abs() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_number_is_deterministic() {
        let entropy = "1721826000000-0.4375-Mozilla/5.0-1920x1080";
        assert_eq!(draw_number(entropy), draw_number(entropy));
    }

    #[test]
    fn test_draw_number_stays_in_range() {
        let samples = [
            "",
            "a",
            "1721826000000-0.1-agent-800x600",
            "1721826000001-0.2-agent-800x600",
            "\u{1F3B0} unicode entropy \u{00E9}",
        ];
        for entropy in samples {
            let n = draw_number(entropy);
            assert!((1..=100).contains(&n), "{entropy:?} -> {n}");
        }
        // Longer sweep to exercise the wraparound paths.
        for i in 0..10_000u32 {
            let n = draw_number(&format!("{i}-seed-agent-1920x1080"));
            assert!((1..=100).contains(&n));
        }
    }

    #[test]
    fn test_empty_entropy_maps_to_one() {
        // Zero hash -> |0 mod 100| + 1.
        assert_eq!(draw_number(""), 1);
    }

    #[test]
    fn test_distinct_entropy_can_differ() {
        let a = draw_number("1721826000000-0.1-agent-800x600");
        let b = draw_number("1721826000000-0.2-agent-800x600");
        let c = draw_number("1721826009999-0.3-agent-800x600");
        // Not a distribution claim, just that the hash reacts to input.
        assert!(a != b || b != c);
    }
}
