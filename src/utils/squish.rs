/// Squeezes out runs of spaces and newlines.
///
/// Every maximal run of two or more whitespace characters collapses to a
/// single space; lone whitespace characters are kept as they are. The
/// operation is idempotent.
pub fn squish(styles: &str) -> String {
    let mut out = String::with_capacity(styles.len());
    let mut run = 0usize;
    let mut first = ' ';

    for ch in styles.chars() {
        if ch.is_whitespace() {
            if run == 0 {
                first = ch;
            }
            run += 1;
            continue;
        }

        match run {
            0 => {}
            1 => out.push(first),
            _ => out.push(' '),
        }
        run = 0;

        out.push(ch);
    }

    match run {
        0 => {}
        1 => out.push(first),
        _ => out.push(' '),
    }

    out
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn test_runs_collapse_to_a_single_space() {
        assert_eq!(squish("a   b"), "a b");
        assert_eq!(squish("a \n\t b"), "a b");
        assert_eq!(squish("  leading and trailing  "), " leading and trailing ");
    }

    #[test]
    fn test_single_whitespace_is_kept_as_is() {
        assert_eq!(squish("a b"), "a b");
        assert_eq!(
            squish("a\nb"),
            "a\nb",
            "A lone newline is not a run and should survive"
        );
    }

    #[test]
    fn test_empty_and_plain_strings_pass_through() {
        assert_eq!(squish(""), "");
        assert_eq!(squish("--tokenValue:16px;"), "--tokenValue:16px;");
    }

    #[test]
    fn test_no_two_consecutive_whitespace_characters_remain() {
        let squished = squish("a\t\t b\n\n\n c   \t d");

        let mut previous_was_whitespace = false;
        for ch in squished.chars() {
            if ch.is_whitespace() {
                assert!(
                    !previous_was_whitespace,
                    "Squished output should never contain consecutive whitespace"
                );
                previous_was_whitespace = true;
            } else {
                previous_was_whitespace = false;
            }
        }
    }

    #[test]
    fn test_idempotent_on_random_inputs() {
        let mut rng = rand::rng();
        let alphabet = [' ', '\n', '\t', 'a', 'b', '-', ':', ';', '{', '}'];

        for _ in 0..100 {
            let input: String = (0..rng.random_range(0..200))
                .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                .collect();

            let once = squish(&input);
            let twice = squish(&once);
            assert_eq!(once, twice, "squish(squish(s)) should equal squish(s)");
        }
    }
}
