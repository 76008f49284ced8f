use crate::error::{PokedexError, Result};
use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

pub fn compare_natural(a: &str, b: &str) -> Ordering {
    compare_folded(a, b).then_with(|| a.cmp(b))
}

pub fn compare_keys(a: &[&str], b: &[&str]) -> Ordering {
    for (lhs, rhs) in a.iter().zip(b.iter()) {
        let ord = compare_natural(lhs, rhs);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}

fn compare_folded(a: &str, b: &str) -> Ordering {
    let mut lhs = a.chars().peekable();
    let mut rhs = b.chars().peekable();
    loop {
        match (lhs.peek().copied(), rhs.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let left = take_digits(&mut lhs);
                let right = take_digits(&mut rhs);
                let ord = compare_digit_runs(&left, &right);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                let ord = x.to_ascii_lowercase().cmp(&y.to_ascii_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                lhs.next();
                rhs.next();
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

// Compares digit runs of arbitrary length without overflowing an integer type.
// Equal values with more leading zeros sort after.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let trimmed_a = a.trim_start_matches('0');
    let trimmed_b = b.trim_start_matches('0');
    trimmed_a
        .len()
        .cmp(&trimmed_b.len())
        .then_with(|| trimmed_a.cmp(trimmed_b))
        .then_with(|| a.len().cmp(&b.len()))
}

pub fn trailing_number(url: &str) -> Result<u32> {
    let segment = url
        .rsplit('/')
        .find(|s| !s.is_empty())
        .ok_or_else(|| PokedexError::SourceData(format!("empty reference url `{url}`")))?;
    segment.parse().map_err(|_| {
        PokedexError::SourceData(format!("reference url `{url}` does not end in a number"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_runs_compare_by_value() {
        let two = "https://pokeapi.co/api/v2/pokemon-species/2/";
        let ten = "https://pokeapi.co/api/v2/pokemon-species/10/";
        assert_eq!(compare_natural(two, ten), Ordering::Less);
        assert_eq!(compare_natural(ten, two), Ordering::Greater);
    }

    #[test]
    fn leading_zeros_sort_after_equal_values() {
        assert_eq!(compare_natural("007", "7"), Ordering::Greater);
        assert_eq!(compare_natural("7", "07"), Ordering::Less);
        assert_eq!(compare_natural("box 07", "box 7b"), Ordering::Greater);
        assert_eq!(compare_natural("008", "7"), Ordering::Greater);
        assert_eq!(compare_natural("007", "8"), Ordering::Less);
    }

    #[test]
    fn case_is_folded_before_tie_break() {
        assert_eq!(compare_natural("Abra", "abra-2"), Ordering::Less);
        assert_eq!(compare_natural("b", "A"), Ordering::Greater);
        assert_ne!(compare_natural("Abra", "abra"), Ordering::Equal);
    }

    #[test]
    fn composite_keys_compare_in_order() {
        assert_eq!(compare_keys(&["6", "10002"], &["6", "10010"]), Ordering::Less);
        assert_eq!(compare_keys(&["10", "1"], &["9", "500"]), Ordering::Greater);
        assert_eq!(compare_keys(&["1"], &["1", "a"]), Ordering::Less);
    }

    #[test]
    fn trailing_number_reads_last_segment() {
        assert_eq!(
            trailing_number("https://pokeapi.co/api/v2/pokemon-species/151/").unwrap(),
            151
        );
        assert_eq!(trailing_number("pokemon-species/9").unwrap(), 9);
        assert!(matches!(
            trailing_number("https://pokeapi.co/api/v2/pokemon-species/mew/"),
            Err(PokedexError::SourceData(_))
        ));
        assert!(trailing_number("///").is_err());
        assert_eq!(trailing_number("pokedex/1//").unwrap(), 1);
    }
}
