/// Case-insensitive palindrome check over ASCII letters and digits only.
///
/// `"A man, a plan, a canal: Panama"` counts as a palindrome. Every other
/// character, non-ASCII letters included, is skipped.
pub fn is_palindrome(input: &str) -> bool {
    let cleaned: Vec<char> = input
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if cleaned.is_empty() {
        return true;
    }

    let (mut left, mut right) = (0, cleaned.len() - 1);
    while left < right {
        if cleaned[left] != cleaned[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }
    true
}

/// Character-for-character comparison against the reversed input.
pub fn is_exact_palindrome(input: &str) -> bool {
    input.chars().eq(input.chars().rev())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalised_check() {
        assert!(is_palindrome("madam"));
        assert!(is_palindrome("A man, a plan, a canal: Panama"));
        assert!(!is_palindrome("race a car"));
        assert!(is_palindrome(""));
        assert!(is_palindrome("!!"));
    }

    #[test]
    fn non_ascii_letters_are_skipped() {
        assert!(is_palindrome("a\u{e9}ba"));
        assert!(is_palindrome("\u{3b1}\u{3b2}"));
        assert!(!is_exact_palindrome("a\u{e9}ba"));
    }

    #[test]
    fn exact_check_respects_case_and_punctuation() {
        assert!(is_exact_palindrome("madam"));
        assert!(!is_exact_palindrome("Madam"));
        assert!(!is_exact_palindrome("a,a "));
    }
}
