/// Reverses `input` by swapping characters from both ends towards the middle.
pub fn reverse_string(input: &str) -> String {
    let mut chars: Vec<char> = input.chars().collect();
    if chars.len() > 1 {
        let (mut i, mut j) = (0, chars.len() - 1);
        while i < j {
            chars.swap(i, j);
            i += 1;
            j -= 1;
        }
    }
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverses_ascii_and_unicode() {
        assert_eq!(reverse_string("Hello"), "olleH");
        assert_eq!(reverse_string(""), "");
        assert_eq!(reverse_string("a"), "a");
        assert_eq!(reverse_string("añb"), "bña");
    }
}
