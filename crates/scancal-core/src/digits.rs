/// Keeps only the ASCII decimal digits of `text`, in order.
pub fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation() {
        assert_eq!(digits_only("(62) 9 9844-8536"), "62998448536");
        assert_eq!(digits_only("111.444.777-35"), "11144477735");
    }

    #[test]
    fn empty_and_digitless_input() {
        assert_eq!(digits_only(""), "");
        assert_eq!(digits_only("abc-()"), "");
    }

    #[test]
    fn ignores_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII
        assert_eq!(digits_only("1٢3"), "13");
    }
}
