use itertools::Itertools;

/// Uppercases the first character of every whitespace-separated word.
/// Splitting is Unicode-aware, and so is the uppercasing (a first char may
/// expand to several, e.g. ß).
pub fn capitalize(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .join(" ")
}
