//! Text cleaning
//!
//! Lower-cases text and deletes punctuation, symbols and digits. Deleted
//! characters are not replaced by spaces, so "state-of-the-art" becomes one
//! token. Runs of whitespace collapse to a single space.

/// Lower-case and strip everything but letters, collapsing whitespace
pub fn clean_text(text: &str) -> String {
    let letters: String = text
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    let mut cleaned = String::with_capacity(letters.len());
    for word in letters.split_whitespace() {
        if !cleaned.is_empty() {
            cleaned.push(' ');
        }
        cleaned.push_str(word);
    }
    cleaned
}
