/// Return the text content of the provided HTML, dropping anything inside tags
///
/// Falls back to the raw input when stripping leaves nothing, so tag-only
/// submissions still reach the tokenizer.
pub fn html_to_text(review: &str) -> String {
    let mut text = String::with_capacity(review.len());
    let mut in_tag = false;

    for c in review.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }

    if text.trim().is_empty() {
        review.to_string()
    } else {
        text
    }
}

/// Replace everything but ASCII letters with spaces
pub fn letters_only(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_alphabetic() { c } else { ' ' })
        .collect()
}

/// Text normalization applied before tokenizing a review
pub fn normalize(review: &str) -> String {
    letters_only(&html_to_text(review)).to_lowercase()
}
