/// Casing rules applied when rewriting address text
///
/// Standardized output must not depend on the process locale, so providers
/// take the policy as a value instead of reading ambient culture settings.
pub trait CasingPolicy: Send + Sync {
    /// Uppercase the first character of every whitespace-separated word,
    /// lowercase the rest
    fn title_case(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut at_word_start = true;

        for c in text.chars() {
            if c.is_whitespace() {
                at_word_start = true;
                out.push(c);
            } else if at_word_start {
                out.extend(c.to_uppercase());
                at_word_start = false;
            } else {
                out.extend(c.to_lowercase());
            }
        }

        out
    }
}

pub struct DefaultCasing;
impl CasingPolicy for DefaultCasing {}
