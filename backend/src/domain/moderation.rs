//! Chirp content moderation.
//!
//! Moderation is a whole-token, case-insensitive denylist filter. The input
//! is split on single spaces; each token equal (ignoring case) to a denylisted
//! word is replaced by [`PROFANITY_MASK`] and the tokens are re-joined with
//! single spaces. Substrings are never masked, so `kerfuffled` survives while
//! `Kerfuffle` does not. Runs of spaces survive unchanged because splitting on
//! a single space keeps the empty tokens between them.

/// Words masked by [`moderate`].
pub const PROFANITY_DENYLIST: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Replacement for a masked token.
pub const PROFANITY_MASK: &str = "****";

/// Mask denylisted words in `text`.
///
/// # Examples
/// ```
/// use chirpy::domain::moderation::moderate;
///
/// assert_eq!(
///     moderate("This is a kerfuffle opinion I need to share"),
///     "This is a **** opinion I need to share",
/// );
/// assert_eq!(moderate("Sharbert! stays"), "Sharbert! stays");
/// ```
#[must_use]
pub fn moderate(text: &str) -> String {
    text.split(' ')
        .map(|token| {
            if is_denylisted(token) {
                PROFANITY_MASK
            } else {
                token
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_denylisted(token: &str) -> bool {
    let lowered = token.to_lowercase();
    PROFANITY_DENYLIST.contains(&lowered.as_str())
}
