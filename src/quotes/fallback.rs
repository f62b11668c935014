use rand::seq::IndexedRandom;

use crate::models::Quote;

/// Last-resort quotes served when neither the provider nor the cache can.
/// Kept short on purpose; this tier only exists so the endpoint never
/// returns an error.
const FALLBACK_QUOTES: &[(&str, &str)] = &[
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    (
        "It does not matter how slowly you go as long as you do not stop.",
        "Confucius",
    ),
    (
        "In the middle of difficulty lies opportunity.",
        "Albert Einstein",
    ),
    (
        "Happiness is not something ready made. It comes from your own actions.",
        "Dalai Lama",
    ),
    (
        "The journey of a thousand miles begins with one step.",
        "Lao Tzu",
    ),
    (
        "What we think, we become.",
        "Buddha",
    ),
    (
        "Life is what happens when you're busy making other plans.",
        "John Lennon",
    ),
    (
        "The unexamined life is not worth living.",
        "Socrates",
    ),
    (
        "Turn your wounds into wisdom.",
        "Oprah Winfrey",
    ),
    (
        "Do what you can, with what you have, where you are.",
        "Theodore Roosevelt",
    ),
];

/// Uniformly random entry from the static table
pub fn random_fallback() -> Quote {
    let (quote, author) = FALLBACK_QUOTES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(FALLBACK_QUOTES[0]);
    Quote::new(quote, author)
}
