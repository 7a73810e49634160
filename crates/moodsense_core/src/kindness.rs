//! crates/moodsense_core/src/kindness.rs
//!
//! "Cheer me up": a random kind quote paired with a random cute GIF.

use rand::Rng;

pub const KIND_QUOTES: [&str; 5] = [
    "You are stronger than you think 💪",
    "This too shall pass ☀️",
    "You matter. Always. 💖",
    "You're doing the best you can, and that's enough 🌿",
    "A smile looks good on you 😊",
];

pub const CHEER_GIFS: [&str; 3] = [
    "https://media.giphy.com/media/JIX9t2j0ZTN9S/giphy.gif",
    "https://media.giphy.com/media/3oriO0OEd9QIDdllqo/giphy.gif",
    "https://media.giphy.com/media/BzyTuYCmvSORqs1ABM/giphy.gif",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheerUp {
    pub quote: &'static str,
    pub gif_url: &'static str,
}

/// Picks a quote and a GIF independently and uniformly.
pub fn cheer_up<R: Rng>(rng: &mut R) -> CheerUp {
    CheerUp {
        quote: KIND_QUOTES[rng.random_range(0..KIND_QUOTES.len())],
        gif_url: CHEER_GIFS[rng.random_range(0..CHEER_GIFS.len())],
    }
}
