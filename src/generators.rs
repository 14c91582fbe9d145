//! The built-in primitive generators: number, integer, string, symbol and
//! sentence.
//!
//! Each generator is a pure function of the options and the engine stream;
//! it never mutates the options and draws only from the engine it is handed,
//! which is what keeps whole-run reproducibility intact.

use crate::any::{validate_bounds, AnyError, GenerationOptions, Symbol};
use crate::engine::RandomEngine;

/// Magnitude bound for the number generator, inherited from the original
/// helper library.
pub const MAX_RAND: i64 = 50_000;

// Word pool for strings and sentences. ASCII only, so character counts and
// byte lengths agree.
const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum",
];

fn random_word(engine: &mut RandomEngine) -> &'static str {
    WORDS[engine.next_index(WORDS.len())]
}

/// Generate an arbitrary float.
///
/// The draw is a whole number of hundredths strictly inside
/// `(-MAX_RAND, MAX_RAND)`. The `positive` flag shifts the draw up by
/// `MAX_RAND`, guaranteeing a strictly positive result; `negative` shifts it
/// down, guaranteeing a strictly negative one. `positive` wins when both
/// flags are set.
pub fn any_number(engine: &mut RandomEngine, options: &GenerationOptions) -> f64 {
    let hundredths = engine.next_int_in(-(MAX_RAND * 100 - 1)..=(MAX_RAND * 100 - 1));
    let raw = hundredths as f64 / 100.0;
    if options.positive {
        raw + MAX_RAND as f64
    } else if options.negative {
        raw - MAX_RAND as f64
    } else {
        raw
    }
}

/// Generate an arbitrary integer: the number generator truncated toward zero.
pub fn any_int(engine: &mut RandomEngine, options: &GenerationOptions) -> i64 {
    any_number(engine, options).trunc() as i64
}

/// Generate an arbitrary string with length in `[min, max]`.
///
/// Bounds are validated first. When a bound is missing the effective window
/// is derived from the engine stream: with neither bound, both ends are
/// randomized from a small default window; with only `max`, `min` is a
/// random value in `[1, max]`; with only `min`, `max` is `min` plus a random
/// positive increment. The accumulated words are truncated to exactly the
/// window's upper end, and the append loop has already guaranteed at least
/// the lower end.
pub fn any_string(
    engine: &mut RandomEngine,
    options: &GenerationOptions,
) -> Result<String, AnyError> {
    validate_bounds(options.min, options.max)?;

    let (min_len, max_len) = match (options.min, options.max) {
        (Some(min), Some(max)) => (min as usize, max as usize),
        (Some(min), None) => {
            let max = min + engine.next_int_in(1..=20);
            (min as usize, max as usize)
        }
        (None, Some(max)) => {
            let min = engine.next_int_in(1..=max);
            (min as usize, max as usize)
        }
        (None, None) => {
            let min = engine.next_int_in(1..=20);
            let max = min + engine.next_int_in(0..=40);
            (min as usize, max as usize)
        }
    };

    let mut string = String::new();
    while string.chars().count() < min_len {
        string.push_str(random_word(engine));
    }
    Ok(string.chars().take(max_len).collect())
}

/// Generate a short identifier-like symbol, always 2 to 20 characters long.
pub fn any_symbol(
    engine: &mut RandomEngine,
    _options: &GenerationOptions,
) -> Result<Symbol, AnyError> {
    let window = GenerationOptions::new().with_min(2).with_max(20);
    Ok(Symbol::new(any_string(engine, &window)?))
}

/// Generate a sentence of space-joined words.
///
/// The word-count window defaults to `[11, 21]`; with only `max` the lower
/// end is 1, with only `min` the upper end is `min + 10`. The count is drawn
/// uniformly from the window.
pub fn any_sentence(
    engine: &mut RandomEngine,
    options: &GenerationOptions,
) -> Result<String, AnyError> {
    validate_bounds(options.min, options.max)?;

    let (min_words, max_words) = match (options.min, options.max) {
        (Some(min), Some(max)) => (min, max),
        (Some(min), None) => (min, min + 10),
        (None, Some(max)) => (1, max),
        (None, None) => (11, 21),
    };

    let count = engine.next_int_in(min_words..=max_words);
    let words: Vec<&str> = (0..count).map(|_| random_word(engine)).collect();
    Ok(words.join(" "))
}
