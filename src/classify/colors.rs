//! Color identity detection.
//!
//! Maps card names to color identities via an externally supplied lookup
//! table, aggregates per-color card counts over a deck's mainboard, and
//! names the resulting color signature canonically (guild and shard/wedge
//! names).
//!
//! A color counts as present when its summed mainboard count reaches
//! `max(color_floor, ceil(color_fraction * mainboard_size))`; both knobs
//! live in [`AnalysisConfig`](crate::config::AnalysisConfig). Cards absent
//! from the lookup table contribute zero to every color; that is a
//! data-quality signal for the collection collaborator, not an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::core::deck::Deck;

#[derive(Error, Debug)]
pub enum ColorError {
    #[error("Failed to read color lookup: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse color lookup: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Unknown color symbol '{symbol}' for card '{card}'")]
    UnknownSymbol { card: String, symbol: char },
}

/// One of the five color symbols, in canonical WUBRG order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorSymbol {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl ColorSymbol {
    pub const ALL: [ColorSymbol; 5] = [
        Self::White,
        Self::Blue,
        Self::Black,
        Self::Red,
        Self::Green,
    ];

    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::White => 'W',
            Self::Blue => 'U',
            Self::Black => 'B',
            Self::Red => 'R',
            Self::Green => 'G',
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::White => 1,
            Self::Blue => 1 << 1,
            Self::Black => 1 << 2,
            Self::Red => 1 << 3,
            Self::Green => 1 << 4,
        }
    }
}

/// A subset of the five color symbols, stored as a 5-bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ColorSet(u8);

impl ColorSet {
    pub const COLORLESS: ColorSet = ColorSet(0);

    /// Parse a symbol string like "WU" or "rg" (case-insensitive)
    pub fn parse(s: &str) -> Result<Self, char> {
        let mut set = Self::COLORLESS;
        for c in s.chars() {
            let symbol = match c.to_ascii_uppercase() {
                'W' => ColorSymbol::White,
                'U' => ColorSymbol::Blue,
                'B' => ColorSymbol::Black,
                'R' => ColorSymbol::Red,
                'G' => ColorSymbol::Green,
                other => return Err(other),
            };
            set.insert(symbol);
        }
        Ok(set)
    }

    pub fn insert(&mut self, symbol: ColorSymbol) {
        self.0 |= symbol.bit();
    }

    #[must_use]
    pub fn contains(self, symbol: ColorSymbol) -> bool {
        self.0 & symbol.bit() != 0
    }

    /// Number of colors in the set (0-5)
    #[must_use]
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Canonical name for this color combination
    ///
    /// Empty sets are "Colorless"; single colors use the basic color name;
    /// pairs use the ten guild names; triples the ten shard/wedge names;
    /// anything wider a fixed catch-all.
    #[must_use]
    pub fn canonical_name(self) -> &'static str {
        use ColorSymbol::{Black, Blue, Green, Red, White};

        const fn mask(symbols: &[ColorSymbol]) -> u8 {
            let mut bits = 0;
            let mut i = 0;
            while i < symbols.len() {
                bits |= symbols[i].bit();
                i += 1;
            }
            bits
        }

        match self.len() {
            0 => "Colorless",
            1 | 2 | 3 => {
                let m = self.0;
                if m == mask(&[White]) {
                    "White"
                } else if m == mask(&[Blue]) {
                    "Blue"
                } else if m == mask(&[Black]) {
                    "Black"
                } else if m == mask(&[Red]) {
                    "Red"
                } else if m == mask(&[Green]) {
                    "Green"
                } else if m == mask(&[White, Blue]) {
                    "Azorius"
                } else if m == mask(&[Blue, Black]) {
                    "Dimir"
                } else if m == mask(&[Black, Red]) {
                    "Rakdos"
                } else if m == mask(&[Red, Green]) {
                    "Gruul"
                } else if m == mask(&[Green, White]) {
                    "Selesnya"
                } else if m == mask(&[White, Black]) {
                    "Orzhov"
                } else if m == mask(&[Blue, Red]) {
                    "Izzet"
                } else if m == mask(&[Black, Green]) {
                    "Golgari"
                } else if m == mask(&[Red, White]) {
                    "Boros"
                } else if m == mask(&[Green, Blue]) {
                    "Simic"
                } else if m == mask(&[White, Blue, Black]) {
                    "Esper"
                } else if m == mask(&[Blue, Black, Red]) {
                    "Grixis"
                } else if m == mask(&[Black, Red, Green]) {
                    "Jund"
                } else if m == mask(&[Red, Green, White]) {
                    "Naya"
                } else if m == mask(&[Green, White, Blue]) {
                    "Bant"
                } else if m == mask(&[White, Black, Green]) {
                    "Abzan"
                } else if m == mask(&[Blue, Red, White]) {
                    "Jeskai"
                } else if m == mask(&[Black, Green, Blue]) {
                    "Sultai"
                } else if m == mask(&[Red, White, Black]) {
                    "Mardu"
                } else {
                    // The only remaining triple: GUR
                    "Temur"
                }
            }
            4 => "Four-Color",
            _ => "Five-Color",
        }
    }
}

impl std::fmt::Display for ColorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "C");
        }
        for symbol in ColorSymbol::ALL {
            if self.contains(symbol) {
                write!(f, "{}", symbol.letter())?;
            }
        }
        Ok(())
    }
}

/// Card name -> color identity lookup table
///
/// Loaded once per run, read-only afterwards. Real tables carry tens of
/// thousands of entries; an empty table is legal and makes every deck
/// colorless.
#[derive(Debug, Default)]
pub struct ColorLookup {
    identities: HashMap<String, ColorSet>,
}

impl ColorLookup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON object mapping card names to symbol strings,
    /// e.g. `{"Lightning Bolt": "R", "Sphinx's Revelation": "WU"}`
    pub fn from_json(json: &str) -> Result<Self, ColorError> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        let mut identities = HashMap::with_capacity(raw.len());
        for (card, symbols) in raw {
            let set = ColorSet::parse(&symbols)
                .map_err(|symbol| ColorError::UnknownSymbol {
                    card: card.clone(),
                    symbol,
                })?;
            identities.insert(card, set);
        }
        Ok(Self { identities })
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ColorError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn insert(&mut self, card: impl Into<String>, colors: ColorSet) {
        self.identities.insert(card.into(), colors);
    }

    #[must_use]
    pub fn get(&self, card: &str) -> Option<ColorSet> {
        self.identities.get(card).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// Detect a deck's color identity from its mainboard
    ///
    /// Sums, per color, the counts of cards whose identity includes that
    /// color; a color is present when its sum reaches the scaled threshold
    /// (see module docs). Unknown cards contribute nothing.
    #[must_use]
    pub fn detect(&self, deck: &Deck, config: &AnalysisConfig) -> ColorSet {
        let mut counts = [0u32; 5];
        let mut unknown = 0usize;

        for card in &deck.mainboard {
            match self.get(&card.name) {
                Some(identity) => {
                    for (slot, symbol) in ColorSymbol::ALL.iter().enumerate() {
                        if identity.contains(*symbol) {
                            counts[slot] += card.count;
                        }
                    }
                }
                None => unknown += 1,
            }
        }

        if unknown > 0 && !self.is_empty() {
            debug!(unknown, "cards missing from color lookup");
        }

        let scaled = (config.color_fraction * f64::from(deck.mainboard_size())).ceil();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let threshold = config.color_floor.max(scaled as u32);

        let mut set = ColorSet::COLORLESS;
        for (slot, symbol) in ColorSymbol::ALL.iter().enumerate() {
            if counts[slot] >= threshold {
                set.insert(*symbol);
            }
        }
        set
    }
}
