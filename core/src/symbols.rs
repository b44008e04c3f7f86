use core::fmt;

use serde::Serialize;

use crate::ConfigError;

/// Face of a card. Two cards match when their symbols are equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Symbol(&'static str);

impl Symbol {
    pub const fn new(glyph: &'static str) -> Self {
        Self(glyph)
    }

    pub const fn glyph(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Ordered pool every deck draws its symbols from, first ones first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SymbolPool {
    symbols: &'static [Symbol],
}

impl SymbolPool {
    /// Pool without the distinctness check, for `const` contexts.
    pub(crate) const fn new_unchecked(symbols: &'static [Symbol]) -> Self {
        Self { symbols }
    }

    pub fn new(symbols: &'static [Symbol]) -> Result<Self, ConfigError> {
        let pool = Self::new_unchecked(symbols);
        pool.validate()?;
        Ok(pool)
    }

    /// Fails on an empty pool or on the first repeated symbol.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let symbols = self.symbols;
        if symbols.is_empty() {
            return Err(ConfigError::NoSymbols);
        }
        for (i, symbol) in symbols.iter().enumerate() {
            if symbols[..i].contains(symbol) {
                return Err(ConfigError::DuplicateSymbol(symbol.glyph()));
            }
        }
        Ok(())
    }

    pub const fn standard() -> Self {
        Self::new_unchecked(STANDARD_SYMBOLS)
    }

    pub const fn len(&self) -> usize {
        self.symbols.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The first `count` symbols, or `None` when the pool is too small.
    pub fn take(&self, count: usize) -> Option<&'static [Symbol]> {
        self.symbols.get(..count)
    }
}

impl Default for SymbolPool {
    fn default() -> Self {
        Self::standard()
    }
}

pub const STANDARD_SYMBOLS: &[Symbol] = &[
    Symbol("🐶"),
    Symbol("🐱"),
    Symbol("⭐"),
    Symbol("🌈"),
    Symbol("😊"),
    Symbol("💙"),
    Symbol("🍎"),
    Symbol("🚀"),
    Symbol("🍩"),
    Symbol("⚽"),
    Symbol("🎵"),
    Symbol("🌻"),
    Symbol("🐼"),
    Symbol("🍔"),
    Symbol("🎮"),
    Symbol("🎲"),
    Symbol("🦄"),
    Symbol("🍓"),
    Symbol("🎁"),
    Symbol("🔥"),
    Symbol("🌙"),
    Symbol("🍕"),
    Symbol("🛸"),
    Symbol("🎨"),
    Symbol("🦊"),
    Symbol("🐸"),
    Symbol("🐢"),
    Symbol("🦋"),
    Symbol("🍉"),
    Symbol("🎤"),
    Symbol("🍿"),
    Symbol("🧩"),
    Symbol("🏀"),
    Symbol("🎧"),
    Symbol("🍪"),
    Symbol("⚡"),
    Symbol("🐨"),
    Symbol("🦁"),
    Symbol("🐯"),
    Symbol("🐷"),
    Symbol("🐵"),
    Symbol("🐻"),
    Symbol("🐔"),
    Symbol("🐧"),
    Symbol("🐙"),
    Symbol("🐠"),
    Symbol("🦖"),
    Symbol("🦕"),
];
