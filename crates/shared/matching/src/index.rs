use std::collections::btree_set;
use std::collections::{BTreeSet, HashMap};

use log::debug;
use quoter_core::{Quote, QuoteId, QuoteKey, Symbol, Volume};

/// Owner of every stored quote
///
/// Keeps two views consistent:
/// - `quotes`: lookup by id, holds the records
/// - `books`: per-symbol set of keys in book priority order
///
/// Every id in `quotes` has exactly one key, in the book named by the
/// quote's current symbol, and that key reflects the quote's current price
/// and volume.
#[derive(Debug, Default)]
pub struct QuoteIndex {
    quotes: HashMap<QuoteId, Quote>,
    books: HashMap<Symbol, BTreeSet<QuoteKey>>,
}

impl QuoteIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new quote, or update the stored quote with the same id
    ///
    /// An update rewrites price, volume and expiration on the stored record
    /// and moves it to the book of the incoming symbol if that changed.
    pub fn add_or_update(&mut self, quote: Quote) {
        let Some(stored) = self.quotes.get_mut(&quote.id) else {
            debug!(
                "Adding quote {} to {}: price={}, volume={}",
                quote.id, quote.symbol, quote.price, quote.available_volume
            );
            self.books
                .entry(quote.symbol.clone())
                .or_default()
                .insert(QuoteKey::of(&quote));
            self.quotes.insert(quote.id, quote);
            return;
        };

        if let Some(book) = self.books.get_mut(&stored.symbol) {
            book.remove(&QuoteKey::of(stored));
        }

        stored.price = quote.price;
        stored.available_volume = quote.available_volume;
        stored.expiration_date = quote.expiration_date;

        if stored.symbol != quote.symbol {
            debug!(
                "Moving quote {} from {} to {}",
                stored.id, stored.symbol, quote.symbol
            );
            stored.symbol = quote.symbol;
        } else {
            debug!(
                "Updating quote {} in {}: price={}, volume={}",
                stored.id, stored.symbol, stored.price, stored.available_volume
            );
        }

        self.books
            .entry(stored.symbol.clone())
            .or_default()
            .insert(QuoteKey::of(stored));
    }

    /// Remove a quote by id
    ///
    /// Returns false if the id is unknown.
    pub fn remove(&mut self, id: &QuoteId) -> bool {
        let Some(quote) = self.quotes.remove(id) else {
            return false;
        };

        if let Some(book) = self.books.get_mut(&quote.symbol) {
            book.remove(&QuoteKey::of(&quote));
        }
        debug!("Removed quote {} from {}", quote.id, quote.symbol);
        true
    }

    /// Remove a symbol's book and every quote in it
    ///
    /// Returns true whenever the book exists, even if it is empty.
    pub fn remove_book(&mut self, symbol: &str) -> bool {
        let Some(book) = self.books.remove(symbol) else {
            return false;
        };

        for key in &book {
            self.quotes.remove(&key.id);
        }
        debug!("Removed book {} with {} quotes", symbol, book.len());
        true
    }

    /// Look up a stored quote by id
    pub fn get(&self, id: &QuoteId) -> Option<&Quote> {
        self.quotes.get(id)
    }

    pub fn contains(&self, id: &QuoteId) -> bool {
        self.quotes.contains_key(id)
    }

    /// Quotes of one symbol, best first
    ///
    /// An unknown symbol yields an empty iterator.
    pub fn ordered(&self, symbol: &str) -> BookIter<'_> {
        BookIter {
            keys: self.books.get(symbol).map(|book| book.iter()),
            quotes: &self.quotes,
        }
    }

    /// Take up to `volume` from a stored quote's available volume
    ///
    /// Returns the amount actually taken, or `None` for an unknown id.
    pub fn consume(&mut self, id: &QuoteId, volume: Volume) -> Option<Volume> {
        let stored = self.quotes.get_mut(id)?;
        let taken = volume.min(stored.available_volume);
        if taken == 0 {
            return Some(0);
        }

        let old_key = QuoteKey::of(stored);
        stored.available_volume -= taken;

        // Volume is part of the book priority, so the key must be re-seated
        if let Some(book) = self.books.get_mut(&stored.symbol) {
            book.remove(&old_key);
            book.insert(QuoteKey::of(stored));
        }
        Some(taken)
    }

    /// Total number of stored quotes
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Number of quotes in a symbol's book (0 for unknown symbols)
    pub fn book_len(&self, symbol: &str) -> usize {
        self.books.get(symbol).map_or(0, BTreeSet::len)
    }

    pub fn has_book(&self, symbol: &str) -> bool {
        self.books.contains_key(symbol)
    }

    /// Symbols that currently have a book, including empty ones
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.books.keys().map(String::as_str)
    }
}

/// Borrowing iterator over one book in priority order
pub struct BookIter<'a> {
    keys: Option<btree_set::Iter<'a, QuoteKey>>,
    quotes: &'a HashMap<QuoteId, Quote>,
}

impl<'a> Iterator for BookIter<'a> {
    type Item = &'a Quote;

    fn next(&mut self) -> Option<&'a Quote> {
        let quotes = self.quotes;
        self.keys.as_mut()?.find_map(|key| quotes.get(&key.id))
    }
}
