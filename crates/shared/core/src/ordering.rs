//! Book priority for quotes
//!
//! A book is ranked by:
//! 1. Lowest price first
//! 2. At equal price, the larger available volume first
//! 3. At equal price and volume, ascending quote id
//!
//! The id tie-break keeps two distinct quotes with identical price and
//! volume from collapsing into one entry of an ordered set.

use std::cmp::{Ordering, Reverse};

use crate::entities::Quote;
use crate::values::{Price, QuoteId, Volume};

/// Compare two quotes by book priority
///
/// `Ordering::Less` means `a` ranks ahead of `b`. Quotes sharing an id are
/// the same stored record and always compare equal.
pub fn compare_quotes(a: &Quote, b: &Quote) -> Ordering {
    if a.id == b.id {
        return Ordering::Equal;
    }
    QuoteKey::of(a).cmp(&QuoteKey::of(b))
}

fn compare_prices(a: Price, b: Price) -> Ordering {
    // NaN never reaches a book, total_cmp only keeps this a total order
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// Ordered-set key snapshotting the ranking fields of a stored quote
///
/// Whenever the quote's price or volume changes, the old key must be
/// removed from its book and a fresh one inserted.
#[derive(Debug, Clone, Copy)]
pub struct QuoteKey {
    pub price: Price,
    pub available_volume: Volume,
    pub id: QuoteId,
}

impl QuoteKey {
    pub fn of(quote: &Quote) -> Self {
        Self {
            price: quote.price,
            available_volume: quote.available_volume,
            id: quote.id,
        }
    }
}

impl Ord for QuoteKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_prices(self.price, other.price)
            .then_with(|| Reverse(self.available_volume).cmp(&Reverse(other.available_volume)))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for QuoteKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QuoteKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QuoteKey {}
