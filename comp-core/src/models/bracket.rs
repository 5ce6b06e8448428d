use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by a malformed bracket table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    /// The table has no tiers at all.
    #[error("bracket table is empty")]
    Empty,

    /// A tier's cap is not strictly greater than the cap before it.
    #[error("tier {index} cap {cap} is not above the previous cap {previous}")]
    NotAscending { index: usize, cap: i64, previous: i64 },

    /// A tier follows the unbounded tier.
    #[error("tier {index} follows the unbounded tier")]
    TierAfterUnbounded { index: usize },

    /// The last tier has a cap, so large values would fall off the table.
    #[error("last tier must be unbounded, found cap {0}")]
    MissingUnboundedTier(i64),

    /// No tier matched the value.
    #[error("no tier found for value {0}")]
    NoMatchingTier(i64),
}

/// One row of a progressive table.
///
/// A tier covers every value up to and including `cap`; `None` is unbounded.
/// Its value for an amount `v` is `v × rate + adjustment`. The adjustment is
/// signed: a statutory "subtract 97,500" is stored as `-97_500`, and a flat
/// amount tier is `rate = 0` with the amount as the adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketTier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cap: Option<i64>,
    pub rate: Decimal,
    #[serde(default)]
    pub adjustment: i64,
}

impl BracketTier {
    /// A tier paying a flat amount regardless of the value.
    pub fn flat(
        cap: Option<i64>,
        amount: i64,
    ) -> Self {
        Self {
            cap,
            rate: Decimal::ZERO,
            adjustment: amount,
        }
    }

    /// Whether `value` falls at or below this tier's cap.
    pub fn contains(
        &self,
        value: i64,
    ) -> bool {
        self.cap.is_none_or(|cap| value <= cap)
    }

    /// `value × rate + adjustment`, unrounded.
    pub fn apply(
        &self,
        value: i64,
    ) -> Decimal {
        Decimal::from(value) * self.rate + Decimal::from(self.adjustment)
    }
}

/// Returns the first tier whose cap is at or above `value`.
///
/// Fails only when the slice itself is malformed. The ordering is checked
/// on every call; repeated lookups on the same tiers should build a
/// [`BracketTable`] once and use [`BracketTable::find`].
///
/// ```
/// use rust_decimal_macros::dec;
/// use comp_core::{BracketTier, find_tier};
///
/// let tiers = vec![
///     BracketTier { cap: Some(1_949_999), rate: dec!(0.05), adjustment: 0 },
///     BracketTier { cap: None, rate: dec!(0.10), adjustment: -97_500 },
/// ];
///
/// assert_eq!(find_tier(&tiers, 1_949_999).unwrap().rate, dec!(0.05));
/// assert_eq!(find_tier(&tiers, 1_950_000).unwrap().rate, dec!(0.10));
/// ```
pub fn find_tier(
    tiers: &[BracketTier],
    value: i64,
) -> Result<&BracketTier, BracketTableError> {
    check_ordering(tiers)?;
    tiers
        .iter()
        .find(|tier| tier.contains(value))
        .ok_or(BracketTableError::NoMatchingTier(value))
}

fn check_ordering(tiers: &[BracketTier]) -> Result<(), BracketTableError> {
    if tiers.is_empty() {
        return Err(BracketTableError::Empty);
    }

    let mut previous: Option<i64> = None;
    let mut seen_unbounded = false;
    for (index, tier) in tiers.iter().enumerate() {
        if seen_unbounded {
            return Err(BracketTableError::TierAfterUnbounded { index });
        }
        match (tier.cap, previous) {
            (Some(cap), Some(prev)) if cap <= prev => {
                return Err(BracketTableError::NotAscending {
                    index,
                    cap,
                    previous: prev,
                });
            }
            (Some(cap), _) => previous = Some(cap),
            (None, _) => seen_unbounded = true,
        }
    }
    Ok(())
}

/// A validated bracket table that partitions every value.
///
/// Holding a `BracketTable` guarantees the tiers are ascending and the last
/// one is unbounded, so [`BracketTable::find`] cannot miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BracketTier>", into = "Vec<BracketTier>")]
pub struct BracketTable {
    bounded: Vec<BracketTier>,
    top: BracketTier,
}

impl BracketTable {
    /// Validates `tiers` and builds the table.
    ///
    /// # Errors
    ///
    /// Returns [`BracketTableError`] if the tiers are empty, out of order,
    /// or do not end with an unbounded tier.
    pub fn new(mut tiers: Vec<BracketTier>) -> Result<Self, BracketTableError> {
        check_ordering(&tiers)?;

        let top = tiers.pop().ok_or(BracketTableError::Empty)?;
        if let Some(cap) = top.cap {
            return Err(BracketTableError::MissingUnboundedTier(cap));
        }

        Ok(Self {
            bounded: tiers,
            top,
        })
    }

    /// Infallible lookup: the first tier whose cap is at or above `value`.
    pub fn find(
        &self,
        value: i64,
    ) -> &BracketTier {
        self.bounded
            .iter()
            .find(|tier| tier.contains(value))
            .unwrap_or(&self.top)
    }

    /// Iterates the tiers in ascending cap order, unbounded tier last.
    pub fn tiers(&self) -> impl Iterator<Item = &BracketTier> {
        self.bounded.iter().chain(std::iter::once(&self.top))
    }

    pub fn len(&self) -> usize {
        self.bounded.len() + 1
    }

    /// Always false; a valid table holds at least the unbounded tier.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl TryFrom<Vec<BracketTier>> for BracketTable {
    type Error = BracketTableError;

    fn try_from(tiers: Vec<BracketTier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<BracketTable> for Vec<BracketTier> {
    fn from(table: BracketTable) -> Self {
        let mut tiers = table.bounded;
        tiers.push(table.top);
        tiers
    }
}
