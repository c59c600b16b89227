use std::str::FromStr;

use super::InvalidOrder;

/// The direction used by [`OrderedCollection::sorted`](super::OrderedCollection::sorted).
///
/// Parsing accepts the short names `"min"` and `"max"` as well as the spelled out variants.
///
/// # Examples
/// ```
/// # use core_list::collections::contiguous::SortOrder;
/// assert_eq!("min".parse::<SortOrder>(), Ok(SortOrder::Ascending));
/// assert_eq!("descending".parse::<SortOrder>(), Ok(SortOrder::Descending));
/// assert!("sideways".parse::<SortOrder>().is_err());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first, produced by reversing the ascending order.
    Descending,
}

impl FromStr for SortOrder {
    type Err = InvalidOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" | "asc" | "ascending" => Ok(SortOrder::Ascending),
            "max" | "desc" | "descending" => Ok(SortOrder::Descending),
            other => Err(InvalidOrder {
                name: other.to_owned(),
            }),
        }
    }
}
