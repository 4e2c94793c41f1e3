//! Facet derivation

use std::collections::BTreeSet;

use shared::Restaurant;

/// Distinct delivery times of `restaurants`, ascending
pub fn delivery_time_facet<'a, I>(restaurants: I) -> Vec<u32>
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    restaurants
        .into_iter()
        .map(|r| r.delivery_time_minutes)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
