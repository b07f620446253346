/// Exposes the surrogate identifier of a persisted record.
pub trait Identifiable {
    fn id(&self) -> u32;
}

/// Records carrying a monetary amount that can be aggregated.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Sums the amounts of every record yielded by `items`. An empty input sums to `0.0`.
pub fn total<'a, T, I>(items: I) -> f64
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(Amounted::amount).sum()
}
