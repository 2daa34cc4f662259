/// Returns the index and the value of the first maximum of `values`, or
/// [`None`] if `values` is empty.
///
/// # Examples
/// ```
/// # use dense_diameter::utils::math::argmax;
/// assert_eq!(argmax(&[3, 9, 1, 9]), Some((1, 9)));
/// assert_eq!(argmax::<i64>(&[]), None);
/// ```
pub fn argmax<T: PartialOrd + Copy>(values: &[T]) -> Option<(usize, T)> {
    let (&first, rest) = values.split_first()?;
    Some(
        rest.iter()
            .zip(1..)
            .fold((0, first), |(best, max), (&value, index)| {
                if value > max {
                    (index, value)
                } else {
                    (best, max)
                }
            }),
    )
}
