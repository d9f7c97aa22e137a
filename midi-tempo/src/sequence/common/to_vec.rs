/// Converts a result iterator into a vector result.
///
/// Stops at the first error.
pub fn to_vec_result<T, Err, I: Iterator<Item = Result<T, Err>> + Sized>(
    iter: I,
) -> Result<Vec<T>, Err> {
    iter.collect()
}
