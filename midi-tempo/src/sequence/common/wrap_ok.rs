/// Wraps each item `T` into `Result<T, Err>`
///
/// Useful because all built in functions use Result as the item type for error handling.
/// The error type is picked by whatever consumes the iterator.
pub fn wrap_ok<T, Err, I: Iterator<Item = T> + Sized>(
    iter: I,
) -> impl Iterator<Item = Result<T, Err>> {
    iter.map(|v| Ok(v))
}
