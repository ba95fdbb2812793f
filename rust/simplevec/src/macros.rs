/// Creates a [`SimpleVector`](crate::SimpleVector) from a list of elements,
/// with capacity equal to the number of elements.
///
/// ```
/// use simplevec::simple_vector;
///
/// let v = simple_vector![1, 2, 3];
/// assert_eq!((v.len(), v.capacity()), (3, 3));
///
/// let w = simple_vector!["x"; 2];
/// assert_eq!(w, ["x", "x"]);
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::SimpleVector::from_value($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($x),+])
    };
}
