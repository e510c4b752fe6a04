/// Create a [`GrowableArray`](crate::GrowableArray) from a list of elements.
///
/// The list form allocates exactly as many slots as there are elements.
///
/// ```
/// use rkvec::growable;
///
/// let array = growable![1, 2, 3];
/// assert_eq!(array, [1, 2, 3]);
/// assert_eq!(array.capacity(), 3);
///
/// let zeros = growable![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
///
/// let empty: rkvec::GrowableArray<u8> = growable![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! growable {
    () => {
        $crate::GrowableArray::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut array = $crate::GrowableArray::new();
        array.resize($n, $elem);
        array
    }};
    ($($x:expr),+ $(,)?) => {
        $crate::GrowableArray::from([$($x),+])
    };
}
