/// Implements conversions from lists of `$item`-convertible values into the list geometry
/// `$list`, which must be a tuple struct around `Vec<$item>`.
///
/// Covers owned vectors (used by the `Geometry::new_*` constructors) and borrowed vectors and
/// arrays, so nested literals like `&[vec![[0, 0], [1, 0]], vec![...]]` convert level by level.
macro_rules! impl_from_items {
	($($list:ty => $item:ty),+ $(,)?) => {$(
		impl<T> From<Vec<T>> for $list
		where
			$item: From<T>,
		{
			fn from(items: Vec<T>) -> Self {
				Self(items.into_iter().map(<$item>::from).collect())
			}
		}

		impl<'a, T> From<&'a Vec<T>> for $list
		where
			$item: From<&'a T>,
		{
			fn from(items: &'a Vec<T>) -> Self {
				Self(items.iter().map(<$item>::from).collect())
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $list
		where
			$item: From<&'a T>,
		{
			fn from(items: &'a [T; N]) -> Self {
				Self(items.iter().map(<$item>::from).collect())
			}
		}
	)+};
}

pub(crate) use impl_from_items;
