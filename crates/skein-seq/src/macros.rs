//! Named sequence declarations.

/// Declare a named sequence type for one element type.
///
/// Expands to a type alias over [`Sequence`](crate::Sequence) whose backend
/// defaults to [`Heap`](skein_store::Heap) and can be overridden, plus a
/// compile-time check that the element type is an
/// [`Element`](skein_core::Element). Any number of declarations coexist.
///
/// ```
/// use skein_core::Position;
/// use skein_seq::declare_sequence;
/// use skein_store::Fixed;
///
/// declare_sequence!(
///     /// Sample ids.
///     pub Ids, u32
/// );
/// declare_sequence!(Weights, f32);
///
/// let mut ids: Ids = Ids::open_heap(4).unwrap();
/// ids.fill(Position::At(0), Position::At(4), 9).unwrap();
/// assert_eq!(ids.get(3), Ok(9));
///
/// let weights = Weights::<Fixed<f32, 2>>::from([0.5, 1.5]);
/// assert_eq!(weights.get(1), Ok(1.5));
/// ```
///
/// A non-[`Element`](skein_core::Element) type is rejected:
///
/// ```compile_fail
/// skein_seq::declare_sequence!(Names, String);
/// ```
#[macro_export]
macro_rules! declare_sequence {
    ($(#[$meta:meta])* $vis:vis $name:ident, $elem:ty $(,)?) => {
        $(#[$meta])*
        $vis type $name<S = $crate::__private::Heap<$elem>> = $crate::Sequence<$elem, S>;

        const _: () = {
            fn assert_element<E: $crate::__private::Element>() {}
            let _ = assert_element::<$elem>;
        };
    };
}
