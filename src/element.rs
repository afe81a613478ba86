//! Binding elements to loop variables declared with a value type.

/// An element as yielded by a cursor, and the value it stands for.
pub trait Element {
    type Value;

    fn into_value(self) -> Self::Value;
}

impl<T: Clone> Element for &T {
    type Value = T;

    fn into_value(self) -> T {
        self.clone()
    }
}

impl<T: Clone> Element for &mut T {
    type Value = T;

    fn into_value(self) -> T {
        T::clone(self)
    }
}

// Map entries.
impl<A: Element, B: Element> Element for (A, B) {
    type Value = (A::Value, B::Value);

    fn into_value(self) -> Self::Value {
        (self.0.into_value(), self.1.into_value())
    }
}

macro_rules! element_by_value {
    ($($ty:ty),*) => {
        $(
            impl Element for $ty {
                type Value = $ty;

                fn into_value(self) -> $ty {
                    self
                }
            }
        )*
    };
}

element_by_value!(
    u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize, f32, f64, bool, char
);

/// Conversion from an element to the type a loop variable was declared
/// with.
#[diagnostic::on_unimplemented(
    message = "a loop variable of type `{Self}` cannot bind to elements of type `{E}`",
    label = "incompatible loop variable"
)]
pub trait FromElement<E>: Sized {
    fn from_element(element: E) -> Self;
}

impl<E, T> FromElement<E> for T
where
    E: Element,
    T: From<E::Value>,
{
    fn from_element(element: E) -> T {
        T::from(element.into_value())
    }
}

/// Produces the value a loop variable of type `T` takes for `element`.
///
/// The element's value converts through `From`, so a `u8` element can bind
/// to an `i32` variable.
pub fn bind_value<T, E>(element: E) -> T
where
    T: FromElement<E>,
{
    T::from_element(element)
}
