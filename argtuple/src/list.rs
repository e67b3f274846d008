/*!
Fixed, ordered lists of descriptors.

A parser is built from a tuple of descriptors, like
`(arg::<String>("name", 'n', ""), flag("verbose", 'v', ""))`. The tuple's
order is the declaration order, and [`ArgumentList::values`] resolves it into
a tuple of the same shape, `(String, bool)`.
*/

use crate::option::{Argument, Descriptor};

/**
A fixed list of descriptors, with positional access through the
non-generic [`Argument`] interface and typed access to the final values.

This is implemented for tuples of up to 12 [`Descriptor`]s. There's rarely a
reason to implement it manually.
*/
pub trait ArgumentList {
    /// The resolved values, in declaration order
    type Values;

    /// The number of descriptors in the list
    const LEN: usize;

    fn get(&self, index: usize) -> Option<&dyn Argument>;

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Argument>;

    /// Resolve every descriptor into its final value
    fn values(&self) -> Self::Values;

    /// All descriptors, in declaration order
    fn arguments(&self) -> impl Iterator<Item = &dyn Argument> {
        (0..Self::LEN).filter_map(move |index| self.get(index))
    }
}

impl ArgumentList for () {
    type Values = ();

    const LEN: usize = 0;

    #[inline]
    fn get(&self, _index: usize) -> Option<&dyn Argument> {
        None
    }

    #[inline]
    fn get_mut(&mut self, _index: usize) -> Option<&mut dyn Argument> {
        None
    }

    #[inline]
    fn values(&self) -> Self::Values {}
}

macro_rules! tuple_lists {
    ($(
        $len:literal => ($($index:tt $name:ident)+)
    )*) => {
        $(
            impl<$($name,)+> ArgumentList for ($($name,)+)
            where
                $($name: Descriptor,)+
            {
                type Values = ($(<$name as Descriptor>::Value,)+);

                const LEN: usize = $len;

                fn get(&self, index: usize) -> Option<&dyn Argument> {
                    match index {
                        $($index => Some(&self.$index as &dyn Argument),)+
                        _ => None,
                    }
                }

                fn get_mut(&mut self, index: usize) -> Option<&mut dyn Argument> {
                    match index {
                        $($index => Some(&mut self.$index as &mut dyn Argument),)+
                        _ => None,
                    }
                }

                fn values(&self) -> Self::Values {
                    ($(self.$index.resolve(),)+)
                }
            }
        )*
    };
}

tuple_lists! {
    1 => (0 A)
    2 => (0 A 1 B)
    3 => (0 A 1 B 2 C)
    4 => (0 A 1 B 2 C 3 D)
    5 => (0 A 1 B 2 C 3 D 4 E)
    6 => (0 A 1 B 2 C 3 D 4 E 5 F)
    7 => (0 A 1 B 2 C 3 D 4 E 5 F 6 G)
    8 => (0 A 1 B 2 C 3 D 4 E 5 F 6 G 7 H)
    9 => (0 A 1 B 2 C 3 D 4 E 5 F 6 G 7 H 8 I)
    10 => (0 A 1 B 2 C 3 D 4 E 5 F 6 G 7 H 8 I 9 J)
    11 => (0 A 1 B 2 C 3 D 4 E 5 F 6 G 7 H 8 I 9 J 10 K)
    12 => (0 A 1 B 2 C 3 D 4 E 5 F 6 G 7 H 8 I 9 J 10 K 11 L)
}

/**
A type that declares its own options, and can be built from their resolved
values. Usually derived with [`#[derive(Declare)]`][macro@crate::Declare] on a
struct, where each field becomes one option in field order.
*/
pub trait Declare: Sized {
    type Arguments: ArgumentList;

    /// Create a fresh set of descriptors for this type
    fn declare() -> Self::Arguments;

    /// Build `Self` from the resolved values
    fn from_values(values: <Self::Arguments as ArgumentList>::Values) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{arg, convert::Conversion, flag};

    #[test]
    fn values_follow_declaration_order() {
        let mut list = (
            arg::<String>("name", 'n', ""),
            flag("verbose", 'v', ""),
            arg::<i32>("level", '\0', ""),
        );

        list.get_mut(2)
            .unwrap()
            .assign("-3", Conversion::Strict)
            .unwrap();
        list.get_mut(1).unwrap().store_true();

        assert_eq!(list.values(), (String::new(), true, -3));
    }

    #[test]
    fn indexed_access() {
        let list = (arg::<u8>("a", 'a', ""), flag("b", '\0', ""));

        let names: Vec<&str> = list.arguments().map(|argument| argument.name()).collect();
        assert_eq!(names, ["a", "b"]);
        assert!(list.get(2).is_none());
        assert_eq!(<(crate::ValueOption<u8>, crate::FlagOption)>::LEN, 2);
    }

    #[test]
    fn empty_list() {
        assert_eq!(().arguments().count(), 0);
        assert_eq!(<()>::LEN, 0);
    }
}
