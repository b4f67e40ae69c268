//! Field types marking relations between models.
//!
//! These carry no data. The declaring model's field type names the relation
//! kind and its target, which is all translation needs.

use std::{fmt, marker::PhantomData};

macro_rules! relation_types {
    ( $( $(#[$attr:meta])* $name:ident; )* ) => {
        $(
            $(#[$attr])*
            pub struct $name<T: ?Sized>(PhantomData<fn() -> T>);

            impl<T: ?Sized> $name<T> {
                pub const fn new() -> Self {
                    Self(PhantomData)
                }
            }

            impl<T: ?Sized> Default for $name<T> {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl<T: ?Sized> Clone for $name<T> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<T: ?Sized> Copy for $name<T> {}

            impl<T: ?Sized> PartialEq for $name<T> {
                fn eq(&self, _: &Self) -> bool {
                    true
                }
            }

            impl<T: ?Sized> Eq for $name<T> {}

            impl<T: ?Sized> fmt::Debug for $name<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}<{}>", stringify!($name), std::any::type_name::<T>())
                }
            }
        )*
    };
}

relation_types! {
    /// One row of the declaring model per row of `T`, and the reverse.
    OneToOne;

    /// Many rows of the declaring model point at one row of `T`.
    ManyToOne;

    /// The reverse side of a [`ManyToOne`] declared on `T`. Owns no storage.
    OneToMany;

    /// Rows of both models relate freely through a join table.
    ManyToMany;
}

/// Alias of [`ManyToOne`].
pub type Foreign<T> = ManyToOne<T>;

/// Alias of [`OneToMany`].
pub type Reverse<T> = OneToMany<T>;

/// Alias of [`OneToMany`].
pub type ReverseForeign<T> = OneToMany<T>;
