pub use std_util::prelude::*;

use freeform::Model;

/// Native declarations of a model translated with the default registry.
pub fn native_fields<T: Model>() -> Vec<String> {
    let model = assert_ok!(T::definition());
    model
        .native_fields()
        .map(|field| field.native_declaration())
        .collect()
}
