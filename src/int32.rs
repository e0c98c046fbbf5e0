//! Validators for int32 attributes.

crate::numeric::int_adapters!(i32);
