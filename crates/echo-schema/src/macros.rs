//! Declaration macro shared by every record module.
//!
//! `record!` emits a serde struct and its [`RecordSpec`] from one field list,
//! so the typed shape and the constraint table cannot drift apart. Doc
//! comments on fields become the exported JSON Schema descriptions.
//!
//! [`RecordSpec`]: echo_core::RecordSpec

/// Payload key of a field: the explicit rename if given, else the identifier.
macro_rules! field_key {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $key:literal) => {
        $key
    };
}

macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $field:ident $(= $key:literal)? : $ty:ty => $req:ident($kind:expr)
            ),+ $(,)?
        }
        $(requires [$($rule:expr),+ $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $(
                $(#[doc = $doc])*
                $(#[serde(rename = $key)])?
                pub $field: $ty,
            )+
        }

        impl $crate::validate::Record for $name {
            const SPEC: echo_core::RecordSpec = echo_core::RecordSpec {
                name: stringify!($name),
                fields: &[
                    $(
                        echo_core::FieldSpec::$req(field_key!($field $(, $key)?), $kind)
                            .describe(concat!($($doc),*)),
                    )+
                ],
                rules: &[$($($rule),+)?],
            };
        }
    };
}
