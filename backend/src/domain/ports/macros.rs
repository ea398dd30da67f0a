//! Defines helper macros for generating domain port error enums.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            /// Construct this variant.
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            /// Construct this variant.
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*

            /// Human-readable message, identical to the `Display` output.
            #[must_use]
            pub fn message(&self) -> String {
                self.to_string()
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use crate::domain::UserId;

    define_port_error! {
        pub enum DirectoryProbeError {
            Offline => "directory offline",
            Missing { id: UserId } => "no record for {id}",
            Timeout { message: String, attempts: u32 } => "timed out: {message} after {attempts}",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        let err = DirectoryProbeError::offline();
        assert_eq!(err, DirectoryProbeError::Offline);
        assert_eq!(err.message(), "directory offline");
    }

    #[test]
    fn constructors_accept_convertible_fields() {
        let err = DirectoryProbeError::missing(42_i64);
        assert_eq!(err.to_string(), "no record for 42");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = DirectoryProbeError::timeout("lookup", 3_u32);
        assert_eq!(err.message(), "timed out: lookup after 3");
    }
}
