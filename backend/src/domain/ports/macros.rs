//! Helper macro for generating domain port error enums.
//!
//! Each variant gets a `thiserror` display string and a snake_case
//! constructor accepting `impl Into<T>` for every field, so adapters can
//! write `Error::query(err.to_string())` without ceremony.

macro_rules! define_port_error {
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

        ::paste::paste! {
            impl $name {
                $(
                    pub fn [<$variant:snake>]($( $($field: impl Into<$ty>),* )?) -> Self {
                        Self::$variant $( { $($field: $field.into()),* } )?
                    }
                )*
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum SamplePortError {
            Offline => "collaborator offline",
            Rejected { reason: String } => "rejected: {reason}",
            Throttled { reason: String, retry_after: u32 } =>
                "throttled: {reason} (retry after {retry_after}s)",
        }
    }

    #[test]
    fn unit_variants_get_constructors() {
        assert_eq!(SamplePortError::offline().to_string(), "collaborator offline");
    }

    #[test]
    fn string_fields_accept_str() {
        let err = SamplePortError::rejected("no capacity");
        assert_eq!(err.to_string(), "rejected: no capacity");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = SamplePortError::throttled("burst", 30_u32);
        assert_eq!(err.to_string(), "throttled: burst (retry after 30s)");
    }
}
