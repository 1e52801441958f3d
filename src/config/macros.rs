/// Configuration macros for zero-repetition config definitions
///
/// `config_struct!` defines a configuration structure with its defaults in a
/// single declaration and generates:
/// - The struct with public fields
/// - The Default implementation
/// - Serde serialization/deserialization with `#[serde(default)]`
///
/// # Example
/// ```
/// fleetboard::config_struct! {
///     pub struct ProbeConfig {
///         enabled: bool = true,
///         interval_ms: u64 = 1000,
///     }
/// }
///
/// let cfg = ProbeConfig::default();
/// assert_eq!(cfg.interval_ms, 1000);
/// ```
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_name:ident: $field_type:ty = $default_value:expr
            ),*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field_name: $field_type,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $field_name: $default_value,
                    )*
                }
            }
        }
    };
}
