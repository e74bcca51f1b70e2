//! Helper macros shared by the score models

/// Declare a closed, fieldless enumeration together with its full value
/// list and the human-readable names used in diagnostics.
///
/// ```ignore
/// closed_enum! {
///     /// Clef kinds
///     pub enum ClefKind {
///         Treble => "treble",
///         Bass => "bass",
///     }
/// }
/// assert_eq!(ClefKind::ALL.len(), 2);
/// assert_eq!(ClefKind::Bass.name(), "bass");
/// ```
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every value, in declaration order
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Name used in diagnostics and skip reports
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
