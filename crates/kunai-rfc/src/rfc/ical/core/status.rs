//! Enumerated property values: CLASS, STATUS and TRANSP.
//!
//! Tokens outside the RFC 5545 set (`X-` names, later IANA registrations) are
//! kept in `Other` exactly as written, so they re-encode unchanged.

/// Declares an open enumeration of wire tokens with an `Other` fallback.
macro_rules! open_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            Other(String),
        }

        impl $name {
            /// Matches known tokens ignoring ASCII case.
            #[must_use]
            pub fn parse(token: &str) -> Self {
                $(
                    if token.eq_ignore_ascii_case($token) {
                        return Self::$variant;
                    }
                )+
                Self::Other(token.to_string())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $token,)+
                    Self::Other(token) => token,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(super) use open_enum;

open_enum!(
    /// CLASS (RFC 5545 §3.8.1.3).
    Classification {
        Public => "PUBLIC",
        Private => "PRIVATE",
        Confidential => "CONFIDENTIAL",
    }
);

open_enum!(
    /// STATUS of a VEVENT.
    EventStatus {
        Tentative => "TENTATIVE",
        Confirmed => "CONFIRMED",
        Cancelled => "CANCELLED",
    }
);

open_enum!(
    /// STATUS of a VTODO.
    TodoStatus {
        NeedsAction => "NEEDS-ACTION",
        Completed => "COMPLETED",
        InProcess => "IN-PROCESS",
        Cancelled => "CANCELLED",
    }
);

open_enum!(
    /// TRANSP (RFC 5545 §3.8.2.7).
    Transparency {
        /// Blocks time in free/busy searches.
        Opaque => "OPAQUE",
        Transparent => "TRANSPARENT",
    }
);
