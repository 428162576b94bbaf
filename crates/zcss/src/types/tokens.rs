//! Design tokens accepted by responsive props.
//!
//! Tokens are names, not CSS. A [`Theme`](super::Theme) maps each token to
//! its CSS value; that mapping is the `to_css` conversion components hand to
//! the emitters.

use std::fmt;
use std::str::FromStr;

use phf::phf_map;

use crate::error::ZcssError;

macro_rules! token {
    ($(#[$meta:meta])* $name:ident, $kind:literal, $table:ident, { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        static $table: phf::Map<&'static str, $name> = phf_map! {
            $($text => $name::$variant),+
        };

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            pub(crate) const fn index(self) -> usize {
                self as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = ZcssError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $table.get(s).copied().ok_or_else(|| ZcssError::UnknownToken {
                    kind: $kind,
                    name: s.to_string(),
                })
            }
        }
    };
}

token!(
    /// Spacing scale used by padding and gap props.
    Space, "space", SPACE_NAMES, {
        None => "none",
        Xs => "xs",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
    }
);

token!(
    /// Font-size scale used by headings.
    FontSize, "font-size", FONT_SIZE_NAMES, {
        Xs => "xs",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Xxl => "xxl",
    }
);

token!(
    /// Icon sizes. Icons need a pixel number, not a CSS string.
    IconSize, "icon-size", ICON_SIZE_NAMES, {
        Sm => "sm",
        Md => "md",
        Lg => "lg",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_through_table() {
        assert_eq!("lg".parse::<Space>(), Ok(Space::Lg));
        assert_eq!("xxl".parse::<FontSize>(), Ok(FontSize::Xxl));
        assert_eq!(
            "huge".parse::<IconSize>(),
            Err(ZcssError::UnknownToken {
                kind: "icon-size",
                name: "huge".into()
            })
        );
    }

    #[test]
    fn all_is_ordered_by_index() {
        for (i, space) in Space::ALL.iter().enumerate() {
            assert_eq!(space.index(), i);
        }
    }
}
