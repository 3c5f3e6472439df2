// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::SgrCode;

/// Contains the visual style attributes that can be applied to text.
///
/// Each attribute is an `Option` of a marker type rather than a `bool`, so that
/// attributes can be combined with the `+` operator.
///
/// ```
/// use termglow::{StyleAttribs, style_attrib::{Bold, Italic, Underline}};
///
/// let bold_italic: StyleAttribs = Bold + Italic;
/// let mut attribs = StyleAttribs::from(Underline);
/// attribs += Bold;
/// assert!(attribs.bold.is_some());
/// assert!(bold_italic.italic.is_some());
/// ```
///
/// Serialized as a list of attribute names, eg `["bold", "underline"]`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize)]
#[serde(into = "Vec<StyleAttribKind>", from = "Vec<StyleAttribKind>")]
pub struct StyleAttribs {
    pub bold: Option<style_attrib::Bold>,
    pub dim: Option<style_attrib::Dim>,
    pub italic: Option<style_attrib::Italic>,
    pub underline: Option<style_attrib::Underline>,
    pub blink: Option<style_attrib::Blink>,
    pub reverse: Option<style_attrib::Reverse>,
    pub strikethrough: Option<style_attrib::Strikethrough>,
}

/// One attribute, without the marker type. The declaration order is the order in which
/// attribute codes are emitted.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleAttribKind {
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Reverse,
    Strikethrough,
}

impl StyleAttribKind {
    #[must_use]
    pub const fn sgr_code(self) -> SgrCode {
        match self {
            StyleAttribKind::Bold => SgrCode::Bold,
            StyleAttribKind::Dim => SgrCode::Dim,
            StyleAttribKind::Italic => SgrCode::Italic,
            StyleAttribKind::Underline => SgrCode::Underline,
            StyleAttribKind::Blink => SgrCode::SlowBlink,
            StyleAttribKind::Reverse => SgrCode::Invert,
            StyleAttribKind::Strikethrough => SgrCode::Strikethrough,
        }
    }
}

impl StyleAttribs {
    /// Returns `true` if no attribute is set.
    #[must_use]
    pub fn is_none(&self) -> bool { self.kinds().next().is_none() }

    #[must_use]
    pub fn contains(&self, kind: StyleAttribKind) -> bool {
        match kind {
            StyleAttribKind::Bold => self.bold.is_some(),
            StyleAttribKind::Dim => self.dim.is_some(),
            StyleAttribKind::Italic => self.italic.is_some(),
            StyleAttribKind::Underline => self.underline.is_some(),
            StyleAttribKind::Blink => self.blink.is_some(),
            StyleAttribKind::Reverse => self.reverse.is_some(),
            StyleAttribKind::Strikethrough => self.strikethrough.is_some(),
        }
    }

    /// The attributes that are set, in emission order: bold, dim, italic, underline,
    /// blink, reverse, strikethrough.
    pub fn kinds(&self) -> impl Iterator<Item = StyleAttribKind> {
        StyleAttribKind::iter().filter(|it| self.contains(*it))
    }

    pub fn reset(&mut self) { *self = Self::default(); }

    fn insert(&mut self, kind: StyleAttribKind) {
        use style_attrib::{Blink, Bold, Dim, Italic, Reverse, Strikethrough, Underline};
        match kind {
            StyleAttribKind::Bold => self.bold = Some(Bold),
            StyleAttribKind::Dim => self.dim = Some(Dim),
            StyleAttribKind::Italic => self.italic = Some(Italic),
            StyleAttribKind::Underline => self.underline = Some(Underline),
            StyleAttribKind::Blink => self.blink = Some(Blink),
            StyleAttribKind::Reverse => self.reverse = Some(Reverse),
            StyleAttribKind::Strikethrough => self.strikethrough = Some(Strikethrough),
        }
    }
}

impl From<StyleAttribs> for Vec<StyleAttribKind> {
    fn from(attribs: StyleAttribs) -> Self { attribs.kinds().collect() }
}

impl From<Vec<StyleAttribKind>> for StyleAttribs {
    fn from(kinds: Vec<StyleAttribKind>) -> Self {
        let mut it = Self::default();
        for kind in kinds {
            it.insert(kind);
        }
        it
    }
}

pub mod style_attrib {
    use serde::{Deserialize, Serialize};

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
    pub struct Bold;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
    pub struct Dim;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
    pub struct Italic;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
    pub struct Underline;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
    pub struct Blink;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
    pub struct Reverse;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
    pub struct Strikethrough;
}

pub fn style_attribs(arg: impl Into<StyleAttribs>) -> StyleAttribs { arg.into() }

impl Add for StyleAttribs {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            bold: self.bold.or(rhs.bold),
            dim: self.dim.or(rhs.dim),
            italic: self.italic.or(rhs.italic),
            underline: self.underline.or(rhs.underline),
            blink: self.blink.or(rhs.blink),
            reverse: self.reverse.or(rhs.reverse),
            strikethrough: self.strikethrough.or(rhs.strikethrough),
        }
    }
}

macro_rules! impl_from_and_add_for_attrib {
    ($type:ty, $field:ident) => {
        impl From<$type> for StyleAttribs {
            fn from(val: $type) -> Self {
                StyleAttribs {
                    $field: Some(val),
                    ..Default::default()
                }
            }
        }

        impl Add<$type> for StyleAttribs {
            type Output = StyleAttribs;
            fn add(mut self, rhs: $type) -> Self::Output {
                self.$field = Some(rhs);
                self
            }
        }

        impl Add<StyleAttribs> for $type {
            type Output = StyleAttribs;
            fn add(self, mut rhs: StyleAttribs) -> Self::Output {
                rhs.$field = Some(self);
                rhs
            }
        }

        impl AddAssign<$type> for StyleAttribs {
            fn add_assign(&mut self, rhs: $type) { self.$field = Some(rhs); }
        }
    };
}

#[allow(unused_macro_rules)]
macro_rules! define_attrib_operations {
    // Done
    () => {};

    // Just one element left
    (($type:ty, $field:ident)) => {
        impl_from_and_add_for_attrib!($type, $field);
    };

    // Multiple elements
    (($type:ty, $field:ident), $(($rest_type:ty, $rest_field:ident)),+) => {
        impl_from_and_add_for_attrib!($type, $field);

        $(
            impl Add<$rest_type> for $type {
                type Output = StyleAttribs;
                fn add(self, rhs: $rest_type) -> Self::Output {
                    StyleAttribs::from(self) + StyleAttribs::from(rhs)
                }
            }

            impl Add<$type> for $rest_type {
                type Output = StyleAttribs;
                fn add(self, rhs: $type) -> Self::Output {
                    StyleAttribs::from(self) + StyleAttribs::from(rhs)
                }
            }
        )*

        // Recurse.
        define_attrib_operations!($(($rest_type, $rest_field)),+);
    };
}

define_attrib_operations!(
    (style_attrib::Bold, bold),
    (style_attrib::Dim, dim),
    (style_attrib::Italic, italic),
    (style_attrib::Underline, underline),
    (style_attrib::Blink, blink),
    (style_attrib::Reverse, reverse),
    (style_attrib::Strikethrough, strikethrough)
);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{style_attrib::*, *};

    #[test]
    fn test_combine_with_add() {
        let attribs = Bold + Italic + Strikethrough;
        assert_eq!(
            attribs.kinds().collect::<Vec<_>>(),
            vec![
                StyleAttribKind::Bold,
                StyleAttribKind::Italic,
                StyleAttribKind::Strikethrough
            ]
        );
    }

    #[test]
    fn test_kinds_follow_emission_order_not_insertion_order() {
        let attribs = Strikethrough + Reverse + Blink + Underline + Italic + Dim + Bold;
        let codes: Vec<_> = attribs.kinds().map(StyleAttribKind::sgr_code).collect();
        assert_eq!(
            codes,
            vec![
                SgrCode::Bold,
                SgrCode::Dim,
                SgrCode::Italic,
                SgrCode::Underline,
                SgrCode::SlowBlink,
                SgrCode::Invert,
                SgrCode::Strikethrough
            ]
        );
    }

    #[test]
    fn test_add_assign_and_reset() {
        let mut attribs = StyleAttribs::default();
        assert!(attribs.is_none());
        attribs += Dim;
        attribs += Underline;
        assert!(attribs.contains(StyleAttribKind::Dim));
        assert!(!attribs.contains(StyleAttribKind::Bold));
        attribs.reset();
        assert!(attribs.is_none());
    }

    #[test]
    fn test_serde_as_list_of_names() {
        let attribs = style_attribs(Bold + Underline);
        let json = serde_json::to_string(&attribs).unwrap();
        assert_eq!(json, r#"["bold","underline"]"#);
        let parsed: StyleAttribs = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, attribs);
    }
}
