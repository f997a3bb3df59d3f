//! Color-name resolution.
//!
//! Turns user-supplied strings such as `"dark blue"`, `"Light_Gray"` or
//! `"#1569C7"` into a [`CanonicalColor`] (`#rrggbb`, lower-case).
//!
//! Lookup order, first match wins:
//!
//! 1. The [`PresetColor`] table. Matches the preset's name or its hex value,
//!    case-insensitively, with spaces and underscores interchangeable.
//! 2. The general named-color table (the CSS/X11 web colors). Names match
//!    word for word, or written as one run as on the web (`lightgray`).
//! 3. The host palette, unless the resolver is [restricted](ColorResolver::restricted).
//!
//! Resolution is pure. A failed lookup returns `None`.

mod tables;

use serde::{Deserialize, Serialize};
use std::fmt;

use tables::{GENERAL_COLORS, HOST_COLORS};

// ============================================================================
// Color Types
// ============================================================================

/// A red/green/blue triple with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Format as `#rrggbb`. Each channel is zero-padded, no alpha is emitted.
    pub fn to_canonical(self) -> CanonicalColor {
        CanonicalColor(format!(
            "#{:02x}{:02x}{:02x}",
            self.red, self.green, self.blue
        ))
    }
}

/// A resolved color in `#rrggbb` form.
///
/// Only produced by [`Rgb::to_canonical`], so the format always holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalColor(String);

impl CanonicalColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Rgb> for CanonicalColor {
    fn from(rgb: Rgb) -> Self {
        rgb.to_canonical()
    }
}

impl PartialEq<str> for CanonicalColor {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CanonicalColor {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ============================================================================
// Preset Table
// ============================================================================

/// Plugin-specific preset colors, used for territory and chat colors.
///
/// These take priority over every general table, even where a general table
/// defines the same name with a different value (e.g. `gray`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    DarkGray,
    Gold,
    Gray,
    Blue,
    Green,
    Aqua,
    Red,
    Purple,
    Yellow,
    White,
}

impl PresetColor {
    pub const ALL: [PresetColor; 16] = [
        PresetColor::Black,
        PresetColor::DarkBlue,
        PresetColor::DarkGreen,
        PresetColor::DarkAqua,
        PresetColor::DarkRed,
        PresetColor::DarkPurple,
        PresetColor::DarkGray,
        PresetColor::Gold,
        PresetColor::Gray,
        PresetColor::Blue,
        PresetColor::Green,
        PresetColor::Aqua,
        PresetColor::Red,
        PresetColor::Purple,
        PresetColor::Yellow,
        PresetColor::White,
    ];

    /// Symbolic name, lower-case with underscores.
    pub fn name(self) -> &'static str {
        match self {
            PresetColor::Black => "black",
            PresetColor::DarkBlue => "dark_blue",
            PresetColor::DarkGreen => "dark_green",
            PresetColor::DarkAqua => "dark_aqua",
            PresetColor::DarkRed => "dark_red",
            PresetColor::DarkPurple => "dark_purple",
            PresetColor::DarkGray => "dark_gray",
            PresetColor::Gold => "gold",
            PresetColor::Gray => "gray",
            PresetColor::Blue => "blue",
            PresetColor::Green => "green",
            PresetColor::Aqua => "aqua",
            PresetColor::Red => "red",
            PresetColor::Purple => "purple",
            PresetColor::Yellow => "yellow",
            PresetColor::White => "white",
        }
    }

    pub fn rgb(self) -> Rgb {
        match self {
            PresetColor::Black => Rgb::new(0x00, 0x00, 0x00),
            PresetColor::DarkBlue => Rgb::new(0x15, 0x1b, 0x8d), // denim dark blue
            PresetColor::DarkGreen => Rgb::new(0x25, 0x41, 0x17), // dark forest green
            PresetColor::DarkAqua => Rgb::new(0x34, 0x87, 0x81), // medium aquamarine
            PresetColor::DarkRed => Rgb::new(0x99, 0x00, 0x12), // red wine
            PresetColor::DarkPurple => Rgb::new(0x46, 0x1b, 0x7e),
            PresetColor::DarkGray => Rgb::new(0x73, 0x6f, 0x6e),
            PresetColor::Gold => Rgb::new(0xfd, 0xd0, 0x17),
            PresetColor::Gray => Rgb::new(0xb6, 0xb6, 0xb4), // gray cloud
            PresetColor::Blue => Rgb::new(0x15, 0x69, 0xc7),
            PresetColor::Green => Rgb::new(0x41, 0xa3, 0x17),
            PresetColor::Aqua => Rgb::new(0x00, 0xff, 0xff),
            PresetColor::Red => Rgb::new(0xff, 0x00, 0x00),
            PresetColor::Purple => Rgb::new(0xff, 0x00, 0xff),
            PresetColor::Yellow => Rgb::new(0xff, 0xff, 0x00),
            PresetColor::White => Rgb::new(0xff, 0xff, 0xff),
        }
    }

    /// Find the preset whose name or hex value equals `input`.
    ///
    /// `input` must already be trimmed.
    pub fn find(input: &str) -> Option<Self> {
        let key = name_key(input);
        Self::ALL.into_iter().find(|preset| {
            preset.name() == key || preset.rgb().to_canonical().as_str() == key
        })
    }
}

// ============================================================================
// Resolver
// ============================================================================

#[derive(Debug, Clone)]
enum HostTable {
    Builtin,
    Custom(Vec<(String, Rgb)>),
    Disabled,
}

/// Resolves color names against the preset, general and host tables.
///
/// ```
/// use ponder_core::ColorResolver;
///
/// let resolver = ColorResolver::new();
/// assert_eq!(resolver.resolve("Dark Blue").unwrap().as_str(), "#151b8d");
/// assert_eq!(resolver.resolve("cornflower_blue").unwrap().as_str(), "#6495ed");
/// assert!(resolver.resolve("not-a-color-xyz").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ColorResolver {
    host: HostTable,
}

impl ColorResolver {
    /// Resolver consulting all three tables, with the built-in host palette.
    pub fn new() -> Self {
        Self {
            host: HostTable::Builtin,
        }
    }

    /// Resolver that never consults the host palette.
    ///
    /// Used where the host environment is not available, such as tests run
    /// outside the host.
    pub fn restricted() -> Self {
        Self {
            host: HostTable::Disabled,
        }
    }

    /// Resolver using a palette supplied by the host instead of the built-in one.
    pub fn with_host_table<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = (S, Rgb)>,
        S: AsRef<str>,
    {
        let table = colors
            .into_iter()
            .map(|(name, rgb)| (name_key(name.as_ref()), rgb))
            .collect();
        Self {
            host: HostTable::Custom(table),
        }
    }

    pub fn is_restricted(&self) -> bool {
        matches!(self.host, HostTable::Disabled)
    }

    /// Resolve `input` into a canonical `#rrggbb` color.
    pub fn resolve(&self, input: &str) -> Option<CanonicalColor> {
        let input = input.trim();

        if let Some(preset) = PresetColor::find(input) {
            return Some(preset.rgb().to_canonical());
        }

        let key = name_key(input);
        if let Some(rgb) = lookup(GENERAL_COLORS.iter().map(|(n, c)| (*n, *c)), &key) {
            return Some(rgb.to_canonical());
        }

        let host = match &self.host {
            HostTable::Builtin => lookup(HOST_COLORS.iter().map(|(n, c)| (*n, *c)), &key),
            HostTable::Custom(table) => lookup(table.iter().map(|(n, c)| (n.as_str(), *c)), &key),
            HostTable::Disabled => None,
        };
        host.map(Rgb::to_canonical)
    }
}

impl Default for ColorResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve `input` with the default (unrestricted) resolver.
pub fn resolve(input: &str) -> Option<CanonicalColor> {
    ColorResolver::new().resolve(input)
}

/// Find `key` in a table of underscore-separated names.
///
/// A key with no separators also matches a name written as one run, so the
/// web spelling `lightgray` reaches `light_gray`. A key with separators must
/// match word for word.
fn lookup<'a>(mut table: impl Iterator<Item = (&'a str, Rgb)>, key: &str) -> Option<Rgb> {
    let compact = !key.contains('_');
    table
        .find(|(name, _)| {
            *name == key || (compact && name.chars().filter(|c| *c != '_').eq(key.chars()))
        })
        .map(|(_, rgb)| rgb)
}

/// Lower-case, with spaces and underscores interchangeable.
fn name_key(input: &str) -> String {
    input.to_lowercase().replace(' ', "_")
}
