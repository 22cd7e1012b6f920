//! Icon shapes and size classes.

use std::fmt;
use std::str::FromStr;

use crate::IconError;

/// Size family an icon is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum SizeClass {
    /// 16px artwork
    Sm,
    /// 24px artwork
    #[default]
    Lg,
}

impl SizeClass {
    /// Intrinsic pixel size of the artwork.
    pub fn pixels(self) -> u32 {
        match self {
            Self::Sm => 16,
            Self::Lg => 24,
        }
    }

    /// CSS length used for the default width and height.
    pub fn rem(self) -> &'static str {
        match self {
            Self::Sm => "1rem",
            Self::Lg => "1.5rem",
        }
    }

    /// Directory name used for this size.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Lg => "lg",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeClass {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sm" | "small" => Ok(Self::Sm),
            "lg" | "large" => Ok(Self::Lg),
            other => Err(IconError::UnknownSize(other.to_string())),
        }
    }
}

/// Vector artwork for one icon at one size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconShape {
    pub name: String,
    pub size: SizeClass,
    pub view_box: String,
    /// Path data, one entry per `<path>` element
    pub paths: Vec<String>,
}

impl IconShape {
    /// Create a shape with the default square view box for its size.
    pub fn new(name: impl Into<String>, size: SizeClass, paths: Vec<String>) -> Self {
        let px = size.pixels();
        Self {
            name: name.into(),
            size,
            view_box: format!("0 0 {} {}", px, px),
            paths,
        }
    }
}

/// Shapes compiled into the binary: (size, name, path data).
pub(crate) const BUILTIN_SHAPES: &[(SizeClass, &str, &str)] = &[
    (
        SizeClass::Lg,
        "data",
        "M13 7.1v-5a10 10 0 0 1 6.74 16.28l-3.57-3.57A5 5 0 0 0 13 7.1zM12 17a5 5 0 0 1-1-9.9v-5a10 10 0 1 0 7.33 17.69l-3.57-3.57A5 5 0 0 1 12 17z",
    ),
    (
        SizeClass::Lg,
        "paid",
        "M12 2a10 10 0 1 0 10 10A9.98 9.98 0 0 0 12 2zm4 11.846c0 1.538-.923 2.77-2.923 3.23v1.847h-2.154v-1.539A7.216 7.216 0 0 1 7.538 16l1.385-1.846a5.362 5.362 0 0 0 2.615.923q1.385 0 1.385-.923C12.923 12.923 8 12.615 8 9.846c0-1.692 1.077-2.77 2.923-3.077V5.077h2.154v1.692A4.763 4.763 0 0 1 16 8.154l-1.692 1.538a3.24 3.24 0 0 0-2-.769c-.77 0-1.231.154-1.231.77 0 1.23 4.923 1.23 4.923 4.153z",
    ),
];
