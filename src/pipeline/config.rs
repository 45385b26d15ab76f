//! Batch configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use image::Rgb;

use crate::error::{Error, Result};

/// Default canvas width: 6.7" iPhone portrait screenshot.
pub const DEFAULT_WIDTH: u32 = 1290;

/// Default canvas height: 6.7" iPhone portrait screenshot.
pub const DEFAULT_HEIGHT: u32 = 2796;

/// How a source image is fitted onto the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ScaleMode {
    /// Scale to fit inside the canvas and pad the rest. Never crops.
    #[default]
    Contain,
    /// Scale to fill the canvas and crop the overflow around the center.
    Cover,
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contain => f.write_str("contain"),
            Self::Cover => f.write_str("cover"),
        }
    }
}

/// Background color used for contain-mode padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background(pub [u8; 3]);

impl Background {
    /// Opaque white.
    pub const WHITE: Self = Self([255, 255, 255]);

    /// The color as an RGB pixel.
    #[must_use]
    pub const fn to_rgb(self) -> Rgb<u8> {
        Rgb(self.0)
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "({r}, {g}, {b})")
    }
}

impl FromStr for Background {
    type Err = Error;

    /// Parse `R,G,B`, e.g. `255,255,255`. Whitespace around components is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').collect();
        let [r, g, b] = parts.as_slice() else {
            return Err(invalid_background("must be like R,G,B (e.g., 255,255,255)"));
        };

        Ok(Self([
            parse_channel(r)?,
            parse_channel(g)?,
            parse_channel(b)?,
        ]))
    }
}

fn parse_channel(s: &str) -> Result<u8> {
    let value: i64 = s
        .trim()
        .parse()
        .map_err(|_| invalid_background(format!("{:?} is not an integer", s.trim())))?;

    u8::try_from(value).map_err(|_| invalid_background("RGB values must be 0..255"))
}

fn invalid_background(reason: impl Into<String>) -> Error {
    Error::InvalidParameter {
        name: "bg".to_string(),
        reason: reason.into(),
    }
}

/// Configuration for a batch run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// Padding color for contain mode. Unused in cover mode.
    pub background: Background,

    /// Fit strategy.
    pub mode: ScaleMode,

    /// Appended to each output file stem, before the dimension suffix.
    pub suffix: String,

    /// Directory scanned for source images.
    pub input_dir: PathBuf,

    /// Directory the fitted PNGs are written to.
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: Background::WHITE,
            mode: ScaleMode::Contain,
            suffix: String::new(),
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("out"),
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::InvalidParameter {
                name: "w".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        if self.height == 0 {
            return Err(Error::InvalidParameter {
                name: "h".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        crate::fit::check_buffer_size(self.width, self.height)?;

        if self.suffix.contains(['/', '\\']) {
            return Err(Error::InvalidParameter {
                name: "suffix".to_string(),
                reason: "must not contain path separators".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_background() {
        assert_eq!("255,255,255".parse::<Background>().unwrap(), Background::WHITE);
        assert_eq!("0, 12 ,255".parse::<Background>().unwrap(), Background([0, 12, 255]));
    }

    #[test]
    fn test_parse_background_two_components() {
        let err = "10,20".parse::<Background>().unwrap_err();
        match err {
            Error::InvalidParameter { name, reason } => {
                assert_eq!(name, "bg");
                assert!(reason.contains("R,G,B"));
            }
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_background_rejects_bad_components() {
        assert!("10,20,30,40".parse::<Background>().is_err());
        assert!("256,0,0".parse::<Background>().is_err());
        assert!("-1,0,0".parse::<Background>().is_err());
        assert!("red,0,0".parse::<Background>().is_err());
        assert!("".parse::<Background>().is_err());
    }

    #[test]
    fn test_background_display() {
        assert_eq!(Background([1, 2, 3]).to_string(), "(1, 2, 3)");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!((config.width, config.height), (1290, 2796));
        assert_eq!(config.background, Background::WHITE);
        assert_eq!(config.mode, ScaleMode::Contain);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        let config = Config {
            width: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            height: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_separator_in_suffix() {
        let config = Config {
            suffix: "../escape".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_canvas() {
        let config = Config {
            width: 100_000,
            height: 100_000,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::UnsupportedDimensions { .. })
        ));
    }
}
