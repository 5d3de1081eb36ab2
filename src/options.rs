use std::{env, path::PathBuf};

/// Color space captured frames are rendered into.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    #[default]
    DeviceRgb,
    Srgb,
    DisplayP3,
}

impl ColorSpace {
    pub fn parse(value: &str) -> Option<ColorSpace> {
        match value.trim().to_ascii_lowercase().as_str() {
            "device-rgb" | "device" | "rgb" => Some(ColorSpace::DeviceRgb),
            "srgb" => Some(ColorSpace::Srgb),
            "display-p3" | "p3" => Some(ColorSpace::DisplayP3),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureOptions {
    /// Directory the PNG files are written to.
    pub output_dir: PathBuf,
    pub shows_cursor: bool,
    pub color_space: ColorSpace,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        CaptureOptions {
            output_dir: PathBuf::from("."),
            shows_cursor: false,
            color_space: ColorSpace::default(),
        }
    }
}

pub const OUTPUT_DIR_VAR: &str = "SCKSHOT_OUTPUT_DIR";
pub const SHOWS_CURSOR_VAR: &str = "SCKSHOT_SHOWS_CURSOR";
pub const COLOR_SPACE_VAR: &str = "SCKSHOT_COLOR_SPACE";

impl CaptureOptions {
    /// Reads overrides from the `SCKSHOT_*` environment variables.
    pub fn from_env() -> CaptureOptions {
        CaptureOptions::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> CaptureOptions
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = CaptureOptions::default();

        if let Some(dir) = lookup(OUTPUT_DIR_VAR).filter(|dir| !dir.is_empty()) {
            options.output_dir = PathBuf::from(dir);
        }

        if let Some(value) = lookup(SHOWS_CURSOR_VAR) {
            match parse_bool(&value) {
                Some(shows_cursor) => options.shows_cursor = shows_cursor,
                None => log::warn!("ignoring {SHOWS_CURSOR_VAR}={value:?}"),
            }
        }

        if let Some(value) = lookup(COLOR_SPACE_VAR) {
            match ColorSpace::parse(&value) {
                Some(color_space) => options.color_space = color_space,
                None => log::warn!("ignoring {COLOR_SPACE_VAR}={value:?}"),
            }
        }

        options
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn options_from(vars: &[(&str, &str)]) -> CaptureOptions {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        CaptureOptions::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let options = options_from(&[]);

        assert_eq!(options, CaptureOptions::default());
        assert_eq!(options.output_dir, PathBuf::from("."));
        assert!(!options.shows_cursor);
        assert_eq!(options.color_space, ColorSpace::DeviceRgb);
    }

    #[test]
    fn env_overrides() {
        let options = options_from(&[
            (OUTPUT_DIR_VAR, "/tmp/shots"),
            (SHOWS_CURSOR_VAR, "Yes"),
            (COLOR_SPACE_VAR, "display-p3"),
        ]);

        assert_eq!(options.output_dir, PathBuf::from("/tmp/shots"));
        assert!(options.shows_cursor);
        assert_eq!(options.color_space, ColorSpace::DisplayP3);
    }

    #[test]
    fn invalid_values_fall_back() {
        let options = options_from(&[
            (OUTPUT_DIR_VAR, ""),
            (SHOWS_CURSOR_VAR, "maybe"),
            (COLOR_SPACE_VAR, "cmyk"),
        ]);

        assert_eq!(options, CaptureOptions::default());
    }
}
