//! # Settings
//!
//! Command-line configuration of the demo. Arguments are consumed strictly in adjacent pairs,
//! flag at index `i` and value at index `i + 1`, whether or not the flag takes a value. A trailing
//! flag without a following argument gets an empty value. Presence-only flags (`--fullscreen`,
//! `--silent`, `--help`) are therefore only recognized at even positions, and they swallow the
//! token that follows them:
//!
//! ```text
//! ubo --fullscreen --silent      # fullscreen, NOT silent
//! ubo --silent x --fullscreen    # silent and fullscreen
//! ```

use std::collections::BTreeMap;

/// Window title, also printed as the first line of the usage text.
pub const TITLE: &str = "Uniform buffer object demo";

/// Width used when `--screenx` is absent, zero or unparseable.
pub const DEFAULT_SCREEN_WIDTH: u32 = 1280;

/// Height used when `--screeny` is absent, zero or unparseable.
pub const DEFAULT_SCREEN_HEIGHT: u32 = 720;

/// One line per supported option.
pub const USAGE_OPTIONS: [&str; 5] = [
    "--silent      //don't display FPS info in the terminal",
    "--screenx num //set screen width (default:1280)",
    "--screeny num //set screen height (default:720)",
    "--fullscreen  //set fullscreen, windowed by default",
    "--help        //display this information",
];

/// Effective configuration after pairing and defaulting the raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Window width in physical pixels. Never zero.
    pub screen_width: u32,
    /// Window height in physical pixels. Never zero.
    pub screen_height: u32,
    pub fullscreen: bool,
    pub silent: bool,
    pub help: bool,
    /// The raw flag/value pairs, in key order.
    pub arguments: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            fullscreen: false,
            silent: false,
            help: false,
            arguments: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Builds the settings from the program arguments, excluding the program name.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let arguments = pair_arguments(args);

        let screen_width = match parse_dimension(arguments.get("--screenx")) {
            0 => DEFAULT_SCREEN_WIDTH,
            width => width,
        };
        let screen_height = match parse_dimension(arguments.get("--screeny")) {
            0 => DEFAULT_SCREEN_HEIGHT,
            height => height,
        };

        Self {
            screen_width,
            screen_height,
            fullscreen: arguments.contains_key("--fullscreen"),
            silent: arguments.contains_key("--silent"),
            help: arguments.contains_key("--help"),
            arguments,
        }
    }

    /// Width over height of the configured screen.
    pub fn aspect_ratio(&self) -> f32 {
        self.screen_width as f32 / self.screen_height as f32
    }

    /// Logs every parsed flag/value pair.
    pub fn log_arguments(&self) {
        log::info!("Arguments:");
        for (flag, value) in &self.arguments {
            log::info!("{flag} {value}");
        }
    }
}

/// Usage text printed for `--help`.
pub fn usage() -> String {
    let mut text = format!("{TITLE}\n");
    for (i, option) in USAGE_OPTIONS.iter().enumerate() {
        let prefix = if i == 0 { "Usage: " } else { "       " };
        text.push_str(prefix);
        text.push_str(option);
        text.push('\n');
    }
    text
}

/// Groups arguments into non-overlapping `(flag, value)` pairs.
///
/// Later occurrences of a flag overwrite earlier ones.
pub fn pair_arguments<I, S>(args: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut pairs = BTreeMap::new();
    let mut args = args.into_iter().map(Into::into);
    while let Some(flag) = args.next() {
        let value = args.next().unwrap_or_default();
        pairs.insert(flag, value);
    }
    pairs
}

/// Reads a screen dimension the way a formatted stream extraction would: leading whitespace and
/// an optional `+` are skipped, then the leading decimal digits are taken and the rest ignored.
/// Returns 0 when there are no digits or the value does not fit.
fn parse_dimension(value: Option<&String>) -> u32 {
    let Some(value) = value else {
        return 0;
    };
    let trimmed = value.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..digits_len].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(args: &[&str]) -> Settings {
        Settings::from_args(args.iter().copied())
    }

    #[test]
    fn no_arguments_uses_defaults() {
        let settings = settings(&[]);
        assert_eq!(settings.screen_width, 1280);
        assert_eq!(settings.screen_height, 720);
        assert!(!settings.fullscreen);
        assert!(!settings.silent);
        assert!(!settings.help);
    }

    #[test]
    fn explicit_screen_size_is_kept() {
        let settings = settings(&["--screenx", "800", "--screeny", "600"]);
        assert_eq!((settings.screen_width, settings.screen_height), (800, 600));
    }

    #[test]
    fn zero_or_garbage_screen_size_falls_back_to_default() {
        let settings = settings(&["--screenx", "0", "--screeny", "wide"]);
        assert_eq!((settings.screen_width, settings.screen_height), (1280, 720));
    }

    #[test]
    fn screen_size_reads_leading_digits_only() {
        let settings = settings(&["--screenx", " +1024px", "--screeny", "-5"]);
        assert_eq!(settings.screen_width, 1024);
        assert_eq!(settings.screen_height, 720);
    }

    #[test]
    fn overflowing_screen_size_falls_back_to_default() {
        let settings = settings(&["--screenx", "99999999999"]);
        assert_eq!(settings.screen_width, 1280);
    }

    #[test]
    fn boolean_flag_swallows_following_flag() {
        let settings = settings(&["--fullscreen", "--silent"]);
        assert!(settings.fullscreen);
        assert!(!settings.silent);
        assert_eq!(settings.arguments.get("--fullscreen").map(String::as_str), Some("--silent"));
        assert!(!settings.arguments.contains_key("--silent"));
    }

    #[test]
    fn trailing_flag_gets_empty_value() {
        let pairs = pair_arguments(["--screenx", "640", "--silent"]);
        assert_eq!(pairs.get("--silent").map(String::as_str), Some(""));
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn flag_at_odd_position_is_a_value() {
        let settings = settings(&["x", "--help"]);
        assert!(!settings.help);
    }

    #[test]
    fn later_duplicate_overwrites_earlier() {
        let settings = settings(&["--screenx", "640", "--screenx", "320"]);
        assert_eq!(settings.screen_width, 320);
    }

    #[test]
    fn usage_lists_every_option() {
        let text = usage();
        for flag in ["--silent", "--screenx", "--screeny", "--fullscreen", "--help"] {
            assert!(text.contains(flag), "usage is missing {flag}");
        }
        assert_eq!(text.lines().count(), 1 + USAGE_OPTIONS.len());
    }

    #[test]
    fn aspect_ratio_of_defaults() {
        assert_eq!(Settings::default().aspect_ratio(), 1280.0 / 720.0);
    }
}
