/// Environment variable that turns on strict exit status.
pub const STRICT_ENV: &str = "PDFTEXT_STRICT";

/// Settings for one run, resolved as CLI flags > env vars > defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Exit with failure when no backend read the whole document.
    pub strict: bool,
    pub color: bool,
}

impl Settings {
    /// `env` looks up a variable; passed in so tests don't touch the process
    /// environment.
    pub fn resolve(
        strict_flag: bool,
        no_color: bool,
        stdout_is_terminal: bool,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let strict = strict_flag || env(STRICT_ENV).is_some_and(|v| parse_bool(&v));
        Self {
            strict,
            color: !no_color && stdout_is_terminal,
        }
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
