use std::str::FromStr;

const DEFAULT_TITLE: &str = "Counter";
const DEFAULT_WINDOW_WIDTH: f32 = 240.0;
const DEFAULT_WINDOW_HEIGHT: f32 = 200.0;

const TITLE_VAR: &str = "COUNTER_TITLE";
const WIDTH_VAR: &str = "COUNTER_WINDOW_WIDTH";
const HEIGHT_VAR: &str = "COUNTER_WINDOW_HEIGHT";

/// Window settings for the desktop front end.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub title: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from `lookup`, falling back to the defaults for
    /// anything missing or unparsable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            title: lookup(TITLE_VAR)
                .filter(|title| !title.trim().is_empty())
                .unwrap_or(defaults.title),
            window_width: window_dimension(&lookup, WIDTH_VAR, defaults.window_width),
            window_height: window_dimension(&lookup, HEIGHT_VAR, defaults.window_height),
        }
    }
}

// Window sizes must be finite and positive.
fn window_dimension(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: f32) -> f32 {
    let value = parse_or(lookup, key, default);
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("Ignoring {}={}: not a usable window size", key, value);
        default
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Ignoring {}={:?}: {}", key, raw, e);
                default
            }
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(Settings::from_lookup(|_| None), Settings::default());
    }

    #[test]
    fn overrides_are_applied() {
        let settings = Settings::from_lookup(lookup_from(&[
            (TITLE_VAR, "Clicks"),
            (WIDTH_VAR, "320"),
            (HEIGHT_VAR, " 480.5 "),
        ]));

        assert_eq!(settings.title, "Clicks");
        assert_eq!(settings.window_width, 320.0);
        assert_eq!(settings.window_height, 480.5);
    }

    #[test]
    fn bad_numbers_fall_back() {
        let settings = Settings::from_lookup(lookup_from(&[
            (TITLE_VAR, "   "),
            (WIDTH_VAR, "wide"),
        ]));

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn unusable_sizes_fall_back() {
        for raw in ["-5", "0", "NaN", "inf", "-inf"] {
            let settings = Settings::from_lookup(lookup_from(&[(WIDTH_VAR, raw), (HEIGHT_VAR, raw)]));

            assert_eq!(settings.window_width, DEFAULT_WINDOW_WIDTH, "width from {raw}");
            assert_eq!(settings.window_height, DEFAULT_WINDOW_HEIGHT, "height from {raw}");
        }
    }
}
