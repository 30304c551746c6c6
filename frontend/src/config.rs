const DEFAULT_API_URL: &str = "http://localhost:8000/api";

pub const TOKEN_KEY: &str = "token";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    api_url: String,
    household_id: Option<i64>,
}

impl Config {
    /// Reads `EXPENSES_API_URL` and `EXPENSES_HOUSEHOLD_ID` from the build environment.
    pub fn from_env() -> Self {
        Self::new(
            option_env!("EXPENSES_API_URL"),
            option_env!("EXPENSES_HOUSEHOLD_ID"),
        )
    }

    pub fn new(api_url: Option<&str>, household_id: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let household_id = match household_id.map(str::trim) {
            Some(raw) if !raw.is_empty() => match raw.parse::<i64>() {
                Ok(id) => Some(id),
                Err(_) => {
                    log::warn!("ignoring EXPENSES_HOUSEHOLD_ID={raw:?}: not an integer");
                    None
                }
            },
            _ => None,
        };

        Self {
            api_url,
            household_id,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Legacy deployments scope `/expenses` queries to a fixed household.
    pub fn household_id(&self) -> Option<i64> {
        self.household_id
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_local_api() {
        let config = Config::new(None, None);

        assert_eq!(config.api_url(), DEFAULT_API_URL);
        assert_eq!(config.household_id(), None);
    }

    #[test]
    fn trims_trailing_slashes_from_url() {
        let config = Config::new(Some("https://api.example.com/api//"), None);

        assert_eq!(config.api_url(), "https://api.example.com/api");
    }

    #[test]
    fn blank_url_uses_default() {
        let config = Config::new(Some("   "), None);

        assert_eq!(config.api_url(), DEFAULT_API_URL);
    }

    #[test]
    fn parses_household_id() {
        assert_eq!(Config::new(None, Some(" 7 ")).household_id(), Some(7));
        assert_eq!(Config::new(None, Some("seven")).household_id(), None);
        assert_eq!(Config::new(None, Some("")).household_id(), None);
    }
}
