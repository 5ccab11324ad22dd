//! Login redirects that preserve where the user was going.

use url::form_urlencoded;

/// Where the user currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
    /// `personality` query parameter (e.g. `iap`), carried through sign-in.
    pub personality: Option<String>,
}

impl Location {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            personality: None,
        }
    }

    pub fn with_personality(mut self, personality: impl Into<String>) -> Self {
        self.personality = Some(personality.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRedirect {
    pub login_path: String,
    pub from: String,
    pub personality: Option<String>,
}

impl LoginRedirect {
    pub fn new(login_path: impl Into<String>, location: &Location) -> Self {
        Self {
            login_path: login_path.into(),
            from: location.pathname.clone(),
            personality: location.personality.clone(),
        }
    }

    /// `<login_path>?from=<path>[&personality=<value>]`
    pub fn to_uri(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("from", &self.from);
        if let Some(personality) = &self.personality {
            query.append_pair("personality", personality);
        }
        format!("{}?{}", self.login_path, query.finish())
    }
}
