use secrecy::{ExposeSecret, SecretString};

/// The API key authorizing calls to the model provider.
///
/// Held in memory for the lifetime of a session only. The key is a
/// [`SecretString`], so `Debug` output is redacted and the value is only
/// exposed when the `Authorization` header is built.
#[derive(Debug)]
pub struct Credential(SecretString);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(SecretString::from(secret.into()))
    }

    pub fn empty() -> Self {
        Self::new(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.0.expose_secret())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_empty_string_is_empty() {
        assert!(Credential::empty().is_empty());
        assert!(Credential::new("").is_empty());
        assert!(!Credential::new(" ").is_empty());
    }

    #[test]
    fn bearer_header_uses_key_verbatim() {
        assert_eq!(Credential::new("sk-test").bearer(), "Bearer sk-test");
    }

    #[test]
    fn debug_never_shows_secret() {
        let cred = Credential::new("sk-very-secret");
        assert!(!format!("{cred:?}").contains("sk-very-secret"));
    }
}
