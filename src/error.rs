use thiserror::Error;

/// Failures attaching the counter to page markup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    #[error("no browser window or document available")]
    NoDocument,

    #[error("page has no element with id '{0}'")]
    MissingElement(&'static str),

    #[error("failed to add click listener to '{id}': {reason}")]
    Listener { id: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_element() {
        assert_eq!(
            BindError::MissingElement("counter").to_string(),
            "page has no element with id 'counter'"
        );
        assert_eq!(
            BindError::Listener {
                id: "increment",
                reason: "TypeError".into(),
            }
            .to_string(),
            "failed to add click listener to 'increment': TypeError"
        );
    }
}
