//! Book Context - Value Objects

use serde::{Deserialize, Serialize};

use super::BookError;

/// 书名（注册表内的唯一标识）
///
/// 反序列化同样经过 [`Title::new`] 校验
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    pub fn new(title: impl Into<String>) -> Result<Self, BookError> {
        let title = title.into();
        if title.is_empty() {
            return Err(BookError::InvalidTitle("title is empty"));
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Title {
    type Error = BookError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Title> for String {
    fn from(title: Title) -> Self {
        title.0
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title_rejected() {
        assert_eq!(
            Title::new(""),
            Err(BookError::InvalidTitle("title is empty"))
        );
    }

    #[test]
    fn test_title_keeps_text() {
        let title = Title::new("Dune").unwrap();
        assert_eq!(title.as_str(), "Dune");
        assert_eq!(title.to_string(), "Dune");
    }

    #[test]
    fn test_deserialize_goes_through_validation() {
        let title: Title = serde_json::from_str("\"Dune\"").unwrap();
        assert_eq!(title.as_str(), "Dune");
        assert_eq!(serde_json::to_string(&title).unwrap(), "\"Dune\"");

        let empty = serde_json::from_str::<Title>("\"\"");
        assert!(empty.is_err());
    }
}
