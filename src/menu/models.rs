//! Data models for the menu-builder subsystem

use crate::error::UssdError;
use serde::Serialize;

/// USSD protocol response kind
///
/// CON = continue, expect more input. END = terminate the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResponseKind {
    Continue,
    Terminal,
}

impl ResponseKind {
    /// Wire marker as stored in `ussd_menu_items.response_type`
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseKind::Continue => "CON",
            ResponseKind::Terminal => "END",
        }
    }

    /// Parse the stored `CON`/`END` enum value
    pub fn parse(raw: &str) -> Result<Self, UssdError> {
        match raw {
            "CON" => Ok(ResponseKind::Continue),
            "END" => Ok(ResponseKind::Terminal),
            other => Err(UssdError::InvalidResponseType(other.to_string())),
        }
    }
}

/// A menu definition owned by a client
///
/// At most one menu per client is active at any time; activation is a
/// deactivate-siblings-then-activate transaction in the store.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MenuDefinition {
    pub id: i64,
    pub client_id: i64,
    pub menu_name: String,
    pub is_active: bool,
}

/// One node of a menu tree
///
/// Nodes with `parent_id = None` are roots; `trigger` is the input segment
/// that selects this node from its parent.
#[derive(Debug, Clone, Serialize)]
pub struct MenuNode {
    pub id: i64,
    pub menu_id: i64,
    pub parent_id: Option<i64>,
    pub trigger: String,
    pub kind: ResponseKind,
    pub text: String,
}

/// The resolved reply for one callback round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuReply {
    pub kind: ResponseKind,
    pub text: String,
}

impl MenuReply {
    pub fn con(text: impl Into<String>) -> Self {
        Self {
            kind: ResponseKind::Continue,
            text: text.into(),
        }
    }

    pub fn end(text: impl Into<String>) -> Self {
        Self {
            kind: ResponseKind::Terminal,
            text: text.into(),
        }
    }

    /// Render the plain-text wire form: `"CON <text>"` or `"END <text>"`
    pub fn render(&self) -> String {
        format!("{} {}", self.kind.as_str(), self.text)
    }

    /// Parse a marker-prefixed handler string (`"CON …"` / `"END …"`).
    ///
    /// Static legacy handlers return this form; anything without a marker is
    /// rejected so a buggy handler cannot leak raw text to the aggregator.
    pub fn parse_marked(raw: &str) -> Option<Self> {
        if let Some(rest) = raw.strip_prefix("CON ") {
            Some(MenuReply::con(rest))
        } else {
            raw.strip_prefix("END ").map(MenuReply::end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_kind_parse() {
        assert_eq!(ResponseKind::parse("CON").unwrap(), ResponseKind::Continue);
        assert_eq!(ResponseKind::parse("END").unwrap(), ResponseKind::Terminal);
        assert!(ResponseKind::parse("con").is_err());
        assert!(ResponseKind::parse("").is_err());
    }

    #[test]
    fn test_reply_render() {
        assert_eq!(MenuReply::con("Pick one").render(), "CON Pick one");
        assert_eq!(MenuReply::end("Goodbye").render(), "END Goodbye");
    }

    #[test]
    fn test_parse_marked() {
        let reply = MenuReply::parse_marked("CON Welcome\n1. Accounts").unwrap();
        assert_eq!(reply.kind, ResponseKind::Continue);
        assert_eq!(reply.text, "Welcome\n1. Accounts");

        let reply = MenuReply::parse_marked("END Thank you").unwrap();
        assert_eq!(reply.kind, ResponseKind::Terminal);
        assert_eq!(reply.text, "Thank you");

        assert!(MenuReply::parse_marked("Welcome with no marker").is_none());
        assert!(MenuReply::parse_marked("CON").is_none());
    }
}
