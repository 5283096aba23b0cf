//! Menu Navigator
//!
//! Pure resolution of one callback round: given the accumulated input and
//! either a static handler or a loaded menu tree, produce the next prompt.
//! No persistence happens here; navigation state is reconstructed from the
//! full input string every round, so no in-memory session affinity exists.

use super::models::MenuReply;
use super::static_menus::StaticMenuRegistry;
use super::tree::{MenuTree, WalkError};
use crate::client::Client;

/// Terminal text for inputs that match no menu option
pub const INVALID_SELECTION_TEXT: &str = "Invalid selection. Please try again.";
/// Terminal text when a client has no usable menu (or anything else breaks)
pub const GENERIC_ERROR_TEXT: &str = "An error occurred. Please try again later.";

/// Stateless menu resolution
pub struct MenuNavigator;

impl MenuNavigator {
    /// Resolve the reply for one callback round.
    ///
    /// Strategies, in order:
    /// 1. a static handler registered for the client's exact short code;
    /// 2. a walk of the supplied active menu tree.
    ///
    /// Every failure mode degrades to a terminal reply; this function cannot
    /// error, because the waiting telecom session must always get an answer.
    pub fn navigate(
        registry: &StaticMenuRegistry,
        client: &Client,
        tree: Option<&MenuTree>,
        text: &str,
        phone_number: &str,
    ) -> MenuReply {
        if let Some(code) = client.ussd_code.as_deref() {
            if let Some(handler) = registry.resolve(code) {
                let raw = handler(text, phone_number, client);
                return match MenuReply::parse_marked(&raw) {
                    Some(reply) => reply,
                    None => {
                        tracing::error!(
                            client_id = client.id,
                            short_code = code,
                            "Static handler returned text without CON/END marker"
                        );
                        MenuReply::end(GENERIC_ERROR_TEXT)
                    }
                };
            }
        }

        let Some(tree) = tree else {
            tracing::warn!(client_id = client.id, "Client has no active menu");
            return MenuReply::end(GENERIC_ERROR_TEXT);
        };

        match tree.walk(text) {
            Ok(node) => MenuReply {
                kind: node.kind,
                text: node.text.clone(),
            },
            Err(WalkError::InvalidSelection) => MenuReply::end(INVALID_SELECTION_TEXT),
            Err(WalkError::EmptyMenu) => {
                tracing::warn!(client_id = client.id, "Active menu has no nodes");
                MenuReply::end(GENERIC_ERROR_TEXT)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::models::{MenuNode, ResponseKind};

    fn client(code: Option<&str>) -> Client {
        Client {
            id: 3,
            name: "Acme Co".to_string(),
            ussd_code: code.map(str::to_string),
            token_balance: 50,
            pricing_tier_id: None,
            sender_id: None,
        }
    }

    fn tree() -> MenuTree {
        MenuTree::from_nodes(vec![
            MenuNode {
                id: 1,
                menu_id: 1,
                parent_id: None,
                trigger: String::new(),
                kind: ResponseKind::Continue,
                text: "Welcome to Acme\n1. Hours".to_string(),
            },
            MenuNode {
                id: 2,
                menu_id: 1,
                parent_id: Some(1),
                trigger: "1".to_string(),
                kind: ResponseKind::Terminal,
                text: "Open 9-5".to_string(),
            },
        ])
    }

    #[test]
    fn test_static_handler_takes_precedence() {
        let registry = StaticMenuRegistry::with_builtin_handlers();
        let client = client(Some("*384*55555#"));

        // Tree is present but the registered handler wins
        let reply = MenuNavigator::navigate(&registry, &client, Some(&tree()), "", "+234800");
        assert_eq!(reply.kind, ResponseKind::Continue);
        assert!(reply.text.starts_with("Welcome to Q4 Communications"));
    }

    #[test]
    fn test_tree_walk_when_no_handler_registered() {
        let registry = StaticMenuRegistry::with_builtin_handlers();
        let client = client(Some("*384*777#"));

        let reply = MenuNavigator::navigate(&registry, &client, Some(&tree()), "", "+234800");
        assert_eq!(reply, MenuReply::con("Welcome to Acme\n1. Hours"));

        let reply = MenuNavigator::navigate(&registry, &client, Some(&tree()), "1", "+234800");
        assert_eq!(reply, MenuReply::end("Open 9-5"));
    }

    #[test]
    fn test_no_active_menu_is_terminal_fallback() {
        let registry = StaticMenuRegistry::empty();
        let reply =
            MenuNavigator::navigate(&registry, &client(Some("*1#")), None, "", "+234800");
        assert_eq!(reply, MenuReply::end(GENERIC_ERROR_TEXT));
    }

    #[test]
    fn test_invalid_selection_is_terminal_prompt() {
        let registry = StaticMenuRegistry::empty();
        let reply =
            MenuNavigator::navigate(&registry, &client(None), Some(&tree()), "8", "+234800");
        assert_eq!(reply, MenuReply::end(INVALID_SELECTION_TEXT));
    }
}
