//! Static menu handler registry
//!
//! Legacy clients pre-dating the tree builder have hard-coded menu functions
//! keyed by their exact short code. The table is built once at startup and
//! never mutated afterwards. Handlers return marker-prefixed strings
//! (`"CON …"` / `"END …"`) that the navigator parses.

use crate::client::Client;
use std::collections::HashMap;

/// A hard-coded menu strategy: (accumulated input, phone number, client) -> marked reply string
pub type StaticMenuHandler = fn(text: &str, phone_number: &str, client: &Client) -> String;

/// Short code -> handler table
pub struct StaticMenuRegistry {
    handlers: HashMap<&'static str, StaticMenuHandler>,
}

impl StaticMenuRegistry {
    /// Empty registry (tree-only resolution)
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registry pre-loaded with the legacy client handlers
    pub fn with_builtin_handlers() -> Self {
        let mut handlers: HashMap<&'static str, StaticMenuHandler> = HashMap::new();
        handlers.insert("*347*102#", lottery_menu);
        handlers.insert("*384*19379#", alumni_menu);
        handlers.insert("*384*55555#", carrier_demo_menu);
        Self { handlers }
    }

    /// Register a handler for a short code (startup wiring only)
    pub fn register(&mut self, short_code: &'static str, handler: StaticMenuHandler) {
        self.handlers.insert(short_code, handler);
    }

    /// Exact short-code lookup
    pub fn resolve(&self, short_code: &str) -> Option<StaticMenuHandler> {
        self.handlers.get(short_code).copied()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for StaticMenuRegistry {
    fn default() -> Self {
        Self::with_builtin_handlers()
    }
}

/// Multi-level lottery menu (legacy client on *347*102#)
fn lottery_menu(text: &str, _phone_number: &str, _client: &Client) -> String {
    match text {
        "" => "CON Welcome to Modern Lottery\n1. Play Games\n2. Check results\n3. Wallets\n4. Recharge\n5. Withdrawal\n6. Contact Us"
            .to_string(),
        "1" => "CON Choose the game you want to play:\n1. Keno 20/80\n2. New 5/90\n3. Japort\n4. Ghana 5/90\n5. VAG Lotto\n6. Noon Rush"
            .to_string(),
        "2" => "CON Choose the game you want to check:\n1. Powerball\n2. Awoof\n3. Biggest Bet\n4. Gold Rush\n5. Lucky Dollar\n6. Bingo\n7. Bonus cash\n8. Hero"
            .to_string(),
        "1*1" => "CON Choose the pool you want to play:\n1. 1ST_DRAWN\n2. PERM1\n3. PERM2\n4. 1BANKER\n5. AGAINST\n6. PERM3\n7. PERM4\n8. PERM5\n9. COLOR_COUNT\n10. # Next"
            .to_string(),
        _ => "END Invalid selection. Please try again.".to_string(),
    }
}

/// Alumni association account menu (legacy client on *384*19379#)
fn alumni_menu(text: &str, phone_number: &str, client: &Client) -> String {
    match text {
        "" => format!(
            "CON Welcome to {}.\n1. My Account\n2. My Phone Number",
            client.name
        ),
        "1" => "CON Choose account information\n1. Account Number\n2. Account Balance".to_string(),
        "2" => format!("END Your phone number is {phone_number}"),
        "1*1" => format!("END Your account number is ACC{}", client.id),
        "1*2" => "END Your account balance is NGN 10,000".to_string(),
        _ => "END Invalid choice".to_string(),
    }
}

/// Carrier self-service demo menu (legacy client on *384*55555#)
fn carrier_demo_menu(text: &str, _phone_number: &str, _client: &Client) -> String {
    match text {
        "" => "CON Welcome to Q4 Communications.\n1. Check Airtime Balance\n2. Buy Data".to_string(),
        "1" => "END Your airtime balance is NGN 500.".to_string(),
        "2" => "END Data services are coming soon.".to_string(),
        _ => "END Invalid selection.".to_string(),
    }
}
