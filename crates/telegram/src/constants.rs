//! Constants used throughout the telegram bot

/// Greeting sent with the action menu on `/start`
pub const WELCOME_TEXT: &str = "Welcome to the Nautica bot!";

/// File name of the rendered proxy list attachment
pub const PROXIES_FILENAME: &str = "proxies.html";

/// The only registrar status reported to the user as success
pub const REGISTER_SUCCESS_STATUS: u16 = 200;

/// Command verbs, matched case-sensitively against the first token
pub mod verbs {
    pub const START: &str = "/start";
    pub const PROXIES: &str = "/proxies";
    pub const CHECK: &str = "/check";
    pub const ADD_DOMAIN: &str = "/adddomain";
}

/// Callback data carried by the inline menu buttons
pub mod callback {
    pub const PROXIES: &str = "proxies";
    pub const CHECK: &str = "check";
    pub const ADD_DOMAIN: &str = "adddomain";
}

/// Usage messages for commands, HTML-escaped for the HTML parse mode
pub mod usage {
    pub const CHECK: &str = "Please provide a proxy to check. Usage: /check &lt;ip:port&gt;";
    pub const ADD_DOMAIN: &str = "Please provide a domain to add. Usage: /adddomain &lt;domain&gt;";
}
