//! Inline keyboard builders for interactive bot menus

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::constants::callback;

/// Create the welcome menu keyboard
///
/// Row one fetches or checks proxies, row two registers a domain.
pub fn welcome_menu_keyboard() -> InlineKeyboardMarkup {
    let buttons = vec![
        vec![
            InlineKeyboardButton::callback("Get Proxies", callback::PROXIES),
            InlineKeyboardButton::callback("Check Proxy", callback::CHECK),
        ],
        vec![InlineKeyboardButton::callback("Add Domain", callback::ADD_DOMAIN)],
    ];

    InlineKeyboardMarkup::new(buttons)
}
