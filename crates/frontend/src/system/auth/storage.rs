use web_sys::window;

const TOKEN_KEY: &str = "token";
const EMAIL_KEY: &str = "admin_email";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save token to localStorage
pub fn save_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Get token from localStorage
pub fn get_token() -> Option<String> {
    get_local_storage()?
        .get_item(TOKEN_KEY)
        .ok()?
        .filter(|t| !t.is_empty())
}

pub fn save_email(email: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(EMAIL_KEY, email);
    }
}

pub fn get_email() -> Option<String> {
    get_local_storage()?.get_item(EMAIL_KEY).ok()?
}

/// Clear everything the session keeps in storage
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(EMAIL_KEY);
    }
}
