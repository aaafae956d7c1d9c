//! Local storage mirror for the session user id.

pub const USER_ID_KEY: &str = "nextobjective_user_id";

/// Writes the user id to `localStorage`. The value is never read back; a
/// reload always creates a fresh user.
pub fn save_user_id(user_id: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window")?;
    let storage = window
        .local_storage()
        .map_err(|e| format!("Local storage unavailable: {:?}", e))?
        .ok_or("Local storage unavailable")?;
    storage
        .set_item(USER_ID_KEY, user_id)
        .map_err(|e| format!("Failed to save user id: {:?}", e))
}
