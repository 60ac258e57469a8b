//! Handlers for `login` and `logout`.

use serde_json::json;

use super::command::LoginArgs;
use super::output;
use crate::adapter::outbound::store::FileStore;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::USER_ID_KEY;

/// Store the user identifier sent with scans.
pub fn login(args: &LoginArgs, config: &Config) -> Result<()> {
    let user_id = args.user_id.trim();
    if user_id.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "user_id",
            reason: "must not be blank".to_string(),
        }
        .into());
    }

    let store = FileStore::new(config.store.resolved_path());
    store.set(USER_ID_KEY, user_id)?;

    if output::is_json() {
        output::json_output(json!({ "command": "login", "user_id": user_id }));
    } else {
        output::success(&format!("Signed in as {}", output::highlight(user_id)));
        output::note(&format!("stored in {}", store.path().display()));
    }
    Ok(())
}

/// Forget the stored user identifier.
pub fn logout(config: &Config) -> Result<()> {
    let store = FileStore::new(config.store.resolved_path());
    let removed = store.remove(USER_ID_KEY)?;

    if output::is_json() {
        output::json_output(json!({ "command": "logout", "removed": removed }));
    } else if removed {
        output::success("Signed out");
    } else {
        output::note("No user was signed in");
    }
    Ok(())
}
