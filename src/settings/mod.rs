//! Settings domain: plugin wiring and public exports.

mod prefs;
mod store;


pub use prefs::{PrefValue, PrefsStore};
pub use store::{Settings, SettingsChanged};

use bevy::prelude::*;

/// On-disk location for persisted preferences.
const PREFS_PATH: &str = "prefs.ron";

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        let prefs = PrefsStore::load_or_default(PREFS_PATH);
        let settings = Settings::from_prefs(&prefs);
        app.insert_resource(prefs)
            .insert_resource(settings)
            .add_message::<SettingsChanged>();
    }
}
