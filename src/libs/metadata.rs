//! Build-time application metadata generated by `build.rs`.

use crate::libs::messages::Message;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

pub fn version() -> &'static str {
    APP_METADATA_VERSION
}

/// The `--version` text: name, version and build target.
pub fn version_message() -> Message {
    Message::Version {
        name: APP_METADATA_DISPLAY_NAME.to_string(),
        version: APP_METADATA_VERSION.to_string(),
        os: APP_METADATA_TARGET_OS.to_string(),
        arch: APP_METADATA_TARGET_ARCH.to_string(),
        profile: APP_METADATA_PROFILE.to_string(),
    }
}
