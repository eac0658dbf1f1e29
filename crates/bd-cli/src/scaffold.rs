//! Minimal Manifest V3 extension skeleton.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;

pub const DEFAULT_EXTENSION_DIR: &str = "chromium_extension";

const BACKGROUND_JS: &str = include_str!("../templates/background.js");
const POPUP_HTML: &str = include_str!("../templates/popup.html");

pub struct ScaffoldOptions {
    pub dir: PathBuf,
}

fn manifest() -> serde_json::Value {
    json!({
        "manifest_version": 3,
        "name": "Domain Blocker",
        "version": "1.0.0",
        "description": "Blocks domains from custom blocklist",
        "permissions": ["declarativeNetRequest"],
        "host_permissions": ["<all_urls>"],
        "background": {
            "service_worker": "background.js"
        },
        "action": {
            "default_popup": "popup.html",
            "default_title": "Domain Blocker"
        }
    })
}

/// Create the directory if needed and write `manifest.json`,
/// `background.js` and `popup.html` into it. Existing files are replaced.
pub fn write_extension(opts: &ScaffoldOptions) -> Result<(), String> {
    fs::create_dir_all(&opts.dir)
        .map_err(|e| format!("Failed to create '{}': {}", opts.dir.display(), e))?;

    let manifest_json = serde_json::to_string_pretty(&manifest())
        .map_err(|e| format!("Failed to serialize manifest: {}", e))?;

    let files = [
        ("manifest.json", manifest_json.as_str()),
        ("background.js", BACKGROUND_JS),
        ("popup.html", POPUP_HTML),
    ];

    for (name, contents) in files {
        let path = opts.dir.join(name);
        fs::write(&path, contents)
            .map_err(|e| format!("Failed to write '{}': {}", path.display(), e))?;
        tracing::debug!("wrote {}", path.display());
    }

    Ok(())
}

pub fn load_instructions(dir: &Path) -> String {
    format!(
        "To use the extension:\n\
         1. Go to chrome://extensions/\n\
         2. Enable 'Developer mode'\n\
         3. Click 'Load unpacked' and select the '{}' folder\n\
         4. Load your rules JSON file in the extension\n",
        dir.display()
    )
}
