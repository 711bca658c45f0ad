#![no_main]

use fingervote::assets::AssetManifest;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parse arbitrary bytes as a manifest and run the structural checks;
    // validation must reject malformed manifests without panicking
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(manifest) = serde_json::from_str::<AssetManifest>(s) {
            let _ = manifest.validate_counts();
        }
    }
});
