use std::fs;
use std::path::PathBuf;

use splashgen::{Composer, ComposerConfig, FontSet};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("tests/goldens/expected");
    p.push(name);
    p
}

#[test]
fn golden_splash_logo_matches_fixture() {
    // Built-in font only, so the golden does not depend on the host's fonts.
    // Hashes raw RGBA so encoder upgrades do not churn it.
    let composer = Composer::with_fonts(ComposerConfig::default(), FontSet::built_in());
    let canvas = composer.compose().expect("compose");

    let expected_path = golden_path("splash_logo_builtin.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all(expected_path.parent().unwrap()).ok();
        fs::write(&expected_path, canvas.digest()).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    let exp = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
        panic!(
            "unable to read golden {:?} ({}); run with UPDATE_GOLDENS=1 to create it",
            expected_path, e
        )
    });
    assert_eq!(canvas.digest(), exp.trim(), "splash logo pixels drifted from golden");
}
