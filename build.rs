use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=CAPSEARCH_ROOT_HINT");

    let hint = env::var("CAPSEARCH_ROOT_HINT").ok();

    if let Some(raw_hint) = hint.filter(|value| !value.trim().is_empty()) {
        let candidate = PathBuf::from(raw_hint);
        let canonical = candidate.canonicalize().unwrap_or(candidate);

        println!("cargo:rustc-env=CAPSEARCH_ROOT_HINT={}", canonical.display());
    }
}
