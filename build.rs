use std::env;
use std::fs;
use std::path::Path;

// Service URLs and flags are read with option_env! in src/config.rs.
// A local .env file is forwarded as rustc-env so `trunk build` picks it up.
fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Real environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, using localhost service URLs (see .env.example)");
    }

    for key in [
        "AUTH_SERVICE_URL",
        "RECOGNITION_SERVICE_URL",
        "ENABLE_LOGGING",
        "TOAST_DURATION_MS",
        "ATTACH_SESSION_TOKEN",
        "INSTITUTE_NAME",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
