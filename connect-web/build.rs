//! Forwards wallet configuration from `.env` (or the build environment) into
//! compile-time values read with `option_env!` in `src/config.rs`.

const FORWARDED_KEYS: &[&str] = &[
    "INFURA_KEY",
    "RPC_URL_TEMPLATE",
    "WALLET_APP_NAME",
    "WALLET_CHAIN_ID",
    "WALLET_LOG_LEVEL",
];

fn main() {
    // Load .env file if it exists; dotenvy also searches parent directories
    match dotenvy::dotenv() {
        Ok(path) => println!("cargo:rerun-if-changed={}", path.display()),
        Err(_) => println!("cargo:rerun-if-changed=.env"),
    }

    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
        if let Ok(val) = std::env::var(key) {
            println!("cargo:rustc-env={}={}", key, val);
        }
    }

    if std::env::var("INFURA_KEY").map(|v| v.trim().is_empty()).unwrap_or(true) {
        println!("cargo:warning=INFURA_KEY not found in .env or environment; the app will refuse to start");
    }
}
