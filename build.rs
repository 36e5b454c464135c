use chrono::{Datelike, Utc};

fn main() {
    // the footer's copyright year; stamped once so server render and hydration agree
    println!("cargo:rustc-env=BUILD_YEAR={}", Utc::now().year());
    println!("cargo:rerun-if-changed=build.rs");
}
