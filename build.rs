fn main() {
    // ビルド時刻を埋め込み、バージョン表示に使う
    let built_at = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", built_at);

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/");
}
