use std::env;

fn main() {
    // 送信先アドレスはビルド時に固定（実行時には変更できない）
    match env::var("CONTACT_RECIPIENT") {
        Ok(address) if !address.trim().is_empty() => {
            let address = address.trim();
            println!("cargo:warning=CONTACT_RECIPIENT set to {}", address);
            println!("cargo:rustc-env=CONTACT_RECIPIENT={}", address);
        }
        _ => {}
    }

    println!("cargo:rerun-if-env-changed=CONTACT_RECIPIENT");
}
