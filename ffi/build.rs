use std::env;
use std::path::PathBuf;

fn main() {
    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into()));
    let include_dir = crate_dir.join("include");
    let header = include_dir.join("todo_store.h");

    println!("cargo:rerun-if-changed=src/lib.rs");
    println!("cargo:rerun-if-changed=src/types.rs");

    match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("TODO_STORE_H")
        .generate()
    {
        Ok(bindings) => {
            if let Err(err) = std::fs::create_dir_all(&include_dir) {
                println!("cargo:warning=cannot create {}: {err}", include_dir.display());
                return;
            }
            bindings.write_to_file(header);
        }
        Err(err) => println!("cargo:warning=cbindgen failed: {err}"),
    }
}
