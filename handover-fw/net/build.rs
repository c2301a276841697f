use std::path::PathBuf;
use std::{env, fs};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(
        out_dir.join("memory.x"),
        "\
MEMORY
{
  FLASH : ORIGIN = 0x01000000, LENGTH = 256K
  RAM   : ORIGIN = 0x21000000, LENGTH = 64K
}
",
    )
    .expect("write memory.x");

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=build.rs");

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
}
