use std::path::PathBuf;
use std::{env, fs};

// Application core, secure image. The network core image is flashed separately.
const APP_FLASH: (u32, u32) = (0x0000_0000, 1024 * 1024);
const APP_RAM: (u32, u32) = (0x2000_0000, 512 * 1024);

fn main() {
    let memory_x = format!(
        "\
MEMORY
{{
  FLASH : ORIGIN = {:#010x}, LENGTH = {:#08x}
  RAM   : ORIGIN = {:#010x}, LENGTH = {:#08x}
}}
",
        APP_FLASH.0, APP_FLASH.1, APP_RAM.0, APP_RAM.1,
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("memory.x"), memory_x).expect("write memory.x");

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=build.rs");

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    println!("cargo:rustc-link-arg-bins=--print-memory-usage");
}
