fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // ESP-IDF sysenv is only meaningful when building the firmware image.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
