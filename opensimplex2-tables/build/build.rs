//! Build script for opensimplex2-tables that generates the gradient and lattice tables.

use std::{env, fs, path::Path, process::Command};

mod gradients;
mod lattice;

const FMT: bool = true;

const GRADIENTS: &str = "gradients";
const LATTICE: &str = "lattice";

/// Main build script entry point that generates the static noise tables.
pub fn main() {
    println!("cargo:rerun-if-changed=build/");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo for build scripts");
    let out_dir = Path::new(&out_dir);

    let content = gradients::build();
    fs::write(out_dir.join(format!("{GRADIENTS}.rs")), content.to_string())
        .expect("Failed to write gradients file");

    let content = lattice::build();
    fs::write(out_dir.join(format!("{LATTICE}.rs")), content.to_string())
        .expect("Failed to write lattice file");

    if FMT {
        for name in [GRADIENTS, LATTICE] {
            let _ = Command::new("rustfmt")
                .arg(out_dir.join(format!("{name}.rs")))
                .output();
        }
    }
}
