#![allow(clippy::style)]


use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_karatsuba_threshold(&outdir_path, "karatsuba_threshold.rs")?;
    Ok(())
}

/// Create karatsuba_threshold.rs, containing definition of constant KARATSUBA_THRESHOLD
fn write_karatsuba_threshold(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{

    let threshold = env::var("RUST_ZINT_KARATSUBA_THRESHOLD")
        .map(|s| s.parse::<std::num::NonZeroUsize>().expect("$RUST_ZINT_KARATSUBA_THRESHOLD must be an integer > 0"))
        .map(|nz_num| nz_num.get())
        .unwrap_or(25);

    let threshold_rs_path = outdir_path.join(filename);

    let karatsuba_threshold = format!("const KARATSUBA_THRESHOLD: usize = {threshold};");

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&threshold_rs_path) {
        Ok(existing_contents) if existing_contents == karatsuba_threshold => {},
        _ => {
            let mut threshold_rs = File::create(&threshold_rs_path)
                .expect("Could not create karatsuba_threshold.rs");
            write!(threshold_rs, "{karatsuba_threshold}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", threshold_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_ZINT_KARATSUBA_THRESHOLD");

    Ok(())
}
