use std::env;
use std::fs;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 5] = ["city", "month", "lon", "lat", "sunshine"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("sunshine.csv");

    // Copy sunshine.csv to OUT_DIR for include_str. Without the fixture the
    // app still builds and shows an empty map.
    let src = Path::new("../fixtures/sunshine.csv");
    if src.exists() {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(src)
            .expect("Failed to open sunshine.csv");

        // Fail early on a fixture the app could never load.
        let headers = rdr.headers().expect("sunshine.csv has no header row").clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                panic!("sunshine.csv is missing required column '{}'", column);
            }
        }

        fs::copy(src, &dest).unwrap();
    } else {
        fs::write(&dest, format!("{}\n", REQUIRED_COLUMNS.join(","))).unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/sunshine.csv");
}
