use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_DIR: &str = "assets/css";
const DIST_DIR: &str = "assets/dist";

/// (entry stylesheet, bundled output) pairs. The shell links `bundle.css`.
const BUNDLES: &[(&str, &str)] = &[("main.css", "bundle.css")];

fn main() {
    // Partials are pulled in through @import, so watch every file
    println!("cargo:rerun-if-changed={CSS_DIR}");
    if let Ok(entries) = fs::read_dir(CSS_DIR) {
        for entry in entries.flatten() {
            println!("cargo:rerun-if-changed={}", entry.path().display());
        }
    }

    fs::create_dir_all(DIST_DIR).expect("Failed to create assets/dist directory");

    let fs_provider = FileProvider::new();
    for (entry, output) in BUNDLES {
        let css = bundle(&fs_provider, &Path::new(CSS_DIR).join(entry));
        fs::write(Path::new(DIST_DIR).join(output), css)
            .unwrap_or_else(|e| panic!("Failed to write {output}: {e}"));
    }
}

/// Inline the @imports of `entry` and minify the result
fn bundle(fs_provider: &FileProvider, entry: &Path) -> String {
    let mut bundler = Bundler::new(fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(entry)
        .unwrap_or_else(|e| panic!("Failed to bundle {}: {e:?}", entry.display()));

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify CSS");

    stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to generate CSS output")
        .code
}
