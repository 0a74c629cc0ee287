use std::fs;
use std::path::Path;

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .unwrap();
    } else {
        // No built frontend yet: seed a placeholder so include_dir! has
        // something to embed and API-only builds still compile.
        let placeholder = out_dir.join("dist");
        if !placeholder.join("index.html").exists() {
            fs::create_dir_all(&placeholder).unwrap();
            fs::write(
                placeholder.join("index.html"),
                "<!DOCTYPE html><html><body><p>Frontend not built.</p></body></html>\n",
            )
            .unwrap();
        }
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
