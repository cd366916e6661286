use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Bake the nearest git tag into the binary for the version label.
    let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .output()
    else {
        return;
    };
    if !output.status.success() {
        return;
    }
    let Ok(tag) = String::from_utf8(output.stdout) else {
        return;
    };
    let tag = tag.trim();
    if !tag.is_empty() {
        println!("cargo:rustc-env=GIT_TAG={tag}");
    }
}
