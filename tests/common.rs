use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

/// Get a Command for notesim, isolated from the user's config directory
pub fn notesim(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("notesim");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("NOTESIM_LOG");
    cmd
}

/// Write a file under `dir`, creating parent directories
pub fn write_note(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A target note plus related, unrelated, and ignored candidates under `notes/`
#[allow(dead_code)]
pub fn create_notes(dir: &Path) {
    write_note(
        dir,
        "notes/target.md",
        "# Graph theory\nGraphs have nodes and edges. Paths connect nodes.\n",
    );
    write_note(
        dir,
        "notes/close.md",
        "# Graph theory\nNodes, edges, and paths through graphs.\n\n# Cooking\nPasta with basil.\n",
    );
    write_note(
        dir,
        "notes/far.md",
        "# Cooking\nPasta with tomato and basil.\n",
    );
    write_note(dir, "notes/skip.txt", "graph nodes edges");
}
