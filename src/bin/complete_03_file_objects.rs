// File Objects
// Path construction costs no I/O; status, permissions, create/delete, temp files

use std::path::PathBuf;

use colored::Colorize;
use pairs_and_paths::{create_file, delete_file, temp_file, FileError, FileStatus};

fn main() -> Result<(), FileError> {
    // =========================================================================
    // Part 1: Building a path touches nothing on disk
    // =========================================================================

    // This path does not exist and building it cannot fail; the filesystem
    // is only consulted when we ask a question about it.
    let imaginary = PathBuf::from("nowhere/yet.txt");
    let status = FileStatus::query(&imaginary);
    println!("{} exists={}", imaginary.display(), status.exists);
    println!("{}", "✓ construction performed no disk operation".green());

    // Everything below works inside a scratch directory so the demo leaves
    // no trace behind.
    let scratch = tempfile::tempdir()?;

    // =========================================================================
    // Part 2: Status and permissions of real entries
    // =========================================================================

    let note = scratch.path().join("note.txt");
    std::fs::write(&note, b"twelve bytes")?;

    let status = FileStatus::query(&note);
    println!(
        "file: is_file={} is_dir={} len={}",
        status.is_file, status.is_dir, status.len
    );
    println!(
        "      readable={} writable={} executable={}",
        status.readable, status.writable, status.executable
    );

    // For a directory, executable means its entries can be listed.
    let dir_status = FileStatus::query(scratch.path());
    println!(
        "dir:  is_dir={} listable={}",
        dir_status.is_dir, dir_status.executable
    );

    // =========================================================================
    // Part 3: Create if absent, then delete
    // =========================================================================

    let target = scratch.path().join("fresh.txt");
    if create_file(&target)? {
        println!("{}", "✓ created".green());
    }
    if !create_file(&target)? {
        println!("{}", "already existed, deleting instead".yellow());
        delete_file(&target)?;
        println!("{}", "✓ deleted".green());
    }

    // =========================================================================
    // Part 4: Temp files vanish with their handle
    // =========================================================================

    let temp_path = {
        let temp = temp_file("tmp-", ".txt")?;
        println!("temp file at {}", temp.path().display());
        println!("exists while held: {}", temp.path().exists());
        temp.path().to_path_buf()
    };
    // The handle dropped at the end of the block above.
    println!("exists after drop: {}", temp_path.exists());
    println!("{}", "✓ temp file cleaned itself up".green());

    Ok(())
}
