// Path Explorer
// Path forms, separators, components, and directory listing

use colored::Colorize;
use pairs_and_paths::{
    components_of, list_matching, make_dir_all, remove_empty_dir, separator, walk, FileError,
    PathForms,
};

fn main() -> Result<(), FileError> {
    // =========================================================================
    // Part 1: The forms a path can take
    // =========================================================================

    // ".." as written, anchored to the current directory, and with the dot
    // segments resolved. The canonical form also resolves symlinks, so it
    // only exists for paths that exist.
    let parent = PathForms::inspect("..")?;
    println!("given:     {}", parent.given.display());
    println!("absolute:  {}", parent.absolute.display());
    println!("cleaned:   {}", parent.cleaned.display());
    match &parent.canonical {
        Some(path) => println!("canonical: {}", path.display()),
        None => println!("canonical: <path does not exist>"),
    }

    // Cleaning is purely lexical, so it works for paths yet to be created.
    let planned = PathForms::inspect("demos/./deep/../notes.txt")?;
    println!("planned file cleans to {}", planned.cleaned.display());
    if planned.canonical.is_none() {
        println!("no canonical form yet, nothing on disk");
    }

    println!("platform separator: {:?}", separator());

    // A path decomposes into components, one directory hop at a time.
    for component in components_of(&parent.cleaned) {
        println!("  component: {component}");
    }
    println!("{}", "✓ no disk access needed so far except canonical".green());

    // =========================================================================
    // Part 2: Listing and traversal
    // =========================================================================

    let scratch = tempfile::tempdir()?;

    // mkdir-all builds the missing parents in one call.
    let nested = scratch.path().join("reports/2026/q3");
    make_dir_all(&nested)?;
    std::fs::write(nested.join("summary.txt"), b"fine")?;
    std::fs::write(nested.join("raw.csv"), b"a,b")?;
    std::fs::write(scratch.path().join("readme.txt"), b"hi")?;

    // Immediate children only, filtered by file name.
    let txt_files = list_matching(scratch.path(), |name| name.ends_with(".txt"))?;
    println!("top-level .txt entries: {}", txt_files.len());

    // Recursive traversal sees the whole tree beneath the root.
    let everything = walk(scratch.path())?;
    println!("walked {} entries:", everything.len());
    for path in &everything {
        println!("  {}", path.display());
    }

    // Directory removal insists on emptiness.
    let empty = scratch.path().join("empty");
    make_dir_all(&empty)?;
    remove_empty_dir(&empty)?;
    println!("{}", "✓ listed, walked, and tidied up".green());

    Ok(())
}
