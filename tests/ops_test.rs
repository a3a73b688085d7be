use std::fs;

use fex::ops;
use fex::{EntryKind, FexError};

#[test]
fn list_dir_reports_kinds_and_sizes() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("data.bin"), vec![0u8; 64]).unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();

    let mut entries = ops::list_dir(dir.path()).unwrap();
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "data.bin");
    assert_eq!(entries[0].kind, EntryKind::File);
    assert_eq!(entries[0].size(), Some(64));
    assert_eq!(entries[1].name, "sub");
    assert_eq!(entries[1].kind, EntryKind::Dir);
    assert_eq!(entries[1].size(), None, "size is defined for files only");
}

#[test]
fn list_dir_refuses_files() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    fs::write(&file, "x").unwrap();

    assert!(matches!(
        ops::list_dir(&file),
        Err(FexError::NotADirectory(_))
    ));
}

#[test]
fn read_file_returns_contents() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("hello.txt");
    fs::write(&file, "hello world").unwrap();

    assert_eq!(ops::read_file(&file).unwrap(), b"hello world");
}

#[test]
fn read_file_refuses_directories() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        ops::read_file(dir.path()),
        Err(FexError::IsADirectory(_))
    ));
}

#[test]
fn read_file_reports_missing_paths() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        ops::read_file(&dir.path().join("ghost")),
        Err(FexError::NotFound(_))
    ));
}

#[test]
fn make_dir_creates_parents() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a/b/c");

    ops::make_dir(&nested).unwrap();
    assert!(nested.is_dir());
}

#[test]
fn touch_creates_and_preserves() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("new.txt");

    ops::touch(&file).unwrap();
    assert!(file.is_file());

    fs::write(&file, "content").unwrap();
    ops::touch(&file).unwrap();
    assert_eq!(fs::read_to_string(&file).unwrap(), "content");
}

#[test]
fn copy_file_overwrites_destination() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src.txt");
    let dst = dir.path().join("dst.txt");
    fs::write(&src, "fresh").unwrap();
    fs::write(&dst, "stale").unwrap();

    ops::copy_path(&src, &dst).unwrap();
    assert_eq!(fs::read_to_string(&dst).unwrap(), "fresh");
}

#[test]
fn copy_file_into_directory_keeps_its_name() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src.txt");
    let target = dir.path().join("target");
    fs::write(&src, "payload").unwrap();
    fs::create_dir(&target).unwrap();

    ops::copy_path(&src, &target).unwrap();
    assert_eq!(fs::read_to_string(target.join("src.txt")).unwrap(), "payload");
}

#[test]
fn copy_directory_recursively() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("tree");
    fs::create_dir_all(src.join("deep")).unwrap();
    fs::write(src.join("top.txt"), "1").unwrap();
    fs::write(src.join("deep/leaf.txt"), "2").unwrap();

    let dst = dir.path().join("copy");
    ops::copy_path(&src, &dst).unwrap();

    assert_eq!(fs::read_to_string(dst.join("top.txt")).unwrap(), "1");
    assert_eq!(fs::read_to_string(dst.join("deep/leaf.txt")).unwrap(), "2");
    assert!(src.exists(), "copy must not move");
}

#[test]
fn copy_directory_into_itself_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("tree");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("top.txt"), "1").unwrap();

    assert!(matches!(
        ops::copy_path(&src, &src.join("copy")),
        Err(FexError::DestinationInsideSource(_))
    ));
    assert!(!src.join("copy").exists(), "refusal must not create output");

    assert!(matches!(
        ops::copy_path(&src, &src),
        Err(FexError::DestinationInsideSource(_))
    ));
}

#[test]
fn copy_file_onto_itself_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("keep.txt");
    fs::write(&src, "do not truncate").unwrap();

    // Direct, and via a directory destination that resolves back to src
    assert!(matches!(
        ops::copy_path(&src, &src),
        Err(FexError::DestinationInsideSource(_))
    ));
    assert!(matches!(
        ops::copy_path(&src, dir.path()),
        Err(FexError::DestinationInsideSource(_))
    ));
    assert_eq!(fs::read_to_string(&src).unwrap(), "do not truncate");
}

#[test]
fn move_path_renames() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("old.txt");
    let dst = dir.path().join("new.txt");
    fs::write(&src, "x").unwrap();

    ops::move_path(&src, &dst).unwrap();
    assert!(!src.exists());
    assert!(dst.exists());
}

#[test]
fn remove_path_handles_files_and_empty_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("f.txt");
    let empty = dir.path().join("empty");
    fs::write(&file, "x").unwrap();
    fs::create_dir(&empty).unwrap();

    ops::remove_path(&file).unwrap();
    ops::remove_path(&empty).unwrap();
    assert!(!file.exists());
    assert!(!empty.exists());
}

#[test]
fn remove_path_refuses_non_empty_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let full = dir.path().join("full");
    fs::create_dir(&full).unwrap();
    fs::write(full.join("inside.txt"), "x").unwrap();

    assert!(matches!(
        ops::remove_path(&full),
        Err(FexError::DirNotEmpty(_))
    ));
    assert!(full.join("inside.txt").exists());
}

#[test]
fn stat_reports_size_kind_and_mtime() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("stat.txt");
    fs::write(&file, "12345").unwrap();

    let info = ops::stat_path(&file).unwrap();
    assert_eq!(info.kind, EntryKind::File);
    assert_eq!(info.size, Some(5));
    assert!(info.modified.is_some());
    assert!(info.path.is_absolute());

    let dir_info = ops::stat_path(dir.path()).unwrap();
    assert_eq!(dir_info.kind, EntryKind::Dir);
    assert_eq!(dir_info.size, None);
}

#[cfg(unix)]
#[test]
fn set_mode_applies_octal_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("mode.txt");
    fs::write(&file, "x").unwrap();

    ops::set_mode(&file, "640").unwrap();
    let mode = fs::metadata(&file).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o640);

    let info = ops::stat_path(&file).unwrap();
    assert_eq!(ops::format_mode(info.mode.unwrap()), "rw-r-----");
}

#[test]
fn set_mode_rejects_bad_input() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("mode.txt");
    fs::write(&file, "x").unwrap();

    assert!(matches!(
        ops::set_mode(&file, "banana"),
        Err(FexError::InvalidMode(_))
    ));
    assert!(matches!(
        ops::set_mode(&dir.path().join("ghost"), "755"),
        Err(FexError::NotFound(_))
    ));
}
