use std::collections::BTreeSet;
use std::io::{Cursor, Read};

use arbor_archive::Archive;
use bytes::Bytes;

fn read_back(bytes: Vec<u8>) -> zip::ZipArchive<Cursor<Vec<u8>>> {
    zip::ZipArchive::new(Cursor::new(bytes)).expect("produced artifact should be a valid ZIP")
}

#[test]
fn nested_tree_round_trips() {
    let archive = Archive::new();
    let root = archive.root();
    let docs = archive.add_folder(&root, "docs");
    let img = archive.add_folder(&docs, "img");

    archive.add_file(&root, "readme.txt", Bytes::from_static(b"top"));
    archive.add_file(&docs, "guide.md", Bytes::from_static(b"# guide"));
    archive.add_file(&img, "logo.svg", Bytes::from_static(b"<svg/>"));

    let mut zip = read_back(archive.into_zip_bytes().unwrap());

    let names: BTreeSet<String> = zip.file_names().map(String::from).collect();
    assert!(names.contains("readme.txt"));
    assert!(names.contains("docs/guide.md"));
    assert!(names.contains("docs/img/logo.svg"));

    let mut contents = String::new();
    zip.by_name("docs/guide.md")
        .unwrap()
        .read_to_string(&mut contents)
        .unwrap();
    assert_eq!(contents, "# guide");
}

#[test]
fn empty_folder_is_preserved() {
    let archive = Archive::new();
    let root = archive.root();
    archive.add_folder(&root, "empty");

    let zip = read_back(archive.into_zip_bytes().unwrap());
    let names: Vec<&str> = zip.file_names().collect();
    assert_eq!(names, ["empty/"]);
}

#[test]
fn colliding_names_overwrite() {
    let archive = Archive::new();
    let root = archive.root();
    archive.add_file(&root, "a.txt", Bytes::from_static(b"first"));
    archive.add_file(&root, "a.txt", Bytes::from_static(b"second"));

    assert_eq!(archive.file_count(), 1);

    let mut zip = read_back(archive.into_zip_bytes().unwrap());
    let mut contents = String::new();
    zip.by_name("a.txt")
        .unwrap()
        .read_to_string(&mut contents)
        .unwrap();
    assert_eq!(contents, "second");
}

#[test]
fn empty_archive_encodes() {
    let archive = Archive::new();
    let zip = read_back(archive.into_zip_bytes().unwrap());
    assert_eq!(zip.len(), 0);
}

#[test]
fn registering_a_folder_twice_is_a_lookup() {
    let archive = Archive::new();
    let root = archive.root();
    let first = archive.add_folder(&root, "docs");
    let second = archive.add_folder(&root, "docs");
    assert_eq!(first, second);

    let zip = read_back(archive.into_zip_bytes().unwrap());
    assert_eq!(zip.len(), 1);
}
