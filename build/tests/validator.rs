#![cfg(unix)]

use std::{
    fs::{create_dir_all, read, read_dir, set_permissions, write, Permissions},
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};

use spvbatch_build::{Batch, Error, FailurePolicy, Validator};
use tempfile::tempdir;

fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    set_permissions(&path, Permissions::from_mode(0o755)).unwrap();
    path
}

// Single test so no other test thread forks while a script is still open for
// writing.
#[test]
fn external_tool_convention() {
    let dir = tempdir().unwrap();
    let tools = dir.path().join("tools");
    create_dir_all(&tools).unwrap();
    // Arguments arrive as `-V <input> -o <output>`.
    let copy = script(
        &tools,
        "copy",
        r#"[ "$1" = "-V" ] && [ "$3" = "-o" ] && cp "$2" "$4""#,
    );
    let fail = script(&tools, "fail", "exit 3");

    let source = dir.path().join("shaders");
    let output = source.join("bin");
    create_dir_all(&output).unwrap();
    write(source.join("scene.vert"), "#version 450\n").unwrap();
    write(source.join("scene.frag"), "#version 450\n").unwrap();
    write(source.join("notes.md"), "").unwrap();
    write(output.join("stale.spv"), "").unwrap();

    let batch = Batch::new(&source, &output).sort(true);
    let report = batch.run(&mut Validator::new(&copy)).unwrap();
    assert_eq!(report.succeeded(), 2);
    let mut names: Vec<_> = read_dir(&output)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, ["scene.frag.spv", "scene.vert.spv"]);
    assert_eq!(read(output.join("scene.vert.spv")).unwrap(), b"#version 450\n");

    let report = batch.run(&mut Validator::new(&fail)).unwrap();
    assert_eq!(report.failed(), 2);
    assert_eq!(read_dir(&output).unwrap().count(), 0);

    let error = batch
        .clone()
        .on_failure(FailurePolicy::Abort)
        .run(&mut Validator::new(&fail))
        .unwrap_err();
    assert!(matches!(error, Error::CompileFailed(..)));

    let report = batch
        .run(&mut Validator::new(tools.join("missing")))
        .unwrap();
    assert_eq!(report.failed(), 2);
}
