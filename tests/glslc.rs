//! Drives the real subprocess path, with POSIX `true` and `false` standing in for `glslc`.
#![cfg(unix)]

use shader_build::{scratch::Scratch, Compiler, Config, Driver, Glslc};

fn driver(scratch: &Scratch, program: &str) -> Driver<Glslc> {
    Driver::new(Config::with_root(scratch.path()), Glslc::new(program))
}

#[test]
fn successful_compiler() {
    let scratch = Scratch::new();
    scratch.file("a.vert", 1_000);
    scratch.file("b.frag", 1_000);
    scratch.file("notes.txt", 1_000);

    let report = driver(&scratch, "true").build().unwrap();
    assert_eq!(report.compiled, [scratch.join("a.vert"), scratch.join("b.frag")]);
}

#[test]
fn failing_compiler_aborts() {
    let scratch = Scratch::new();
    scratch.file("a.vert", 1_000);
    scratch.file("b.frag", 1_000);

    let error = driver(&scratch, "false").build().unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("a.vert"), "{message}");
    assert!(!message.contains("b.frag"), "{message}");
}

#[test]
fn fresh_shaders_never_spawn() {
    let scratch = Scratch::new();
    scratch.file("a.vert", 1_000);
    scratch.file("a.vert.spv", 2_000);

    // the program does not exist, so any spawn would fail
    let report = driver(&scratch, "shader_build-missing-compiler")
        .build()
        .unwrap();
    assert!(report.compiled.is_empty());
    assert_eq!(report.up_to_date, [scratch.join("a.vert")]);
}

#[test]
fn glslc_reports_status() {
    let scratch = Scratch::new();
    let source = scratch.file("broken.frag", 1_000);

    let mut glslc = Glslc::new("false");
    let error = glslc
        .compile(&source, &scratch.join("broken.frag.spv"))
        .unwrap_err();
    assert!(error.to_string().contains("broken.frag"));
}
