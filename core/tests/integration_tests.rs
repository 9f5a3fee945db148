use std::io::Write;

use command_args_core::{
    ArgumentError, ArgumentKind, ArgumentValue, SchemaError, Signature, SignatureError,
    TypedArgument, file_arg, path_arg, string_arg,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const KEY: &str = "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG";

fn add_signature() -> Signature {
    Signature::new("add")
        .with_description("Add files to the store")
        .with_arg(string_arg("label", true, false, "label for the upload"))
        .with_arg(
            file_arg("file", true, true, "files to add")
                .enable_stdin()
                .enable_recursive(),
        )
}

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    path
}

// ---------------------------------------------------------------------------
// Signature files
// ---------------------------------------------------------------------------

#[test]
fn test_json_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("add.json");

    let sig = add_signature();
    sig.save(&path).unwrap();

    assert_eq!(Signature::load(&path).unwrap(), sig);
}

#[test]
fn test_yaml_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("add.yaml");

    let sig = add_signature();
    sig.save(&path).unwrap();

    let loaded = Signature::load(&path).unwrap();
    assert_eq!(loaded.usage(), "add <label> <file>...");
    assert!(loaded.find_argument("file").unwrap().recursive);
}

#[test]
fn test_load_handwritten_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "cat.yml",
        "command: cat\narguments:\n  - name: ref\n    kind: structured_path\n    required: true\n    variadic: true\n    supports_stdin: true\n",
    );

    let sig = Signature::load(&path).unwrap();
    let arg = sig.find_argument("ref").unwrap();
    assert_eq!(arg.kind, ArgumentKind::StructuredPath);
    assert!(arg.supports_stdin);
    assert!(!arg.recursive);
    assert_eq!(arg.description, "");
}

#[test]
fn test_load_rejects_misplaced_variadic() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "get.json",
        r#"{"command": "get", "arguments": [
            {"name": "refs", "kind": "structured_path", "required": true, "variadic": true},
            {"name": "out", "kind": "text", "required": false, "variadic": false}
        ]}"#,
    );

    match Signature::load(&path) {
        Err(SignatureError::Invalid(SchemaError::VariadicNotLast(name))) => {
            assert_eq!(name, "refs")
        }
        other => panic!("expected invalid signature, got {other:?}"),
    }
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Signature::load(dir.path().join("absent.json"));
    assert!(matches!(result, Err(SignatureError::IoError(_))));
}

#[test]
fn test_load_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "bad.json", "{ not json");
    assert!(matches!(
        Signature::load(&path),
        Err(SignatureError::JsonError(_))
    ));
}

// ---------------------------------------------------------------------------
// Binding and access
// ---------------------------------------------------------------------------

#[test]
fn test_handler_reads_bound_values() {
    let sig = add_signature();
    let label = sig.find_argument("label").unwrap();
    let file = sig.find_argument("file").unwrap();

    let values = vec![
        ArgumentValue::new("docs", label),
        ArgumentValue::new("a.txt", file),
        ArgumentValue::new("b.txt", file),
    ];
    sig.check_required(&values, false).unwrap();

    assert_eq!(values[0].as_text().unwrap(), ("docs", true));
    let files: Vec<&str> = values[1..]
        .iter()
        .map(|v| v.as_file_handle().unwrap().0)
        .collect();
    assert_eq!(files, ["a.txt", "b.txt"]);
    assert!(values[1].as_text().unwrap_err().is_type_mismatch());
}

#[test]
fn test_missing_required_label() {
    let sig = add_signature();
    let file = sig.find_argument("file").unwrap();

    let err = sig
        .check_required(&[ArgumentValue::new("a.txt", file)], true)
        .unwrap_err();
    assert!(matches!(err, ArgumentError::MissingRequired { name } if name == "label"));
}

#[test]
fn test_typed_path_value() {
    let schema = path_arg("ref", true, false, "object");
    let value = ArgumentValue::new(format!("{KEY}/readme"), &schema);

    match value.typed().unwrap() {
        TypedArgument::StructuredPath(path) => {
            assert_eq!(path.to_string(), format!("/ipfs/{KEY}/readme"));
        }
        other => panic!("expected structured path, got {other:?}"),
    }
}
