//! Unit tests for flag declaration, help rendering and value validation.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};
use test_helpers::sandbox::Sandbox;

use super::FlagSpec;
use crate::constraint::bits;
use crate::error::{ErrorKind, Subject};
use crate::{DeclarationError, ValidationError};

fn flag(mask: i32) -> FlagSpec {
    FlagSpec::from_bits("count", "c", "COUNT", "How many", mask).expect("legal declaration")
}

fn kind_of(result: Result<(), ValidationError>) -> Option<ErrorKind> {
    result.err().map(|err| err.kind())
}

#[fixture]
fn sandbox() -> Sandbox {
    Sandbox::new().expect("create sandbox")
}

#[test]
fn rejects_empty_name() {
    let result: Result<FlagSpec, _> = FlagSpec::from_bits("", "x", "X", "", bits::STRING);
    assert!(matches!(result, Err(DeclarationError::EmptyName)));
}

#[rstest]
#[case::with_alias("o", "  -o,\t --output FILE \tWhere to write\n")]
#[case::without_alias("", "  \t --output FILE \tWhere to write\n")]
fn describes_help_line(#[case] alias: &str, #[case] expected: &str) {
    let spec: FlagSpec =
        FlagSpec::from_bits("output", alias, "FILE", "Where to write", bits::STRING)
            .expect("legal declaration");
    assert_eq!(spec.describe(), expected);
}

#[rstest]
#[case(bits::STRING)]
#[case(bits::INT | bits::REQUIRED)]
#[case(bits::BOOL)]
#[case(bits::PATH_DIR | bits::REQUIRED)]
fn both_forms_conflict_regardless_of_type(#[case] mask: i32) {
    let err = flag(mask).validate(false, "1", "2").expect_err("conflict");
    assert_eq!(err.kind(), ErrorKind::ConflictingForms);
    assert_eq!(err.to_string(), "Both -c and --count passed");
}

#[rstest]
#[case(bits::STRING)]
#[case(bits::PATH_FILE)]
#[case(bits::PATH_REGULAR_FILE)]
#[case(bits::PATH_DIR)]
#[case(bits::INT)]
#[case(bits::FLOAT)]
#[case(bits::ALPHANUMERIC)]
fn required_value_types_report_missing(#[case] mask: i32) {
    let spec = flag(mask | bits::REQUIRED);
    assert_eq!(
        spec.validate(false, "", "").map_err(|e| e.to_string()),
        Err("Flag count is missing".to_owned())
    );
    assert_eq!(
        spec.validate(true, "", "").map_err(|e| e.to_string()),
        Err("Argument COUNT is missing".to_owned())
    );
}

#[rstest]
#[case(bits::BOOL)]
#[case(bits::EMAIL)]
#[case(bits::FQDN)]
fn valueless_types_accept_absence_even_when_required(#[case] mask: i32) {
    assert!(flag(mask | bits::REQUIRED).validate(false, "", "").is_ok());
}

#[rstest]
#[case("")]
#[case("anything at all")]
#[case("4.2,,x")]
fn optional_strings_accept_everything(#[case] value: &str) {
    assert!(flag(bits::STRING).validate(false, value, "").is_ok());
}

#[rstest]
#[case(bits::EMAIL, "not an email")]
#[case(bits::FQDN, "not..a..domain")]
#[case(bits::BOOL, "yes")]
fn unchecked_types_accept_any_value(#[case] mask: i32, #[case] value: &str) {
    assert!(flag(mask).validate(false, value, "").is_ok());
}

#[rstest]
#[case("42", None)]
#[case("42,7,100", None)]
#[case("42,", Some(ErrorKind::InvalidValue))]
#[case("4.2", Some(ErrorKind::InvalidValue))]
#[case("", None)]
fn comma_separated_ints(#[case] value: &str, #[case] expected: Option<ErrorKind>) {
    let spec = flag(bits::INT | bits::ALLOW_MANY);
    assert_eq!(kind_of(spec.validate(false, value, "")), expected);
}

#[rstest]
#[case("3.14", None)]
#[case("3", Some(ErrorKind::InvalidValue))]
#[case("", None)]
fn floats(#[case] value: &str, #[case] expected: Option<ErrorKind>) {
    assert_eq!(kind_of(flag(bits::FLOAT).validate(false, value, "")), expected);
}

#[rstest]
#[case("ab-12", None)]
#[case("ab_12", Some(ErrorKind::InvalidValue))]
#[case("ab.12", Some(ErrorKind::InvalidValue))]
fn hyphenated_alphanumerics(#[case] value: &str, #[case] expected: Option<ErrorKind>) {
    let spec = flag(bits::ALPHANUMERIC | bits::ALLOW_HYPHEN);
    assert_eq!(kind_of(spec.validate(false, value, "")), expected);
}

#[test]
fn short_form_value_is_validated() {
    let spec = flag(bits::INT | bits::ALLOW_MANY | bits::MANY_SEPARATOR_COLON);
    assert!(spec.validate(false, "", "1:2:3").is_ok());
    let err = spec.validate(true, "", "1,2").expect_err("wrong separator");
    assert_eq!(err.to_string(), "Argument COUNT has invalid value");
}

#[rstest]
fn path_file_accepts_directories(sandbox: Sandbox) -> Result<()> {
    let dir = sandbox.create_dir("data")?;
    let spec = flag(bits::PATH_FILE | bits::MUST_EXIST);
    ensure!(spec.validate(false, dir.as_str(), "").is_ok(), "directory rejected");
    Ok(())
}

#[rstest]
fn path_file_reports_missing_path(sandbox: Sandbox) -> Result<()> {
    let missing = sandbox.path("missing.txt");
    let err = flag(bits::PATH_FILE)
        .validate(false, missing.as_str(), "")
        .err()
        .ok_or_else(|| anyhow!("missing file accepted"))?;
    ensure!(err.kind() == ErrorKind::PathNotFound, "unexpected {err:?}");
    ensure!(
        err.to_string() == format!("File {missing} from count does not exist"),
        "unexpected message {err}"
    );
    Ok(())
}

#[rstest]
#[case::any_entry(bits::PATH_FILE, "File")]
#[case::regular_file(bits::PATH_REGULAR_FILE, "File")]
#[case::directory(bits::PATH_DIR, "Directory")]
fn path_below_a_file_is_missing(
    sandbox: Sandbox,
    #[case] mask: i32,
    #[case] noun: &str,
) -> Result<()> {
    let file = sandbox.create_file("plain.txt", "")?;
    let nested = file.join("child");
    let err = flag(mask)
        .validate(false, nested.as_str(), "")
        .err()
        .ok_or_else(|| anyhow!("path below a file accepted"))?;
    ensure!(err.kind() == ErrorKind::PathNotFound, "unexpected {err:?}");
    ensure!(
        err.to_string() == format!("{noun} {nested} from count does not exist"),
        "unexpected message {err}"
    );
    Ok(())
}

#[rstest]
fn regular_file_rejects_directory(sandbox: Sandbox) -> Result<()> {
    let dir = sandbox.create_dir("conf.d")?;
    let spec = flag(bits::PATH_REGULAR_FILE | bits::VALID_JSON);
    let err = spec
        .validate(false, dir.as_str(), "")
        .err()
        .ok_or_else(|| anyhow!("directory accepted"))?;
    ensure!(err.kind() == ErrorKind::NotARegularFile, "unexpected {err:?}");
    ensure!(
        err.to_string() == format!("Path {dir} from count is not a regular file"),
        "unexpected message {err}"
    );
    Ok(())
}

#[rstest]
#[case::object(r#"{"a":1}"#, None)]
#[case::array_with_whitespace(" [1, 2, 3]\n", None)]
#[case::bare_keys("{a:1}", Some(ErrorKind::InvalidJson))]
#[case::empty("", Some(ErrorKind::InvalidJson))]
#[case::trailing_garbage(r#"{"a":1} x"#, Some(ErrorKind::InvalidJson))]
fn json_contents(
    sandbox: Sandbox,
    #[case] contents: &str,
    #[case] expected: Option<ErrorKind>,
) -> Result<()> {
    let file = sandbox.create_file("settings.json", contents)?;
    let spec = flag(bits::PATH_REGULAR_FILE | bits::VALID_JSON);
    let outcome = kind_of(spec.validate(false, file.as_str(), ""));
    ensure!(outcome == expected, "expected {expected:?}, got {outcome:?}");
    Ok(())
}

#[rstest]
fn regular_file_without_json_ignores_contents(sandbox: Sandbox) -> Result<()> {
    let file = sandbox.create_file("notes.txt", "{a:1}")?;
    let spec = flag(bits::PATH_REGULAR_FILE | bits::REQUIRED);
    ensure!(spec.validate(false, file.as_str(), "").is_ok(), "contents were parsed");
    Ok(())
}

#[rstest]
fn directory_checks(sandbox: Sandbox) -> Result<()> {
    let dir = sandbox.create_dir("out")?;
    let file = sandbox.create_file("out.txt", "")?;
    let missing = sandbox.path("nowhere");
    let spec = flag(bits::PATH_DIR);

    ensure!(spec.validate(false, dir.as_str(), "").is_ok(), "directory rejected");
    let not_dir = kind_of(spec.validate(false, file.as_str(), ""));
    ensure!(not_dir == Some(ErrorKind::NotADirectory), "got {not_dir:?}");
    let err = spec
        .validate(true, missing.as_str(), "")
        .err()
        .ok_or_else(|| anyhow!("missing directory accepted"))?;
    ensure!(
        err.to_string() == format!("Directory {missing} from COUNT does not exist"),
        "unexpected message {err}"
    );
    Ok(())
}

#[rstest]
fn validation_is_repeatable(sandbox: Sandbox) -> Result<()> {
    let file = sandbox.create_file("input.json", "{a:1}")?;
    let spec = flag(bits::PATH_REGULAR_FILE | bits::VALID_JSON);
    let first = kind_of(spec.validate(false, file.as_str(), ""));
    let second = kind_of(spec.validate(false, file.as_str(), ""));
    ensure!(first == second, "{first:?} != {second:?}");
    Ok(())
}

#[test]
fn labels_follow_subject() {
    let spec = flag(bits::INT);
    assert_eq!(spec.label(Subject::Flag), "count");
    assert_eq!(spec.label(Subject::Argument), "COUNT");
}

#[test]
fn validation_never_invokes_on_match() {
    let calls = std::sync::Arc::new(AtomicUsize::new(0));
    let seen = std::sync::Arc::clone(&calls);
    let spec: FlagSpec<Vec<String>> =
        FlagSpec::from_bits("verbose", "v", "", "Chatty output", bits::BOOL)
            .expect("legal declaration")
            .with_on_match(move |log: &mut Vec<String>| {
                seen.fetch_add(1, Ordering::SeqCst);
                log.push("verbose".to_owned());
            });

    assert!(spec.validate(false, "", "").is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let mut log = Vec::new();
    let callback = spec.on_match().expect("callback attached");
    (**callback)(&mut log);
    assert_eq!(log, vec!["verbose".to_owned()]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
