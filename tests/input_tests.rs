//! Integration tests for reading domain lists and classifying whole inputs

use std::io::Write;

use domain_checker::{classify, open_input, read_domain_list, CheckerError, Domain};
use tempfile::NamedTempFile;

fn classify_str(input: &str) -> Result<String, CheckerError> {
    let mut output = Vec::new();
    classify(input.as_bytes(), &mut output)?;
    Ok(String::from_utf8(output).unwrap())
}

#[test]
fn test_classify_scenario() {
    let input = "\
3
kz
com
hawk.ru
5
kz
hawk.ru
tickets.hawk.ru
black_hawk.ru
ru
";
    assert_eq!(
        classify_str(input).unwrap(),
        "Bad\nBad\nBad\nGood\nGood\n"
    );
}

#[test]
fn test_classify_preserves_query_order() {
    let input = "1\nru\n4\ncom\nru\nmail.ru\nru.com\n";
    assert_eq!(classify_str(input).unwrap(), "Good\nBad\nBad\nGood\n");
}

#[test]
fn test_classify_without_trailing_newline() {
    assert_eq!(classify_str("1\nru\n1\nhawk.ru").unwrap(), "Bad\n");
}

#[test]
fn test_classify_truncated_forbidden_list() {
    let err = classify_str("3\nru\ncom\n").unwrap_err();
    assert!(matches!(
        err,
        CheckerError::InsufficientInput {
            expected: 3,
            found: 2
        }
    ));
}

#[test]
fn test_classify_missing_query_section() {
    // missing query count reads as zero queries
    assert_eq!(classify_str("1\nru\n").unwrap(), "");
}

#[test]
fn test_open_input_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "2\nkz\nhawk.ru\n").unwrap();
    file.flush().unwrap();

    let mut reader = open_input(Some(file.path())).unwrap();
    let domains = read_domain_list(&mut reader).unwrap();
    assert_eq!(domains, vec![Domain::new("kz"), Domain::new("hawk.ru")]);
}

#[test]
fn test_classify_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "1\ncom\n2\nexample.com\nexample.org\n").unwrap();
    file.flush().unwrap();

    let reader = open_input(Some(file.path())).unwrap();
    let mut output = Vec::new();
    classify(reader, &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "Bad\nGood\n");
}

#[test]
fn test_open_input_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    match open_input(Some(&path)) {
        Err(CheckerError::OpenInput { path: reported, .. }) => assert_eq!(reported, path),
        Err(e) => panic!("expected OpenInput, got {}", e),
        Ok(_) => panic!("expected OpenInput error"),
    }
}

#[test]
fn test_classify_huge_count_reports_insufficient_input() {
    let input = format!("{}\nru\n", usize::MAX);
    let mut output = Vec::new();
    let err = classify(input.as_bytes(), &mut output).unwrap_err();
    assert!(matches!(
        err,
        CheckerError::InsufficientInput {
            expected: usize::MAX,
            found: 1
        }
    ));
    assert!(output.is_empty());
}

#[test]
fn test_classify_non_utf8_query() {
    let mut output = Vec::new();
    classify(&b"1\nru\n2\nhawk.ru\ncaf\xe9.ru\n"[..], &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "Bad\nBad\n");
}

#[test]
fn test_classify_non_utf8_forbidden_domain() {
    let mut output = Vec::new();
    classify(&b"1\ncaf\xe9.ru\n2\nwww.caf\xe9.ru\ncafe.ru\n"[..], &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "Bad\nGood\n");
}
