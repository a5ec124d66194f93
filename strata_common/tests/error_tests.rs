//! Integration tests for the error hierarchy — covers the propagation
//! scenario, prefix accumulation order, errno capture, and subtype
//! declaration via `make_error!`, complementing the inline `mod tests`
//! block in `strata_common::error`.

use strata_common::error::{BaseError, DEFAULT_FAILURE_STATUS, Error, Interrupted, SysError};
use strata_common::make_error;

make_error! {
    /// Failure while realizing a build, local to these tests.
    BuildError, Error
}

/// Test: the canonical propagation scenario — construct, add one outer
/// prefix, observe the displayed message and the default status.
#[test]
fn build_failure_scenario() {
    let mut e = Error::new(format_args!("missing file: {}", "foo.txt"));
    e.add_prefix("while building pkg: ");
    assert_eq!(e.message(), "while building pkg: missing file: foo.txt");
    assert_eq!(e.status, DEFAULT_FAILURE_STATUS);
}

/// Test: the last-applied prefix appears first in the message.
#[test]
fn prefixes_accumulate_outermost_first() {
    let mut e = BaseError::new("original");
    e.add_prefix("p1 ").add_prefix("p2 ");
    assert_eq!(e.message(), "p2 p1 original");
    assert_eq!(e.prefix(), "p2 p1 ");
}

/// Test: the OS error code active immediately before construction is the
/// one captured, and its description is folded into the message.
#[test]
fn sys_error_captures_errno_of_preceding_call() {
    let fd = unsafe { libc::open(c"/strata-test/no/such/file".as_ptr(), libc::O_RDONLY) };
    let err = SysError::new("opening '/strata-test/no/such/file'");

    assert_eq!(fd, -1, "open of a nonexistent path must fail");
    assert_eq!(err.errno, libc::ENOENT);

    let description = std::io::Error::from_raw_os_error(libc::ENOENT).to_string();
    let msg = err.message();
    assert!(
        msg.starts_with("opening '/strata-test/no/such/file': "),
        "got {msg:?}"
    );
    assert!(
        msg.contains(&description),
        "message {msg:?} should contain {description:?}"
    );
    assert_eq!(err.status, DEFAULT_FAILURE_STATUS);
}

/// Test: a subtype declared outside the defining crate forwards the
/// `(message, status)` contract unchanged and upcasts level by level.
#[test]
fn declared_subtype_forwards_and_upcasts() {
    let e = BuildError::with_status("builder exited with code 2", 2);
    assert_eq!(e.status, 2);
    assert_eq!(e.message(), "builder exited with code 2");

    let as_error: Error = e.clone().into();
    assert_eq!(as_error.status, 2);
    assert_eq!(as_error.message(), "builder exited with code 2");

    let as_base: BaseError = e.into();
    assert_eq!(as_base.status, 2);
    assert_eq!(as_base.message(), "builder exited with code 2");
}

/// Test: prefix accumulation and `Display` reach a declared subtype
/// through its deref chain.
#[test]
fn subtype_prefix_through_deref() {
    let mut e = BuildError::new("oops");
    e.add_prefix("while building pkg: ");
    assert_eq!(e.message(), "while building pkg: oops");
    assert_eq!(format!("{e}"), "while building pkg: oops");
}

fn evaluate() -> Result<(), BaseError> {
    Err(Interrupted::new("interrupted by the user").into())
}

/// Test: interruption travels through `BaseError`-typed results; only
/// handlers that accept the root see it.
#[test]
fn interruption_flows_through_base_results() {
    let err = evaluate().unwrap_err();
    assert_eq!(err.message(), "interrupted by the user");
    assert_eq!(err.status, DEFAULT_FAILURE_STATUS);
}

fn read_manifest() -> strata_common::error::Result<String> {
    Err(Error::new("manifest is unreadable"))
}

fn realize() -> strata_common::error::Result<String> {
    let manifest = read_manifest().map_err(|mut e| {
        e.add_prefix("while realizing 'pkg': ");
        e
    })?;
    Ok(manifest)
}

/// Test: `?` propagation through the `Result` alias keeps accumulated
/// context intact.
#[test]
fn question_mark_propagation_keeps_context() {
    let err = realize().unwrap_err();
    assert_eq!(err.message(), "while realizing 'pkg': manifest is unreadable");
}

/// Test: `status` travels with the error unmodified across upcasts and
/// prefix accumulation.
#[test]
fn status_is_carried_unmodified() {
    let mut e = BuildError::with_status("out of disk", 75);
    e.add_prefix("while writing output: ");
    let base: BaseError = e.into();
    assert_eq!(base.status, 75);
    assert_eq!(base.message(), "while writing output: out of disk");
}
