//! Tests against the compiled binary: exit codes and signal handling.

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

mod common;

const BIN: &str = env!("CARGO_BIN_EXE_devops-info-service");

fn service_command(port: &str) -> Command {
    let mut cmd = Command::new(BIN);
    cmd.env_clear()
        .env("HOST", "127.0.0.1")
        .env("PORT", port)
        .env("LOG_LEVEL", "error")
        .stdout(Stdio::null())
        .stderr(Stdio::piped());
    cmd
}

#[test]
fn test_invalid_port_exits_with_code_1() {
    let output = service_command("abc").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("PORT"), "{stderr}");
    assert!(stderr.contains("abc"), "{stderr}");
}

#[test]
fn test_invalid_port_fails_before_startup() {
    let output = service_command("abc")
        .env("LOG_LEVEL", "debug")
        .stdout(Stdio::piped())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    // Logging is never initialized, so nothing reached the bind step.
    assert!(output.stdout.is_empty());
}

#[cfg(unix)]
#[test]
fn test_non_utf8_port_exits_with_code_1() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let output = service_command("5000")
        .env("PORT", OsStr::from_bytes(b"\xff"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("PORT"), "{stderr}");
}

#[test]
fn test_invalid_debug_exits_with_code_1() {
    let output = service_command("5000").env("DEBUG", "perhaps").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("DEBUG"));
}

#[test]
fn test_port_in_use_exits_with_code_1() {
    let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = taken.local_addr().unwrap().port().to_string();

    let output = service_command(&port).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to bind"));
}

#[cfg(unix)]
#[test]
fn test_sigterm_exits_with_code_0() {
    let port = common::free_port();
    let mut child = service_command(&port.to_string()).spawn().unwrap();

    // Wait until the listener accepts connections.
    let deadline = Instant::now() + Duration::from_secs(10);
    while std::net::TcpStream::connect(("127.0.0.1", port)).is_err() {
        assert!(Instant::now() < deadline, "service did not start");
        std::thread::sleep(Duration::from_millis(50));
    }

    let killed = Command::new("kill")
        .arg("-TERM")
        .arg(child.id().to_string())
        .status()
        .unwrap();
    assert!(killed.success());

    let deadline = Instant::now() + Duration::from_secs(15);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break status;
        }
        assert!(Instant::now() < deadline, "service did not stop");
        std::thread::sleep(Duration::from_millis(50));
    };
    assert_eq!(status.code(), Some(0));
}
