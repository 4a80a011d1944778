//! Fixtures shared by the spawning tests.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

static SPAWN_LOCK: Mutex<()> = Mutex::new(());

/// Serializes writing fake interpreters and spawning them, so no sibling test
/// forks while a script's write handle is still open (ETXTBSY).
pub fn lock() -> MutexGuard<'static, ()> {
    SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Write a `/bin/sh` stand-in for an interpreter at `path`.
///
/// It records `pwd -P` and then each argument, one per line, into `record`,
/// complains on stderr like a real interpreter when its first argument is not
/// a file, and otherwise exits with `exit_code`.
#[cfg(unix)]
pub fn write_fake_interpreter(path: &Path, record: &Path, exit_code: i32) {
    use std::os::unix::fs::PermissionsExt;

    let script = format!(
        "#!/bin/sh\n\
         rec='{rec}'\n\
         pwd -P > \"$rec\"\n\
         for a in \"$@\"; do printf '%s\\n' \"$a\" >> \"$rec\"; done\n\
         if [ ! -f \"$1\" ]; then echo \"can't open file '$1': No such file or directory\" >&2; exit 2; fi\n\
         exit {exit_code}\n",
        rec = record.display(),
    );
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, script).unwrap();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

/// Create `<base>/<env_name>/bin/python` as a fake interpreter; returns its record file.
#[cfg(unix)]
pub fn fake_env_interpreter(base: &Path, env_name: &str, exit_code: i32) -> PathBuf {
    let record = base.join(format!("{env_name}.record"));
    write_fake_interpreter(&base.join(env_name).join("bin").join("python"), &record, exit_code);
    record
}

/// Read back `(cwd, args)` written by a fake interpreter.
#[cfg(unix)]
pub fn read_record(record: &Path) -> (PathBuf, Vec<String>) {
    let content = std::fs::read_to_string(record).unwrap();
    let mut lines = content.lines();
    let cwd = PathBuf::from(lines.next().unwrap());
    (cwd, lines.map(String::from).collect())
}
