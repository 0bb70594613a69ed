//! Default candidate paths per operating-system family.

use std::path::{Path, PathBuf};

use crate::host::OsFamily;

const SYSTEM_DIR: &str = "/etc";

/// Platform search list for `file_name`, highest priority first.
///
/// Unix-like hosts search `/etc/<group>`, then `<home>/.<group>`, then the
/// working directory. Windows has no system-wide tier and drops the leading
/// dot. An empty group removes the group component.
pub(super) fn platform_defaults(
    group: &str,
    file_name: &str,
    home: &Path,
    family: OsFamily,
) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);
    match family {
        OsFamily::Other => {
            paths.push(in_group_dir(Path::new(SYSTEM_DIR), group, file_name));
            paths.push(home_candidate(home, &dotted(group), file_name));
        }
        OsFamily::Windows => paths.push(home_candidate(home, group, file_name)),
    }
    paths.push(PathBuf::from(file_name));
    paths
}

/// `dir/<group>/<file_name>`, or `dir/<file_name>` for an empty group.
pub(super) fn in_group_dir(dir: &Path, group: &str, file_name: &str) -> PathBuf {
    if group.is_empty() {
        dir.join(file_name)
    } else {
        dir.join(group).join(file_name)
    }
}

fn home_candidate(home: &Path, dir_name: &str, file_name: &str) -> PathBuf {
    if dir_name.is_empty() {
        home.join(file_name)
    } else {
        home.join(dir_name).join(file_name)
    }
}

fn dotted(group: &str) -> String {
    if group.is_empty() {
        String::new()
    } else {
        format!(".{group}")
    }
}
