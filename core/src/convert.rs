use crate::grammar::is_windows_path;

/// Directory under which interop environments expose host drives.
pub const DEFAULT_MOUNT_ROOT: &str = "/mnt";

/// Convert a Windows drive path (`C:\foo\bar`, `C:/foo/bar`, `C:`) to its
/// mount path under `mount_root` (`/mnt/c/foo/bar`).
/// Returns `None` if the input does not satisfy the Windows path grammar.
pub fn win_path_to_mount(mount_root: &str, path: &str) -> Option<String> {
    if !is_windows_path(path) {
        return None;
    }
    let mut chars = path.chars();
    let drive = chars.next()?.to_ascii_lowercase();
    let rest = chars.as_str().strip_prefix(':')?;
    let tail = rest.replace('\\', "/");
    let tail = tail.strip_prefix('/').unwrap_or(&tail);
    let root = mount_root.trim_end_matches('/');
    if tail.is_empty() {
        return Some(format!("{root}/{drive}"));
    }
    Some(format!("{root}/{drive}/{tail}"))
}

/// Like [`win_path_to_mount`], but hands back the input unchanged when it is
/// not a Windows path. Mount paths never satisfy the grammar, so converting
/// an already converted path is a no-op.
pub fn convert_path_under(mount_root: &str, path: &str) -> String {
    win_path_to_mount(mount_root, path).unwrap_or_else(|| path.to_string())
}

/// [`convert_path_under`] with [`DEFAULT_MOUNT_ROOT`].
pub fn convert_path(path: &str) -> String {
    convert_path_under(DEFAULT_MOUNT_ROOT, path)
}
