//! Startup checks run before the root tree is mounted

use crate::shared::errors::{Result, ShellError};

/// Look up the mount point with `lookup`, failing when the host has none
pub fn locate_mount_point<T>(id: &str, lookup: impl FnOnce(&str) -> Option<T>) -> Result<T> {
    lookup(id).ok_or_else(|| ShellError::MountPointMissing(id.to_string()))
}

/// Verify the host document exposes the element the web renderer attaches to
#[cfg(target_arch = "wasm32")]
pub fn ensure_mount_point() -> Result<()> {
    use crate::config::MOUNT_POINT_ID;

    let document = web_sys::window().and_then(|window| window.document());
    locate_mount_point(MOUNT_POINT_ID, |id| {
        document.and_then(|document| document.get_element_by_id(id))
    })
    .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_point_found() {
        let element = locate_mount_point("main", |id| (id == "main").then_some(42));
        assert_eq!(element, Ok(42));
    }

    #[test]
    fn test_missing_mount_point_is_fatal() {
        let err = locate_mount_point::<()>("main", |_| None).unwrap_err();
        assert_eq!(err, ShellError::MountPointMissing("main".into()));
        assert_eq!(err.to_string(), "Mount point not found in host document: #main");
    }
}
