//! Entry-name classification
//!
//! The simulation names a root entity's body pose with the bare entity name
//! and a sub-frame as `entity::frame`. Only one sub-frame matters to the
//! relay: the configured camera mount.

/// Scope delimiter between an entity name and a sub-frame's local name
pub const SCOPE_DELIMITER: &str = "::";

/// Classification of one snapshot entry name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind<'a> {
    /// Body pose of a root entity; carries the entity name
    Body(&'a str),
    /// The designated camera-mount sub-frame
    Mount,
    /// Any other sub-frame; ignored by the pipeline
    Other,
}

/// Classify an entry name against the configured mount-frame name.
///
/// Total and side-effect-free: a name without the delimiter is a body pose,
/// everything after the delimiter's first occurrence is the sub-frame's
/// local name, and a local name that is not the mount frame is `Other`,
/// never an error.
pub fn classify<'a>(name: &'a str, mount_frame: &str) -> EntryKind<'a> {
    match name.split_once(SCOPE_DELIMITER) {
        None => EntryKind::Body(name),
        Some((_, local)) if local == mount_frame => EntryKind::Mount,
        Some(_) => EntryKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOUNT: &str = "cgo3_camera_link";

    #[test]
    fn test_bare_name_is_body() {
        assert_eq!(classify("typhoon_h480", MOUNT), EntryKind::Body("typhoon_h480"));
    }

    #[test]
    fn test_matched_mount() {
        assert_eq!(classify("typhoon_h480::cgo3_camera_link", MOUNT), EntryKind::Mount);
    }

    #[test]
    fn test_unmatched_subframe() {
        assert_eq!(classify("typhoon_h480::rotor_0", MOUNT), EntryKind::Other);
    }

    #[test]
    fn test_local_name_is_entire_suffix() {
        // The local name runs to the end of the string, nested delimiters
        // included, so it must match the target exactly.
        assert_eq!(
            classify("typhoon_h480::base::cgo3_camera_link", MOUNT),
            EntryKind::Other
        );
    }

    #[test]
    fn test_empty_local_name() {
        assert_eq!(classify("typhoon_h480::", MOUNT), EntryKind::Other);
        assert_eq!(classify("typhoon_h480::", ""), EntryKind::Mount);
    }

    #[test]
    fn test_leading_delimiter() {
        // No entity prefix; still a sub-frame, matched on the suffix alone.
        assert_eq!(classify("::cgo3_camera_link", MOUNT), EntryKind::Mount);
    }

    #[test]
    fn test_empty_name_is_body() {
        assert_eq!(classify("", MOUNT), EntryKind::Body(""));
    }
}
