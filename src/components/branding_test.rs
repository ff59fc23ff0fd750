use super::*;

#[test]
fn document_branding_not_mounted_without_browser() {
    assert!(mount_document_branding().is_none());
}
