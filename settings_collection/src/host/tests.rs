//! Tests for host environment adapters.

use std::path::PathBuf;

use rstest::rstest;

use super::*;

#[rstest]
fn current_family_matches_target() {
    assert_eq!(OsFamily::current().is_windows(), cfg!(windows));
    assert_eq!(SystemHost.os_family(), OsFamily::current());
}

#[rstest]
#[case(OsFamily::Windows)]
#[case(OsFamily::Other)]
fn fixed_host_reports_configured_values(#[case] family: OsFamily) {
    let host = FixedHost::new("/home/demo", family);
    assert_eq!(host.home_dir(), Some(PathBuf::from("/home/demo")));
    assert_eq!(host.os_family(), family);
}

#[rstest]
fn empty_home_is_unresolved() {
    let host = FixedHost::new("", OsFamily::Other);
    assert_eq!(host.home_dir(), None);
    assert_eq!(FixedHost::homeless(OsFamily::Other).home_dir(), None);
}

fn family_of(host: impl HostEnvironment) -> OsFamily {
    host.os_family()
}

#[rstest]
fn references_forward_to_the_host() {
    let host = FixedHost::new("/home/demo", OsFamily::Windows);
    let by_ref: &dyn HostEnvironment = &host;
    assert_eq!(family_of(by_ref), OsFamily::Windows);
    assert_eq!(family_of(&host), OsFamily::Windows);
}
