//! The fixed list of repositories the workspace is built from

use hawai_core::RepoSpec;

/// Redox OS foundation repositories (official GitLab).
pub const REDOX_REPOS: &[(&str, &str)] = &[
    ("https://gitlab.redox-os.org/redox-os/redox.git", "redox"),
    ("https://gitlab.redox-os.org/redox-os/kernel.git", "kernel"),
    ("https://gitlab.redox-os.org/redox-os/relibc.git", "relibc"),
    ("https://gitlab.redox-os.org/redox-os/redoxfs.git", "redoxfs"),
    ("https://gitlab.redox-os.org/redox-os/drivers.git", "drivers"),
    ("https://gitlab.redox-os.org/redox-os/bootloader.git", "bootloader"),
    ("https://gitlab.redox-os.org/redox-os/installer.git", "installer"),
    ("https://gitlab.redox-os.org/redox-os/pkgutils.git", "pkgutils"),
    ("https://gitlab.redox-os.org/redox-os/ion.git", "ion"),
    ("https://gitlab.redox-os.org/redox-os/orbital.git", "orbital"),
    ("https://gitlab.redox-os.org/redox-os/orbclient.git", "orbclient"),
    ("https://gitlab.redox-os.org/redox-os/orbutils.git", "orbutils"),
    ("https://gitlab.redox-os.org/redox-os/cookbook.git", "cookbook"),
];

/// Framework repositories cloned under Hawai names: Junita (iced), the
/// Cirrus Engine (bevy), and the Linfa ML framework.
pub const FRAMEWORK_REPOS: &[(&str, &str)] = &[
    ("https://github.com/iced-rs/iced.git", "junita"),
    ("https://github.com/bevyengine/bevy.git", "cirrus-engine"),
    ("https://github.com/rust-ml/linfa.git", "linfa"),
];

pub fn redox_repos() -> Vec<RepoSpec> {
    REDOX_REPOS
        .iter()
        .map(|(url, name)| RepoSpec::new(*url, *name))
        .collect()
}

pub fn framework_repos() -> Vec<RepoSpec> {
    FRAMEWORK_REPOS
        .iter()
        .map(|(url, name)| RepoSpec::new(*url, *name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foundation_has_thirteen_repositories() {
        assert_eq!(redox_repos().len(), 13);
    }

    #[test]
    fn destination_names_are_unique() {
        let mut names: Vec<&str> = REDOX_REPOS
            .iter()
            .chain(FRAMEWORK_REPOS)
            .map(|(_, name)| *name)
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
