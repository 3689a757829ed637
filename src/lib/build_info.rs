//! Version stamp shown in the sidebar footer and logged at startup.

const UNKNOWN: &str = "unknown";

/// Short commit hash recorded by `build.rs`.
pub fn git_commit_hash() -> &'static str {
    option_env!("BASIC_APP_GIT_SHA")
        .filter(|sha| !sha.is_empty())
        .unwrap_or(UNKNOWN)
}

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// `v<version> · <commit>`, or just the version when the commit is unknown.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub fn label() -> String {
    format_label(version(), git_commit_hash())
}

fn format_label(version: &str, commit: &str) -> String {
    if commit == UNKNOWN {
        format!("v{version}")
    } else {
        format!("v{version} · {commit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_includes_known_commit() {
        assert_eq!(format_label("0.1.0", "abc1234"), "v0.1.0 · abc1234");
    }

    #[test]
    fn label_omits_unknown_commit() {
        assert_eq!(format_label("0.1.0", UNKNOWN), "v0.1.0");
    }
}
