//! Output stream detection

use is_terminal::IsTerminal;

use crate::ui::style::Style;

const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "CIRCLECI",
    "JENKINS_HOME",
];

const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

/// Facts about the environment assetgen prints into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal {
    pub tty: bool,
    pub no_color: bool,
    pub dumb: bool,
    pub ci: bool,
    pub ascii_locale: bool,
}

impl Terminal {
    /// Inspect stdout and the process environment.
    pub fn detect() -> Self {
        Self::from_env(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
    }

    fn from_env(var: impl Fn(&str) -> Option<String>, tty: bool) -> Self {
        let dumb = var("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
        // First locale variable that is set wins.
        let ascii_locale = LOCALE_VARS
            .iter()
            .find_map(|k| var(*k))
            .is_some_and(|v| v.eq_ignore_ascii_case("c") || v.eq_ignore_ascii_case("posix"));

        Self {
            tty,
            no_color: var("NO_COLOR").is_some(),
            dumb,
            ci: CI_VARS.iter().any(|k| var(*k).is_some()),
            ascii_locale,
        }
    }

    /// Colour needs a real, non-dumb terminal outside CI with NO_COLOR unset.
    pub fn style(&self) -> Style {
        Style {
            color: self.tty && !self.dumb && !self.no_color && !self.ci,
            unicode: !self.dumb && !self.ascii_locale,
        }
    }
}
