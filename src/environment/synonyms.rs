//! Variable synonym groups.
//!
//! Some tools read a credential under one name and some under another.
//! A [`SynonymGroup`] lists names that must carry the same value, and
//! [`SynonymGroup::normalize`] fills any unset member from the first set one.

use super::layer::{EnvSource, LayeredEnv};

/// Names that downstream consumers treat as interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynonymGroup {
    /// Member names, in lookup priority order.
    pub names: &'static [&'static str],
}

/// GitHub token names read by `git`, `gh` and most CI tooling.
pub const GITHUB_TOKEN_SYNONYMS: SynonymGroup = SynonymGroup {
    names: &["GITHUB_TOKEN", "GH_TOKEN"],
};

/// Groups normalized after the host and credential steps.
pub const DEFAULT_SYNONYM_GROUPS: &[SynonymGroup] = &[GITHUB_TOKEN_SYNONYMS];

impl SynonymGroup {
    /// Fill unset members from the first member that has a value.
    ///
    /// Members that already have a value are left alone. Filled members
    /// inherit the source of the member they were copied from.
    ///
    /// # Example
    ///
    /// ```
    /// use sandenv::environment::{EnvSource, LayeredEnv, GITHUB_TOKEN_SYNONYMS};
    ///
    /// let mut env = LayeredEnv::new();
    /// env.set("GH_TOKEN", "abc", EnvSource::Host);
    /// GITHUB_TOKEN_SYNONYMS.normalize(&mut env);
    ///
    /// assert_eq!(env.get("GITHUB_TOKEN"), Some("abc"));
    /// ```
    pub fn normalize(&self, env: &mut LayeredEnv) {
        let Some((value, source)) = self
            .names
            .iter()
            .find_map(|name| env.entry(name).map(|e| (e.value.clone(), e.source.clone())))
        else {
            return;
        };

        for name in self.names {
            if !env.contains(name) {
                tracing::debug!("Filling {} from synonym", name);
                env.set(*name, value.clone(), source.clone());
            }
        }
    }
}

/// Normalize every group in order.
pub fn normalize_all(groups: &[SynonymGroup], env: &mut LayeredEnv) {
    for group in groups {
        group.normalize(env);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_primary_from_alias() {
        let mut env = LayeredEnv::new();
        env.set("GH_TOKEN", "h", EnvSource::Host);

        GITHUB_TOKEN_SYNONYMS.normalize(&mut env);

        assert_eq!(env.get("GITHUB_TOKEN"), Some("h"));
        assert_eq!(env.source_of("GITHUB_TOKEN"), Some(&EnvSource::Host));
    }

    #[test]
    fn fills_alias_from_primary() {
        let mut env = LayeredEnv::new();
        env.set("GITHUB_TOKEN", "g", EnvSource::Host);

        GITHUB_TOKEN_SYNONYMS.normalize(&mut env);

        assert_eq!(env.get("GH_TOKEN"), Some("g"));
    }

    #[test]
    fn leaves_both_when_already_set() {
        let mut env = LayeredEnv::new();
        env.set("GITHUB_TOKEN", "g", EnvSource::Host);
        env.set("GH_TOKEN", "h", EnvSource::Host);

        GITHUB_TOKEN_SYNONYMS.normalize(&mut env);

        assert_eq!(env.get("GITHUB_TOKEN"), Some("g"));
        assert_eq!(env.get("GH_TOKEN"), Some("h"));
    }

    #[test]
    fn no_members_set_is_noop() {
        let mut env = LayeredEnv::new();
        env.set("OTHER", "x", EnvSource::Host);

        normalize_all(DEFAULT_SYNONYM_GROUPS, &mut env);

        assert_eq!(env.len(), 1);
    }

    #[test]
    fn custom_groups_extend_uniformly() {
        const AWS_REGION_SYNONYMS: SynonymGroup = SynonymGroup {
            names: &["AWS_REGION", "AWS_DEFAULT_REGION"],
        };
        let mut env = LayeredEnv::new();
        env.set("AWS_DEFAULT_REGION", "eu-west-1", EnvSource::Credentials);

        normalize_all(&[GITHUB_TOKEN_SYNONYMS, AWS_REGION_SYNONYMS], &mut env);

        assert_eq!(env.get("AWS_REGION"), Some("eu-west-1"));
        assert!(!env.contains("GITHUB_TOKEN"));
    }
}
