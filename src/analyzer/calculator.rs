use crate::config::{BumpWeight, Config};
use crate::domain::{Bump, ParsedCommit, PreRelease, Tag, TagHistory, Version};
use crate::error::{CommitverError, Result};

/// Caller-supplied flags for a version determination run.
#[derive(Debug, Clone, Default)]
pub struct ReleaseOptions {
    /// Manual pre-release identifier to attach (e.g. "beta1", "nightly").
    pub pre_release: Option<String>,
    /// Auto-incrementing release-candidate flow (rc0, rc1, ...).
    /// Supersedes `pre_release` when set.
    pub rc: bool,
    /// Opaque build metadata, attached verbatim, never part of the arithmetic.
    pub build: Option<String>,
    /// Force at least a patch bump even when no commit triggers one.
    pub force_patch: bool,
    /// Demote any major bump to minor (projects staying below 1.0.0).
    pub no_major: bool,
}

impl ReleaseOptions {
    fn requests_pre_release(&self) -> bool {
        self.rc || self.pre_release.is_some()
    }
}

/// Computes the next version from tag history, classified commits, and flags.
pub struct VersionCalculator {
    config: Config,
}

impl VersionCalculator {
    /// Create a new version calculator
    pub fn new(config: Config) -> Self {
        VersionCalculator { config }
    }

    /// Highest-severity bump the commit set justifies.
    ///
    /// A breaking commit forces `Major` regardless of its declared type
    /// weight; otherwise the configured weight of each type applies.
    /// Multiple signals never add up; only the strongest one matters.
    pub fn classify_bump(&self, commits: &[ParsedCommit]) -> Bump {
        let mut bump = Bump::None;

        for commit in commits {
            let commit_bump = if commit.breaking {
                Bump::Major
            } else {
                match self.config.weight_of(&commit.r#type) {
                    Some(BumpWeight::Major) => Bump::Major,
                    Some(BumpWeight::Minor) => Bump::Minor,
                    Some(BumpWeight::Patch) => Bump::Patch,
                    Some(BumpWeight::None) | None => Bump::None,
                }
            };

            bump = bump.max(commit_bump);
            if bump == Bump::Major {
                break;
            }
        }

        bump
    }

    /// Bump level after applying the run flags: `force_patch` raises
    /// `None` to `Patch`, `no_major` demotes `Major` to `Minor`.
    pub fn effective_bump(&self, commits: &[ParsedCommit], options: &ReleaseOptions) -> Bump {
        let mut bump = self.classify_bump(commits);
        if bump == Bump::None && options.force_patch {
            bump = Bump::Patch;
        }
        if bump == Bump::Major && options.no_major {
            bump = Bump::Minor;
        }
        bump
    }

    /// Determine the next version.
    ///
    /// `commits` must be the classified commits since the last
    /// non-prerelease tag. Fails with [CommitverError::MissingBaseTag] when
    /// the history holds no stable tag, and with
    /// [CommitverError::NoVersionChange] when nothing in range justifies a
    /// bump and no pre-release is in flight.
    pub fn determine_new_version(
        &self,
        history: &TagHistory,
        commits: &[ParsedCommit],
        options: &ReleaseOptions,
    ) -> Result<Version> {
        let bump = self.effective_bump(commits, options);

        let base = history
            .latest_stable()
            .ok_or(CommitverError::MissingBaseTag)?;
        let in_flight = history.latest_prerelease_after(base);

        let version = if options.requests_pre_release() {
            self.next_pre_release(base, in_flight, bump, options)?
        } else {
            self.next_stable(base, in_flight, bump)?
        };

        Ok(match options.build {
            Some(ref build) => version.with_build(build.as_str()),
            None => version,
        })
    }

    /// Version for an initial release, when no base tag exists yet.
    pub fn initial_version(&self, options: &ReleaseOptions) -> Result<Version> {
        let version = Version::new(0, 1, 0);
        let version = if options.requests_pre_release() {
            version.with_pre_release(self.fresh_identifier(options)?)
        } else {
            version
        };
        Ok(match options.build {
            Some(ref build) => version.with_build(build.as_str()),
            None => version,
        })
    }

    /// Pre-release continuation rule.
    ///
    /// With a pre-release already in flight, a bump no higher than the one
    /// that produced it only advances the identifier; a strictly higher
    /// bump recomputes the numeric version from base and resets the rc
    /// counter. The prior bump is derived from the numeric delta between
    /// the pre-release tag and the base; an ambiguous (zero) delta forces
    /// a recompute.
    fn next_pre_release(
        &self,
        base: &Tag,
        in_flight: Option<&Tag>,
        bump: Bump,
        options: &ReleaseOptions,
    ) -> Result<Version> {
        if let Some(pre_tag) = in_flight {
            let prior_bump = Bump::between(&base.version, &pre_tag.version);

            if prior_bump != Bump::None && bump <= prior_bump {
                let identifier = self.continued_identifier(pre_tag, options)?;
                return Ok(pre_tag.version.numeric().with_pre_release(identifier));
            }

            return Ok(base
                .version
                .bump(bump)
                .with_pre_release(self.fresh_identifier(options)?));
        }

        if bump == Bump::None {
            return Err(CommitverError::NoVersionChange);
        }

        Ok(base
            .version
            .bump(bump)
            .with_pre_release(self.fresh_identifier(options)?))
    }

    /// Stable release rule: an in-flight pre-release whose bump covers the
    /// new one is finalized by stripping its identifier, with no numeric
    /// increment purely to stabilize.
    fn next_stable(&self, base: &Tag, in_flight: Option<&Tag>, bump: Bump) -> Result<Version> {
        if let Some(pre_tag) = in_flight {
            let prior_bump = Bump::between(&base.version, &pre_tag.version);
            if prior_bump != Bump::None && bump <= prior_bump {
                return Ok(pre_tag.version.numeric());
            }
        }

        if bump == Bump::None {
            return Err(CommitverError::NoVersionChange);
        }

        Ok(base.version.bump(bump))
    }

    /// Identifier for a pre-release continuing an in-flight one.
    fn continued_identifier(&self, pre_tag: &Tag, options: &ReleaseOptions) -> Result<PreRelease> {
        if options.rc {
            // counter only continues within the rc flow
            return Ok(match pre_tag.version.pre_release {
                Some(ref pre) if pre.is_rc() => pre.increment(),
                _ => PreRelease::rc(0),
            });
        }
        self.manual_identifier(options)
    }

    /// Identifier for a pre-release starting a new cycle.
    fn fresh_identifier(&self, options: &ReleaseOptions) -> Result<PreRelease> {
        if options.rc {
            return Ok(PreRelease::rc(0));
        }
        self.manual_identifier(options)
    }

    fn manual_identifier(&self, options: &ReleaseOptions) -> Result<PreRelease> {
        options
            .pre_release
            .as_deref()
            .ok_or_else(|| CommitverError::version("No pre-release identifier requested"))?
            .parse()
    }
}
