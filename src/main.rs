use anyhow::Result;
use clap::Parser;

use commitver::analyzer::{aggregate, CommitClassifier, ReleaseOptions, VersionCalculator};
use commitver::boundary::BoundaryWarning;
use commitver::config;
use commitver::domain::{Bump, TagHistory, TagPattern, Version};
use commitver::git::{Git2Repository, Repository};
use commitver::ui;
use commitver::CommitverError;

#[derive(clap::Parser)]
#[command(
    name = "commitver",
    about = "Determine the next version from conventional commits and tag it"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Git remote to fetch from and push to")]
    remote: Option<String>,

    #[arg(long, value_name = "ID", help = "Attach a manual pre-release identifier")]
    pre_release: Option<String>,

    #[arg(long, help = "Release-candidate flow with auto-incrementing rc counter")]
    rc: bool,

    #[arg(long, value_name = "META", help = "Attach build metadata verbatim")]
    build: Option<String>,

    #[arg(long, help = "Force at least a patch bump")]
    force_patch: bool,

    #[arg(long, help = "Demote a major bump to minor (pre-1.0 projects)")]
    no_major: bool,

    #[arg(short, long, help = "Skip confirmation prompts")]
    force: bool,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("commitver {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let pattern = match TagPattern::new(&config.tag_pattern) {
        Ok(pattern) => pattern,
        Err(e) => {
            ui::display_error(&format!("Invalid tag pattern: {}", e));
            std::process::exit(1);
        }
    };

    let remote = args.remote.clone().unwrap_or_else(|| config.remote.clone());

    let options = ReleaseOptions {
        pre_release: args.pre_release.clone(),
        rc: args.rc,
        build: args.build.clone(),
        force_patch: args.force_patch,
        no_major: args.no_major,
    };

    // Initialize git operations
    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    // Fetch latest tags and commits so the history is current
    if !config.behavior.skip_fetch {
        ui::display_status(&format!("Fetching latest data from '{}'...", remote));
        match repo.fetch_from_remote(&remote) {
            Ok(()) => ui::display_success("Fetched latest data from remote"),
            Err(e) => {
                let warning = BoundaryWarning::FetchFailed {
                    remote: remote.clone(),
                    reason: e.to_string(),
                };
                ui::display_boundary_warning(&warning);
            }
        }
    }

    // Build the tag history in ancestry order
    let tag_names = match repo.tags_in_ancestry() {
        Ok(names) => names,
        Err(e) => {
            ui::display_error(&format!("Failed to read tags: {}", e));
            std::process::exit(1);
        }
    };
    let history = TagHistory::from_names(&tag_names, &pattern);

    for tag in history.skipped() {
        ui::display_boundary_warning(&BoundaryWarning::UnparsableTag { tag: tag.clone() });
    }

    // Commit range: everything since the last stable tag, or everything
    // for an initial release
    let base = history.latest_stable();
    let base_tag_name = base.map(|t| t.name.clone());

    let commits = match repo.commits_since(base_tag_name.as_deref()) {
        Ok(commits) => commits,
        Err(e) => {
            ui::display_error(&format!("Failed to read commits: {}", e));
            std::process::exit(1);
        }
    };

    let commit_messages: Vec<String> = commits.iter().map(|c| c.message.clone()).collect();

    if commits.is_empty() {
        if let Some(tag) = base_tag_name.as_deref() {
            let head_hash = repo
                .head_oid()
                .map(|oid| oid.to_string())
                .unwrap_or_else(|_| "unknown".to_string());
            let warning = BoundaryWarning::NoNewCommits {
                latest_tag: tag.to_string(),
                current_commit_hash: head_hash,
            };
            ui::display_boundary_warning(&warning);

            if !args.force && !args.dry_run && !ui::confirm_action("Continue with no new commits?")?
            {
                println!("Operation cancelled by user.");
                return Ok(());
            }
        }
    }

    ui::display_commit_analysis(&commit_messages, base_tag_name.as_deref());

    // Classify commits and surface per-commit warnings once
    let classifier = CommitClassifier::new(config.clone());
    let classification = classifier.classify(&commit_messages);
    ui::display_classify_warnings(&classification.warnings);

    // An in-flight pre-release with no numeric delta cannot tell us which
    // bump produced it; say so before the calculator recomputes
    if let Some(base) = base {
        if let Some(pre_tag) = history.latest_prerelease_after(base) {
            if Bump::between(&base.version, &pre_tag.version) == Bump::None {
                ui::display_boundary_warning(&BoundaryWarning::AmbiguousPreRelease {
                    tag: pre_tag.name.clone(),
                    base: base.name.clone(),
                });
            }
        }
    }

    // Determine the new version
    let calculator = VersionCalculator::new(config.clone());
    let new_version: Version =
        match calculator.determine_new_version(&history, &classification.commits, &options) {
            Ok(version) => version,
            Err(CommitverError::NoVersionChange) => {
                ui::display_status("No commit in range justifies a version bump. Nothing to release.");
                return Ok(());
            }
            Err(CommitverError::MissingBaseTag) => {
                ui::display_status("No version tags found in history.");
                if !args.force
                    && !args.dry_run
                    && !ui::confirm_action("Create initial release 0.1.0?")?
                {
                    println!("Operation cancelled by user.");
                    return Ok(());
                }
                match calculator.initial_version(&options) {
                    Ok(version) => version,
                    Err(e) => {
                        ui::display_error(&format!("Failed to build initial version: {}", e));
                        std::process::exit(1);
                    }
                }
            }
            Err(e) => {
                ui::display_error(&format!("Version determination failed: {}", e));
                std::process::exit(1);
            }
        };

    let bump = calculator.effective_bump(&classification.commits, &options);
    let new_tag = pattern.format(&new_version);

    ui::display_proposed_tag(base_tag_name.as_deref(), &new_tag, bump);

    // Changelog preview from the same classified commits; warnings were
    // already shown above, so the list is simply not re-displayed
    let sections = aggregate(&classification.commits);
    ui::display_changelog(&new_tag, &sections);

    if args.dry_run {
        ui::display_status("Dry run:");
        ui::display_success(&format!("  Step 1: would create local tag: {}", new_tag));
        ui::display_success(&format!("  Step 2: would push {} to {}", new_tag, remote));
        return Ok(());
    }

    if !args.force && !ui::confirm_action(&format!("Create tag '{}'?", new_tag))? {
        println!("Tag creation cancelled by user.");
        return Ok(());
    }

    // Create the tag at HEAD
    let head_oid = match repo.head_oid() {
        Ok(oid) => oid,
        Err(e) => {
            ui::display_error(&format!("Cannot resolve HEAD: {}", e));
            std::process::exit(1);
        }
    };

    ui::display_status(&format!("Creating tag: {}", new_tag));
    if let Err(e) = repo.create_tag(&new_tag, head_oid) {
        ui::display_error(&format!("Failed to create tag '{}': {}", new_tag, e));
        std::process::exit(1);
    }
    ui::display_success(&format!("Created tag: {}", new_tag));

    // Push if the user confirms (or in force mode)
    let should_push = if args.force {
        true
    } else {
        ui::confirm_action(&format!("Push tag '{}' to '{}'?", new_tag, remote))?
    };

    if should_push {
        ui::display_status(&format!("Pushing tag: {} to remote", new_tag));
        if let Err(e) = repo.push_tag(&remote, &new_tag) {
            ui::display_error(&format!("Failed to push tag '{}': {}", new_tag, e));
            std::process::exit(1);
        }
        ui::display_success(&format!("Pushed tag: {} to remote", new_tag));
    } else {
        ui::display_status(&format!(
            "Tag created locally. Push later with: git push {} {}",
            remote, new_tag
        ));
    }

    Ok(())
}
