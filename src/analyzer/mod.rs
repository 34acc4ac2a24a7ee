//! Analysis engine - classification, version determination, changelog grouping

pub mod calculator;
pub mod changelog;
pub mod classifier;

pub use calculator::{ReleaseOptions, VersionCalculator};
pub use changelog::{aggregate, ChangelogEntry, ChangelogSection};
pub use classifier::{Classification, ClassifyWarning, CommitClassifier};
