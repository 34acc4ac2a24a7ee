use crate::domain::ParsedCommit;

/// One changelog line: the scopes a commit touched and its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub scopes: Vec<String>,
    pub description: String,
}

/// All entries of one commit type, in scope-grouped order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogSection {
    pub r#type: String,
    pub entries: Vec<ChangelogEntry>,
}

/// Group classified commits by type, then by scope list.
///
/// Types appear in first-seen order; within a type, entries with the same
/// scope list sit together, scope groups again in first-seen order. Pure
/// grouping, no decision logic.
pub fn aggregate(commits: &[ParsedCommit]) -> Vec<ChangelogSection> {
    let mut sections: Vec<(String, Vec<(Vec<String>, Vec<String>)>)> = Vec::new();

    for commit in commits {
        let section_index = sections
            .iter()
            .position(|(t, _)| *t == commit.r#type)
            .unwrap_or_else(|| {
                sections.push((commit.r#type.clone(), Vec::new()));
                sections.len() - 1
            });
        let groups = &mut sections[section_index].1;

        match groups.iter().position(|(scopes, _)| *scopes == commit.scopes) {
            Some(i) => groups[i].1.push(commit.description.clone()),
            None => groups.push((commit.scopes.clone(), vec![commit.description.clone()])),
        }
    }

    sections
        .into_iter()
        .map(|(r#type, groups)| ChangelogSection {
            r#type,
            entries: groups
                .into_iter()
                .flat_map(|(scopes, descriptions)| {
                    descriptions.into_iter().map(move |description| ChangelogEntry {
                        scopes: scopes.clone(),
                        description,
                    })
                })
                .collect(),
        })
        .collect()
}
