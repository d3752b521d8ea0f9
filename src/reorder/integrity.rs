use super::types::{ItemId, ListChild, PlaceholderId};

/// Invariant violations of a child sequence, as human-readable issues.
/// Empty means the list is consistent.
///
/// Checked (all ignore host-side nodes still playing their exit animation,
/// which `children()` no longer reports):
/// - at most one placeholder is present;
/// - a placeholder is present exactly when a drag is active, and it is the
///   one the engine holds;
/// - the hidden dragged item is still present in the sequence.
pub(crate) fn list_integrity_issues(
    children: &[ListChild],
    dragged: Option<ItemId>,
    live_placeholder: Option<PlaceholderId>,
) -> Vec<String> {
    let mut issues = Vec::new();

    let placeholders: Vec<PlaceholderId> = children
        .iter()
        .filter_map(|child| match child {
            ListChild::Placeholder(id) => Some(*id),
            ListChild::Item(_) => None,
        })
        .collect();

    if placeholders.len() > 1 {
        issues.push(format!(
            "{} placeholders present, expected at most one",
            placeholders.len()
        ));
    }

    match live_placeholder {
        Some(id) if !placeholders.contains(&id) => {
            issues.push(format!("live placeholder {id} missing from children"));
        }
        None if !placeholders.is_empty() => {
            issues.push("placeholder present without an active drag".to_owned());
        }
        _ => {}
    }

    if let Some(item) = dragged {
        let present = children
            .iter()
            .any(|child| matches!(child, ListChild::Item(id) if *id == item));
        if !present {
            issues.push(format!(
                "dragged item {item:?} was removed from the children instead of hidden"
            ));
        }
    }

    issues
}
