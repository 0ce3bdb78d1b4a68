//! Template catalog matching.
//!
//! The catalog is queried twice for a composition: once for templates
//! tailored to the requested religious variant, once for the `general`
//! designs that suit any audience. This merges the two result sets,
//! tailored designs first, without showing the same template twice.

use std::collections::HashSet;

use crate::models::Template;

/// Merge variant-specific and general candidates, preserving order and
/// dropping duplicates by id. Variant-specific templates always sort
/// ahead of general ones.
pub fn merge_template_candidates(specific: Vec<Template>, general: Vec<Template>) -> Vec<Template> {
    let mut seen = HashSet::new();
    let mut merged = Vec::with_capacity(specific.len() + general.len());
    for template in specific.into_iter().chain(general) {
        if seen.insert(template.id) {
            merged.push(template);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::template::template_fixture;

    #[test]
    fn specific_templates_come_first() {
        let specific = vec![template_fixture(10, "wedding", "hindu")];
        let general = vec![
            template_fixture(1, "wedding", "general"),
            template_fixture(2, "wedding", "general"),
        ];
        let merged = merge_template_candidates(specific, general);
        let ids: Vec<i32> = merged.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![10, 1, 2]);
    }

    #[test]
    fn duplicates_keep_their_first_occurrence() {
        let specific = vec![
            template_fixture(3, "wedding", "hindu"),
            template_fixture(1, "wedding", "general"),
        ];
        let general = vec![
            template_fixture(1, "wedding", "general"),
            template_fixture(2, "wedding", "general"),
        ];
        let merged = merge_template_candidates(specific, general);
        let ids: Vec<i32> = merged.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn empty_specific_set_yields_general_only() {
        let general = vec![template_fixture(7, "birthday", "general")];
        let merged = merge_template_candidates(Vec::new(), general);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, 7);
    }

    #[test]
    fn both_empty_is_empty() {
        assert!(merge_template_candidates(Vec::new(), Vec::new()).is_empty());
    }
}
