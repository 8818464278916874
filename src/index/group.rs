// file: src/index/group.rs
// description: department > semester > subject grouping of a note snapshot
// reference: dashboard grouping helpers built on the canonical order

use super::sort::sort_notes;
use crate::models::{Note, SortOrder};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SubjectGroup<'a> {
    pub subject: &'a str,
    pub notes: Vec<&'a Note>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SemesterGroup<'a> {
    pub semester: u32,
    pub subjects: Vec<SubjectGroup<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentGroup<'a> {
    pub department: &'a str,
    pub semesters: Vec<SemesterGroup<'a>>,
}

impl SemesterGroup<'_> {
    pub fn note_count(&self) -> usize {
        self.subjects.iter().map(|s| s.notes.len()).sum()
    }
}

impl DepartmentGroup<'_> {
    pub fn note_count(&self) -> usize {
        self.semesters.iter().map(SemesterGroup::note_count).sum()
    }
}

/// Groups `notes` into a tree whose every level follows the canonical order.
pub fn group_notes(notes: &[Note]) -> Vec<DepartmentGroup<'_>> {
    let sorted = sort_notes(notes, &SortOrder::canonical());
    group_departments(&sorted)
}

fn group_departments<'a>(sorted: &[&'a Note]) -> Vec<DepartmentGroup<'a>> {
    sorted
        .chunk_by(|a, b| a.department == b.department)
        .map(|run| {
            let first: &'a Note = run[0];
            DepartmentGroup {
                department: first.department.as_str(),
                semesters: group_semesters(run),
            }
        })
        .collect()
}

fn group_semesters<'a>(run: &[&'a Note]) -> Vec<SemesterGroup<'a>> {
    run.chunk_by(|a, b| a.semester == b.semester)
        .map(|semester_run| SemesterGroup {
            semester: semester_run[0].semester,
            subjects: group_subjects(semester_run),
        })
        .collect()
}

fn group_subjects<'a>(run: &[&'a Note]) -> Vec<SubjectGroup<'a>> {
    run.chunk_by(|a, b| a.subject == b.subject)
        .map(|subject_run| {
            let first: &'a Note = subject_run[0];
            SubjectGroup {
                subject: first.subject.as_str(),
                notes: subject_run.to_vec(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::test_support::{generate_notes, sample_notes};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_group_tree_shape() {
        let notes = sample_notes();
        let groups = group_notes(&notes);

        let departments: Vec<&str> = groups.iter().map(|g| g.department).collect();
        assert_eq!(departments, vec!["aiml", "core", "cyber"]);

        let core = &groups[1];
        let semesters: Vec<u32> = core.semesters.iter().map(|s| s.semester).collect();
        assert_eq!(semesters, vec![1, 2]);

        let subjects: Vec<&str> = core.semesters[0]
            .subjects
            .iter()
            .map(|s| s.subject)
            .collect();
        assert_eq!(subjects, vec!["C", "Java"]);
    }

    #[test]
    fn test_group_counts_cover_snapshot() {
        let notes = generate_notes(180, 23);
        let groups = group_notes(&notes);

        let total: usize = groups.iter().map(DepartmentGroup::note_count).sum();
        assert_eq!(total, notes.len());
    }

    #[test]
    fn test_group_empty_snapshot() {
        assert!(group_notes(&[]).is_empty());
    }
}
