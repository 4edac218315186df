//! Pure state transitions for the dashboard filter bar.
//!
//! The component itself only holds signals and forwards events; every
//! decision that matters lives here where it can be unit-tested.

use chrono::{Datelike, Utc};
use contracts::dashboard::{Colaborador, DashboardFilterState, FILTER_ALL};

/// Initial filter tuple: January 1st of the current year through today,
/// no branch or collaborator restriction.
pub fn initial_filter_state() -> DashboardFilterState {
    let today = Utc::now().date_naive();
    DashboardFilterState {
        date_from: format!("{:04}-01-01", today.year()),
        date_to: today.format("%Y-%m-%d").to_string(),
        filial: FILTER_ALL.to_string(),
        colaborador: FILTER_ALL.to_string(),
    }
}

/// Options for the collaborator select under the given branch filter, with
/// the "all" sentinel always first.
pub fn colaborador_options(all: &[Colaborador], filial: &str) -> Vec<(String, String)> {
    let mut options = vec![(FILTER_ALL.to_string(), "Todos os colaboradores".to_string())];
    options.extend(
        all.iter()
            .filter(|c| filial == FILTER_ALL || c.filial == filial)
            .map(|c| (c.id.clone(), c.name.clone())),
    );
    options
}

/// Collaborator selection after the branch filter changes.
///
/// If the current selection is no longer listed under the new branch (and is
/// not the sentinel), it resets to "all"; a still-valid selection survives.
/// Called only from the branch-change handler, so a first render can never
/// reset anything.
pub fn colaborador_after_filial_change(
    current: &str,
    all: &[Colaborador],
    new_filial: &str,
) -> String {
    if current == FILTER_ALL {
        return current.to_string();
    }
    let still_listed = all
        .iter()
        .any(|c| c.id == current && (new_filial == FILTER_ALL || c.filial == new_filial));
    if still_listed {
        current.to_string()
    } else {
        FILTER_ALL.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colaborador(id: &str, filial: &str) -> Colaborador {
        Colaborador {
            id: id.to_string(),
            name: id.to_string(),
            initials: "XX".to_string(),
            filial: filial.to_string(),
            sales: 0,
            conversion: "0%".to_string(),
            revenue: "R$ 0".to_string(),
            color: "teal".to_string(),
        }
    }

    fn staff() -> Vec<Colaborador> {
        vec![
            colaborador("ana", "centro"),
            colaborador("bruno", "centro"),
            colaborador("carla", "zona-sul"),
        ]
    }

    #[test]
    fn test_initial_state_uses_sentinels() {
        let state = initial_filter_state();
        assert_eq!(state.filial, FILTER_ALL);
        assert_eq!(state.colaborador, FILTER_ALL);
        assert!(state.date_from.ends_with("-01-01"));
    }

    #[test]
    fn test_options_filtered_by_branch() {
        let options = colaborador_options(&staff(), "centro");
        let ids: Vec<&str> = options.iter().map(|(v, _)| v.as_str()).collect();
        assert_eq!(ids, vec![FILTER_ALL, "ana", "bruno"]);
    }

    #[test]
    fn test_options_all_branches() {
        assert_eq!(colaborador_options(&staff(), FILTER_ALL).len(), 4);
    }

    #[test]
    fn test_excluding_branch_resets_selection() {
        assert_eq!(
            colaborador_after_filial_change("carla", &staff(), "centro"),
            FILTER_ALL
        );
    }

    #[test]
    fn test_valid_selection_survives_branch_change() {
        assert_eq!(
            colaborador_after_filial_change("ana", &staff(), "centro"),
            "ana"
        );
    }

    #[test]
    fn test_all_branches_keeps_current_selection() {
        assert_eq!(
            colaborador_after_filial_change("carla", &staff(), FILTER_ALL),
            "carla"
        );
    }

    #[test]
    fn test_sentinel_selection_never_resets() {
        assert_eq!(
            colaborador_after_filial_change(FILTER_ALL, &staff(), "zona-sul"),
            FILTER_ALL
        );
    }
}
