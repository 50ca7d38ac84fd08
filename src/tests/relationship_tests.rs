// taskboard-service/src/tests/relationship_tests.rs
#[cfg(test)]
mod tests {
    use crate::models::{GlobalRole, ServiceError};
    use crate::services::relationships::{resolve_project_teams, resolve_task_links};
    use crate::tests::fixtures::{make_project, make_team, make_user};
    use uuid::Uuid;

    #[test]
    fn compatible_team_and_project_pass_through() {
        let owner = make_user(GlobalRole::Member);
        let team = make_team(&owner.id);
        let project = make_project(&owner.id, vec![team.id.clone()]);

        let (team_id, project_id) =
            resolve_task_links(Some(&team.id), Some(&project.id), &owner.id).unwrap();

        assert_eq!(team_id.as_deref(), Some(team.id.as_str()));
        assert_eq!(project_id.as_deref(), Some(project.id.as_str()));
    }

    #[test]
    fn incompatible_pairing_is_rejected() {
        let owner = make_user(GlobalRole::Member);
        let team_a = make_team(&owner.id);
        let team_b = make_team(&owner.id);
        let project = make_project(&owner.id, vec![team_a.id.clone()]);

        let result = resolve_task_links(Some(&team_b.id), Some(&project.id), &owner.id);

        assert!(matches!(
            result,
            Err(ServiceError::IncompatibleAssignment(_))
        ));
    }

    #[test]
    fn project_with_no_teams_accepts_any_owned_team() {
        let owner = make_user(GlobalRole::Member);
        let team = make_team(&owner.id);
        let project = make_project(&owner.id, vec![]);

        let (team_id, project_id) =
            resolve_task_links(Some(&team.id), Some(&project.id), &owner.id).unwrap();

        assert_eq!(team_id.as_deref(), Some(team.id.as_str()));
        assert_eq!(project_id.as_deref(), Some(project.id.as_str()));
    }

    #[test]
    fn single_team_project_auto_assigns_the_team() {
        let owner = make_user(GlobalRole::Member);
        let team = make_team(&owner.id);
        let project = make_project(&owner.id, vec![team.id.clone()]);

        let (team_id, project_id) =
            resolve_task_links(None, Some(&project.id), &owner.id).unwrap();

        assert_eq!(team_id.as_deref(), Some(team.id.as_str()));
        assert_eq!(project_id.as_deref(), Some(project.id.as_str()));
    }

    #[test]
    fn ambiguous_or_teamless_project_leaves_team_unset() {
        let owner = make_user(GlobalRole::Member);
        let team_a = make_team(&owner.id);
        let team_b = make_team(&owner.id);

        let no_teams = make_project(&owner.id, vec![]);
        let (team_id, _) = resolve_task_links(None, Some(&no_teams.id), &owner.id).unwrap();
        assert_eq!(team_id, None);

        let two_teams = make_project(&owner.id, vec![team_a.id.clone(), team_b.id.clone()]);
        let (team_id, _) = resolve_task_links(None, Some(&two_teams.id), &owner.id).unwrap();
        assert_eq!(team_id, None);
    }

    #[test]
    fn both_links_may_be_absent() {
        let owner = make_user(GlobalRole::Member);
        let (team_id, project_id) = resolve_task_links(None, None, &owner.id).unwrap();
        assert_eq!(team_id, None);
        assert_eq!(project_id, None);
    }

    #[test]
    fn unknown_or_foreign_references_are_strict_errors() {
        let owner = make_user(GlobalRole::Member);
        let other = make_user(GlobalRole::Member);
        let foreign_team = make_team(&other.id);
        let foreign_project = make_project(&other.id, vec![]);

        let bogus = Uuid::new_v4().to_string();
        assert!(matches!(
            resolve_task_links(Some(&bogus), None, &owner.id),
            Err(ServiceError::NotFound)
        ));
        assert!(matches!(
            resolve_task_links(None, Some(&bogus), &owner.id),
            Err(ServiceError::NotFound)
        ));

        // Owned by someone else counts as not found, not forbidden
        assert!(matches!(
            resolve_task_links(Some(&foreign_team.id), None, &owner.id),
            Err(ServiceError::NotFound)
        ));
        assert!(matches!(
            resolve_task_links(None, Some(&foreign_project.id), &owner.id),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn project_team_resolution_is_permissive() {
        let owner = make_user(GlobalRole::Member);
        let team_a = make_team(&owner.id);
        let team_b = make_team(&owner.id);

        let candidates = vec![
            team_a.id.clone(),
            team_b.id.clone(),
            team_b.id.clone(),           // duplicate
            "bogus".to_string(),         // malformed id
            Uuid::new_v4().to_string(),  // well-formed but unknown
        ];

        let resolved = resolve_project_teams(&candidates, &owner.id).unwrap();

        assert_eq!(resolved.len(), 2);
        assert!(resolved.contains(&team_a.id));
        assert!(resolved.contains(&team_b.id));
    }

    #[test]
    fn teams_owned_by_someone_else_are_dropped_silently() {
        let owner = make_user(GlobalRole::Member);
        let other = make_user(GlobalRole::Member);
        let mine = make_team(&owner.id);
        let theirs = make_team(&other.id);

        let resolved =
            resolve_project_teams(&[mine.id.clone(), theirs.id.clone()], &owner.id).unwrap();

        assert_eq!(resolved, vec![mine.id]);
    }

    #[test]
    fn empty_candidate_list_resolves_to_empty() {
        let owner = make_user(GlobalRole::Member);
        assert!(resolve_project_teams(&[], &owner.id).unwrap().is_empty());
    }
}
