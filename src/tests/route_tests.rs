// taskboard-service/src/tests/route_tests.rs
#[cfg(test)]
mod tests {
    use crate::routes::{
        auth_routes, permission_routes, project_routes, task_routes, team_routes,
    };
    use crate::utils::auth_middleware::Authentication;
    use actix_web::{test, App};
    use serde_json::json;
    use uuid::Uuid;

    #[actix_rt::test]
    async fn register_login_and_team_flow() {
        let app = test::init_service(
            App::new()
                .wrap(Authentication)
                .configure(auth_routes::init_routes)
                .configure(team_routes::init_routes)
                .configure(permission_routes::init_routes),
        )
        .await;

        let email = format!("{}@example.com", Uuid::new_v4());

        let register = test::TestRequest::post()
            .uri("/auth/register")
            .set_json(&json!({
                "name": "Route Tester",
                "email": email,
                "password": "Str0ng!pass"
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, register).await;
        let user_id = body["user"]["id"].as_str().unwrap().to_string();

        let login = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(&json!({
                "email": email,
                "password": "Str0ng!pass"
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, login).await;
        let token = body["token"].as_str().unwrap().to_string();

        // Authenticated identity round-trips
        let me = test::TestRequest::get()
            .uri("/auth/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, me).await;
        assert_eq!(body["user_id"].as_str().unwrap(), user_id);
        assert_eq!(body["role"].as_str().unwrap(), "member");

        // Create a team
        let create = test::TestRequest::post()
            .uri("/teams")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(&json!({ "name": format!("eng-{}", Uuid::new_v4()) }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, create).await;
        let team_id = body["team"]["id"].as_str().unwrap().to_string();

        // Renames are held to the same length limit as creation
        let rename = test::TestRequest::put()
            .uri(&format!("/teams/{}", team_id))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(&json!({ "name": "x".repeat(101) }))
            .to_request();
        let resp = test::call_service(&app, rename).await;
        assert_eq!(resp.status(), 400);

        // As owner, both team-scoped permissions hold
        let perms = test::TestRequest::get()
            .uri(&format!("/permissions?team_id={}", team_id))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, perms).await;
        assert_eq!(body["can_create_tasks"], json!(true));
        assert_eq!(body["can_manage_projects"], json!(true));
        assert_eq!(body["is_global_admin"], json!(false));

        // Without a team, both come back false
        let perms = test::TestRequest::get()
            .uri("/permissions")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, perms).await;
        assert_eq!(body["can_create_tasks"], json!(false));
        assert_eq!(body["can_manage_projects"], json!(false));
    }

    #[actix_rt::test]
    async fn task_creation_respects_team_authorization() {
        let app = test::init_service(
            App::new()
                .wrap(Authentication)
                .configure(auth_routes::init_routes)
                .configure(team_routes::init_routes)
                .configure(task_routes::init_routes),
        )
        .await;

        let email = format!("{}@example.com", Uuid::new_v4());

        let register = test::TestRequest::post()
            .uri("/auth/register")
            .set_json(&json!({
                "name": "Task Tester",
                "email": email,
                "password": "Str0ng!pass"
            }))
            .to_request();
        let _: serde_json::Value = test::call_and_read_body_json(&app, register).await;

        let login = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(&json!({
                "email": email,
                "password": "Str0ng!pass"
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, login).await;
        let token = body["token"].as_str().unwrap().to_string();

        // A plain member cannot create a task without a team
        let unassigned = test::TestRequest::post()
            .uri("/tasks")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(&json!({ "title": "floating task" }))
            .to_request();
        let resp = test::call_service(&app, unassigned).await;
        assert_eq!(resp.status(), 403);

        // Owning a team makes creation within it pass
        let create_team = test::TestRequest::post()
            .uri("/teams")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(&json!({ "name": format!("eng-{}", Uuid::new_v4()) }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, create_team).await;
        let team_id = body["team"]["id"].as_str().unwrap().to_string();

        let create_task = test::TestRequest::post()
            .uri("/tasks")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(&json!({
                "title": "ship the board",
                "priority": "high",
                "team_id": team_id
            }))
            .to_request();
        let resp = test::call_service(&app, create_task).await;
        assert_eq!(resp.status(), 201);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["task"]["team_id"].as_str().unwrap(), team_id);
        assert_eq!(body["task"]["status"].as_str().unwrap(), "todo");
    }

    #[actix_rt::test]
    async fn task_update_revalidates_merged_links() {
        let app = test::init_service(
            App::new()
                .wrap(Authentication)
                .configure(auth_routes::init_routes)
                .configure(team_routes::init_routes)
                .configure(project_routes::init_routes)
                .configure(task_routes::init_routes),
        )
        .await;

        let email = format!("{}@example.com", Uuid::new_v4());

        let register = test::TestRequest::post()
            .uri("/auth/register")
            .set_json(&json!({
                "name": "Update Tester",
                "email": email,
                "password": "Str0ng!pass"
            }))
            .to_request();
        let _: serde_json::Value = test::call_and_read_body_json(&app, register).await;

        let login = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(&json!({
                "email": email,
                "password": "Str0ng!pass"
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, login).await;
        let token = body["token"].as_str().unwrap().to_string();

        let create_team_a = test::TestRequest::post()
            .uri("/teams")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(&json!({ "name": format!("eng-{}", Uuid::new_v4()) }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, create_team_a).await;
        let team_a = body["team"]["id"].as_str().unwrap().to_string();

        let create_team_b = test::TestRequest::post()
            .uri("/teams")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(&json!({ "name": format!("ops-{}", Uuid::new_v4()) }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, create_team_b).await;
        let team_b = body["team"]["id"].as_str().unwrap().to_string();

        // Project assigned to team A only
        let create_project = test::TestRequest::post()
            .uri("/projects")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(&json!({
                "name": format!("api-{}", Uuid::new_v4()),
                "team_ids": [team_a]
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, create_project).await;
        let project_id = body["project"]["id"].as_str().unwrap().to_string();

        // Task lives in team B, no project
        let create_task = test::TestRequest::post()
            .uri("/tasks")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(&json!({
                "title": "cross-team task",
                "team_id": team_b
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, create_task).await;
        let task_id = body["task"]["id"].as_str().unwrap().to_string();

        // Changing only the project re-validates against the task's current
        // team, which the project's team list excludes
        let link_project = test::TestRequest::put()
            .uri(&format!("/tasks/{}", task_id))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(&json!({ "project_id": project_id }))
            .to_request();
        let resp = test::call_service(&app, link_project).await;
        assert_eq!(resp.status(), 422);

        // An explicit null team plus a single-team project re-derives the
        // team from the project
        let relink = test::TestRequest::put()
            .uri(&format!("/tasks/{}", task_id))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(&json!({ "team_id": null, "project_id": project_id }))
            .to_request();
        let resp = test::call_service(&app, relink).await;
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["task"]["team_id"].as_str().unwrap(), team_a);
        assert_eq!(body["task"]["project_id"].as_str().unwrap(), project_id);
    }

    #[actix_rt::test]
    async fn requests_without_a_token_are_rejected() {
        let app = test::init_service(
            App::new()
                .wrap(Authentication)
                .configure(team_routes::init_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/teams").to_request();
        let resp = test::try_call_service(&app, req).await;
        assert!(resp.is_err());
    }
}
