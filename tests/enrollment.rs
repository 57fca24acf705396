#[allow(dead_code)]
mod utils;

use utils::prelude::*;

mod enroll {
    use super::*;
    use entity::event_enrollments;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn success() {
        let app = App::new().await;
        let owner = app.register_user().await;
        let attendee = app.register_user().await;
        let location = app.create_event_location(&owner, 10).await;
        let event = app.create_event(&owner, location.id, json!({})).await;
        let id = event["id"].as_i64().unwrap();

        let res = app
            .post(&format!("/api/event/{id}/enrollment"))
            .user(&attendee)
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = res.json().await;
        assert_eq!(body["id_event"], id);
        assert_eq!(body["id_user"], attendee.id);
    }

    #[tokio::test]
    async fn requires_auth() {
        let app = App::new().await;

        let res = app.post("/api/event/1/enrollment").send().await;

        assert_error!(res, error::COULD_NOT_GET_CLAIMS);
    }

    #[tokio::test]
    async fn missing_event() {
        let app = App::new().await;
        let user = app.register_user().await;

        let res = app
            .post("/api/event/9999/enrollment")
            .user(&user)
            .send()
            .await;

        assert_error!(res, error::EVENT_NOT_FOUND);
    }

    #[tokio::test]
    async fn closed_on_the_event_day() {
        let app = App::new().await;
        let owner = app.register_user().await;
        let attendee = app.register_user().await;
        let location = app.create_event_location(&owner, 10).await;
        let event = app
            .create_event(&owner, location.id, json!({ "start_date": later_today() }))
            .await;
        let id = event["id"].as_i64().unwrap();

        let res = app
            .post(&format!("/api/event/{id}/enrollment"))
            .user(&attendee)
            .send()
            .await;

        assert_error!(res, error::EVENT_ALREADY_STARTED);
    }

    #[tokio::test]
    async fn closed_after_the_event() {
        let app = App::new().await;
        let owner = app.register_user().await;
        let attendee = app.register_user().await;
        let location = app.create_event_location(&owner, 10).await;
        let event = app
            .create_event(
                &owner,
                location.id,
                json!({ "start_date": days_from_now(-3) }),
            )
            .await;
        let id = event["id"].as_i64().unwrap();

        let res = app
            .post(&format!("/api/event/{id}/enrollment"))
            .user(&attendee)
            .send()
            .await;

        assert_error!(res, error::EVENT_ALREADY_STARTED);
    }

    #[tokio::test]
    async fn date_gate_wins_over_the_enrollment_flag() {
        let app = App::new().await;
        let owner = app.register_user().await;
        let attendee = app.register_user().await;
        let location = app.create_event_location(&owner, 10).await;
        let event = app
            .create_event(
                &owner,
                location.id,
                json!({
                    "start_date": later_today(),
                    "enabled_for_enrollment": false,
                }),
            )
            .await;
        let id = event["id"].as_i64().unwrap();

        let res = app
            .post(&format!("/api/event/{id}/enrollment"))
            .user(&attendee)
            .send()
            .await;

        assert_error!(res, error::EVENT_ALREADY_STARTED);
    }

    #[tokio::test]
    async fn closed_when_disabled() {
        let app = App::new().await;
        let owner = app.register_user().await;
        let attendee = app.register_user().await;
        let location = app.create_event_location(&owner, 10).await;
        let event = app
            .create_event(
                &owner,
                location.id,
                json!({ "enabled_for_enrollment": false }),
            )
            .await;
        let id = event["id"].as_i64().unwrap();

        let res = app
            .post(&format!("/api/event/{id}/enrollment"))
            .user(&attendee)
            .send()
            .await;

        assert_error!(res, error::ENROLLMENT_CLOSED);
    }

    #[tokio::test]
    async fn duplicate() {
        let app = App::new().await;
        let owner = app.register_user().await;
        let attendee = app.register_user().await;
        let location = app.create_event_location(&owner, 10).await;
        let event = app.create_event(&owner, location.id, json!({})).await;
        let id = event["id"].as_i64().unwrap();

        let res = app
            .post(&format!("/api/event/{id}/enrollment"))
            .user(&attendee)
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let res = app
            .post(&format!("/api/event/{id}/enrollment"))
            .user(&attendee)
            .send()
            .await;

        assert_error!(res, error::ALREADY_ENROLLED);
    }

    #[tokio::test]
    async fn capacity_is_never_exceeded() {
        let app = App::new().await;
        let owner = app.register_user().await;
        let location = app.create_event_location(&owner, 10).await;
        let event = app
            .create_event(&owner, location.id, json!({ "max_assistance": 2 }))
            .await;
        let id = event["id"].as_i64().unwrap();

        for _ in 0..2 {
            let attendee = app.register_user().await;
            let res = app
                .post(&format!("/api/event/{id}/enrollment"))
                .user(&attendee)
                .send()
                .await;
            assert_eq!(res.status(), StatusCode::CREATED);
        }

        let latecomer = app.register_user().await;
        let res = app
            .post(&format!("/api/event/{id}/enrollment"))
            .user(&latecomer)
            .send()
            .await;
        assert_error!(res, error::CAPACITY_FULL);

        let count = event_enrollments::Entity::find_for_event(id as i32)
            .count(&app.db)
            .await
            .unwrap();
        assert_eq!(count, 2);
    }
}

mod withdraw {
    use super::*;
    use chrono::Utc;
    use entity::{event_enrollments, events};
    use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, PaginatorTrait, Set};

    #[tokio::test]
    async fn success() {
        let app = App::new().await;
        let owner = app.register_user().await;
        let attendee = app.register_user().await;
        let location = app.create_event_location(&owner, 10).await;
        let event = app.create_event(&owner, location.id, json!({})).await;
        let id = event["id"].as_i64().unwrap();

        let res = app
            .post(&format!("/api/event/{id}/enrollment"))
            .user(&attendee)
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let res = app
            .delete(&format!("/api/event/{id}/enrollment"))
            .user(&attendee)
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::OK);

        let count = event_enrollments::Entity::find_for_event(id as i32)
            .count(&app.db)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn not_enrolled() {
        let app = App::new().await;
        let owner = app.register_user().await;
        let bystander = app.register_user().await;
        let location = app.create_event_location(&owner, 10).await;
        let event = app.create_event(&owner, location.id, json!({})).await;
        let id = event["id"].as_i64().unwrap();

        let res = app
            .delete(&format!("/api/event/{id}/enrollment"))
            .user(&bystander)
            .send()
            .await;

        assert_error!(res, error::NOT_ENROLLED);
    }

    #[tokio::test]
    async fn missing_event() {
        let app = App::new().await;
        let user = app.register_user().await;

        let res = app
            .delete("/api/event/9999/enrollment")
            .user(&user)
            .send()
            .await;

        assert_error!(res, error::EVENT_NOT_FOUND);
    }

    #[tokio::test]
    async fn frozen_on_the_event_day() {
        let app = App::new().await;
        let owner = app.register_user().await;
        let attendee = app.register_user().await;
        let location = app.create_event_location(&owner, 10).await;
        let event = app.create_event(&owner, location.id, json!({})).await;
        let id = event["id"].as_i64().unwrap();

        let res = app
            .post(&format!("/api/event/{id}/enrollment"))
            .user(&attendee)
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::CREATED);

        // move the event to today behind the API's back
        let model = events::Entity::find_by_id(id as i32)
            .one(&app.db)
            .await
            .unwrap()
            .unwrap();
        let mut active = model.into_active_model();
        active.start_date = Set(Utc::now().naive_utc());
        active.update(&app.db).await.unwrap();

        let res = app
            .delete(&format!("/api/event/{id}/enrollment"))
            .user(&attendee)
            .send()
            .await;
        assert_error!(res, error::EVENT_ALREADY_STARTED);

        // the enrollment survives
        let count = event_enrollments::Entity::find_for_event(id as i32)
            .count(&app.db)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
