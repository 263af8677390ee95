//! Orchestration-service behavior exercised directly against the store,
//! without going through the HTTP surface.

use crate::support::try_test_app;
use gradebook::models::Subject;

#[tokio::test]
async fn created_student_exists() -> anyhow::Result<()> {
    let Some(app) = try_test_app().await? else {
        return Ok(());
    };
    let service = &app.state.gradebook_service;

    let student = service
        .create_student("Chad", "Darby", "chad@x.com")
        .await?;
    assert!(service.student_exists(student.id).await?);
    assert!(!service.student_exists(student.id + 1).await?);
    Ok(())
}

#[tokio::test]
async fn create_grade_gates_on_student_and_range() -> anyhow::Result<()> {
    let Some(app) = try_test_app().await? else {
        return Ok(());
    };
    let service = &app.state.gradebook_service;

    let student = service
        .create_student("Chad", "Darby", "chad@x.com")
        .await?;

    assert!(service.create_grade(80.5, student.id, Subject::Math).await?);
    assert!(service.create_grade(0.0, student.id, Subject::Science).await?);
    assert!(
        service
            .create_grade(100.0, student.id, Subject::History)
            .await?
    );

    assert!(!service.create_grade(105.0, student.id, Subject::Math).await?);
    assert!(!service.create_grade(-5.0, student.id, Subject::Math).await?);
    assert!(!service.create_grade(80.5, student.id + 1, Subject::Math).await?);
    Ok(())
}

#[tokio::test]
async fn delete_grade_returns_the_owning_student() -> anyhow::Result<()> {
    let Some(app) = try_test_app().await? else {
        return Ok(());
    };
    let service = &app.state.gradebook_service;

    let student = service
        .create_student("Chad", "Darby", "chad@x.com")
        .await?;
    service.create_grade(85.0, student.id, Subject::Science).await?;

    let info = service
        .student_information(student.id)
        .await?
        .expect("student information");
    let grade_id = info.grades(Subject::Science)[0].id;

    assert_eq!(
        service.delete_grade(grade_id, Subject::Science).await?,
        Some(student.id)
    );
    // Already gone.
    assert_eq!(service.delete_grade(grade_id, Subject::Science).await?, None);
    Ok(())
}

#[tokio::test]
async fn student_information_reflects_the_store() -> anyhow::Result<()> {
    let Some(app) = try_test_app().await? else {
        return Ok(());
    };
    let service = &app.state.gradebook_service;

    let student = service
        .create_student("Eric", "Roby", "eric@x.com")
        .await?;
    service.create_grade(80.0, student.id, Subject::Math).await?;
    service.create_grade(90.0, student.id, Subject::Math).await?;
    service.create_grade(70.0, student.id, Subject::History).await?;

    let info = service
        .student_information(student.id)
        .await?
        .expect("student information");

    assert_eq!(info.id, student.id);
    assert_eq!(info.first_name, "Eric");
    assert_eq!(info.email, "eric@x.com");
    let math: Vec<f64> = info
        .grades(Subject::Math)
        .iter()
        .map(|g| g.grade)
        .collect();
    assert_eq!(math, vec![80.0, 90.0]);
    assert!(info.grades(Subject::Science).is_empty());
    assert_eq!(info.grades(Subject::History).len(), 1);

    assert!(service.student_information(student.id + 1).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn delete_student_is_a_no_op_for_missing_ids() -> anyhow::Result<()> {
    let Some(app) = try_test_app().await? else {
        return Ok(());
    };
    let service = &app.state.gradebook_service;

    service.delete_student(999999).await?;

    let student = service
        .create_student("Chad", "Darby", "chad@x.com")
        .await?;
    service.create_grade(85.0, student.id, Subject::Math).await?;

    service.delete_student(student.id).await?;
    assert!(!service.student_exists(student.id).await?);
    assert!(service.student_information(student.id).await?.is_none());
    Ok(())
}
