use axum::http::StatusCode;
use innovation::innovation_models::{User, UserRole};
use innovation::middleware::role::check_admin;
use uuid::Uuid;

fn create_test_user(role: Option<&str>) -> User {
    User {
        id: Uuid::new_v4(),
        email: "test@example.com".to_string(),
        name: "Test User".to_string(),
        role: role.map(UserRole::from),
    }
}

#[test]
fn test_check_admin_allows_admin() {
    let user = create_test_user(Some("admin"));
    assert!(check_admin(Some(&user)).is_ok());
}

#[test]
fn test_check_admin_rejects_other_roles() {
    for role in ["editor", "Admin", "ADMIN", "admin ", ""] {
        let user = create_test_user(Some(role));
        let err = check_admin(Some(&user)).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN, "role {:?}", role);
    }
}

#[test]
fn test_check_admin_rejects_missing_role() {
    let user = create_test_user(None);
    assert_eq!(
        check_admin(Some(&user)).unwrap_err().status,
        StatusCode::FORBIDDEN
    );
}

#[test]
fn test_check_admin_rejects_unknown_user() {
    assert_eq!(check_admin(None).unwrap_err().status, StatusCode::FORBIDDEN);
}
