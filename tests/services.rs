use advocate_directory::domain::advocate::Advocate;
use advocate_directory::domain::filter::FilterState;
use advocate_directory::repository::errors::RepositoryError;
use advocate_directory::repository::mock::MockRepository;
use advocate_directory::services::ServiceError;
use advocate_directory::services::{api as api_service, main as main_service};

fn dataset() -> Vec<Advocate> {
    vec![
        Advocate {
            id: 1,
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            city: "Reno".to_string(),
            degree: "MD".to_string(),
            specialties: vec!["ADHD".to_string(), "Anxiety".to_string()],
            years_of_experience: 10,
            phone_number: 5551234567,
            ..Advocate::default()
        },
        Advocate {
            id: 2,
            first_name: "Bea".to_string(),
            last_name: "Cole".to_string(),
            city: "Fargo".to_string(),
            degree: "PhD".to_string(),
            specialties: vec!["Grief".to_string()],
            years_of_experience: 2,
            phone_number: 5559876543,
            ..Advocate::default()
        },
    ]
}

#[test]
fn load_index_page_filters_the_mocked_dataset() {
    let mut repo = MockRepository::new();
    repo.expect_list_advocates().returning(|| Ok(dataset()));

    let filter = FilterState {
        specialty: Some("Grief".to_string()),
        ..FilterState::default()
    };
    let page = main_service::load_index_page(&repo, filter).unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.advocates[0].first_name, "Bea");
    assert_eq!(page.options.specialties, vec!["ADHD", "Anxiety", "Grief"]);
    assert_eq!(page.query_string.as_deref(), Some("specialty=Grief"));
}

#[test]
fn api_list_advocates_returns_every_row() {
    let mut repo = MockRepository::new();
    repo.expect_list_advocates().returning(|| Ok(dataset()));

    let response = api_service::list_advocates(&repo).unwrap();
    assert_eq!(response.data.len(), 2);
    assert_eq!(response.data[0].first_name, "Ann");
}

#[test]
fn repository_errors_surface_as_service_errors() {
    let mut repo = MockRepository::new();
    repo.expect_list_advocates()
        .returning(|| Err(RepositoryError::DatabaseError("no such table".to_string())));

    let err = api_service::list_advocates(&repo).unwrap_err();
    assert!(matches!(err, ServiceError::Repository(_)));

    let mut repo = MockRepository::new();
    repo.expect_list_advocates()
        .returning(|| Err(RepositoryError::DatabaseError("no such table".to_string())));
    assert!(main_service::load_index_page(&repo, FilterState::default()).is_err());
}
