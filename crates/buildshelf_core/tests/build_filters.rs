use buildshelf_core::db::open_db_in_memory;
use buildshelf_core::{
    BuildDraft, BuildFilter, BuildService, Role, SessionProvider, SqliteBuildRepository,
};

struct EditorSession;

impl SessionProvider for EditorSession {
    fn current_user(&self) -> Option<String> {
        Some("curator".to_string())
    }

    fn has_role(&self, role: Role) -> bool {
        role == Role::Editor
    }
}

fn draft(name: &str, author: &str, theme: &str, colors: &[&str]) -> BuildDraft {
    BuildDraft {
        colors: colors.iter().map(|color| color.to_string()).collect(),
        ..BuildDraft::new(name, author, theme)
    }
}

fn seeded_service(conn: &mut rusqlite::Connection) -> BuildService<SqliteBuildRepository<'_>> {
    let mut service = BuildService::new(SqliteBuildRepository::try_new(conn).unwrap());
    let session = EditorSession;
    service
        .create_build(
            &session,
            &draft("Ridge Castle", "Steve", "Medieval", &["Gray", "Blue"]),
        )
        .unwrap();
    service
        .create_build(
            &session,
            &draft("Forest Lodge", "Alex", "Rustic", &["Green", "Brown"]),
        )
        .unwrap();
    service
        .create_build(
            &session,
            &draft("Sky Temple", "Steve", "Fantasy", &["White"]),
        )
        .unwrap();
    service
}

#[test]
fn absent_filters_match_everything() {
    let mut conn = open_db_in_memory().unwrap();
    let service = seeded_service(&mut conn);

    let all = service.filter_builds(&BuildFilter::default()).unwrap();
    assert_eq!(all.len(), 3);
}

#[test]
fn author_filter_matches_case_insensitively() {
    let mut conn = open_db_in_memory().unwrap();
    let service = seeded_service(&mut conn);

    let filter = BuildFilter {
        author: Some("steve".to_string()),
        ..BuildFilter::default()
    };
    let builds = service.filter_builds(&filter).unwrap();

    let names: Vec<_> = builds.iter().map(|build| build.name.as_str()).collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Ridge Castle"));
    assert!(names.contains(&"Sky Temple"));
}

#[test]
fn filters_combine_with_and_semantics() {
    let mut conn = open_db_in_memory().unwrap();
    let service = seeded_service(&mut conn);

    let filter = BuildFilter {
        author: Some("Steve".to_string()),
        theme: Some("fantasy".to_string()),
        ..BuildFilter::default()
    };
    let builds = service.filter_builds(&filter).unwrap();

    assert_eq!(builds.len(), 1);
    assert_eq!(builds[0].name, "Sky Temple");
}

#[test]
fn name_filter_matches_case_insensitively() {
    let mut conn = open_db_in_memory().unwrap();
    let service = seeded_service(&mut conn);

    let filter = BuildFilter {
        name: Some("ridge castle".to_string()),
        ..BuildFilter::default()
    };
    let builds = service.filter_builds(&filter).unwrap();

    assert_eq!(builds.len(), 1);
    assert_eq!(builds[0].author, "Steve");
}

#[test]
fn color_membership_is_any_match_and_case_insensitive() {
    let mut conn = open_db_in_memory().unwrap();
    let service = seeded_service(&mut conn);

    let blue_only = BuildFilter {
        colors: vec!["blue".to_string()],
        ..BuildFilter::default()
    };
    let builds = service.filter_builds(&blue_only).unwrap();
    assert_eq!(builds.len(), 1);
    assert_eq!(builds[0].name, "Ridge Castle");

    let blue_or_brown = BuildFilter {
        colors: vec!["blue".to_string(), "BROWN".to_string()],
        ..BuildFilter::default()
    };
    let builds = service.filter_builds(&blue_or_brown).unwrap();
    let names: Vec<_> = builds.iter().map(|build| build.name.as_str()).collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Ridge Castle"));
    assert!(names.contains(&"Forest Lodge"));
}

#[test]
fn color_filter_combines_with_field_filters() {
    let mut conn = open_db_in_memory().unwrap();
    let service = seeded_service(&mut conn);

    let filter = BuildFilter {
        author: Some("Alex".to_string()),
        colors: vec!["blue".to_string(), "brown".to_string()],
        ..BuildFilter::default()
    };
    let builds = service.filter_builds(&filter).unwrap();

    assert_eq!(builds.len(), 1);
    assert_eq!(builds[0].name, "Forest Lodge");
}

#[test]
fn non_matching_filters_return_empty() {
    let mut conn = open_db_in_memory().unwrap();
    let service = seeded_service(&mut conn);

    let filter = BuildFilter {
        author: Some("Herobrine".to_string()),
        ..BuildFilter::default()
    };
    assert!(service.filter_builds(&filter).unwrap().is_empty());

    let filter = BuildFilter {
        colors: vec!["Magenta".to_string()],
        ..BuildFilter::default()
    };
    assert!(service.filter_builds(&filter).unwrap().is_empty());
}
