use fatigue_corpus::catalog::K8S_SERVICES;
use fatigue_corpus::{classify, search, Category, Level, LogRecord};
use proptest::prelude::*;

#[test]
fn test_auth_service_token() {
    assert_eq!(classify("auth-service", "Token validated for user-123"), Category::Auth);
}

#[test]
fn test_database_beats_app() {
    assert_eq!(
        classify("checkout-service", "Database connection pool exhausted"),
        Category::Database
    );
}

#[test]
fn test_session_table_query_is_auth() {
    // "sessions" mentions session, which outranks the query keyword
    assert_eq!(
        classify("user-service", "Executing query: SELECT * FROM sessions WHERE id=1234"),
        Category::Auth
    );
}

proptest! {
    #[test]
    fn prop_k8s_service_always_k8s(idx in 0..K8S_SERVICES.len(), message in ".*") {
        prop_assert_eq!(classify(K8S_SERVICES[idx], &message), Category::K8s);
    }

    #[test]
    fn prop_classify_is_pure(service in "[a-z-]{1,20}", message in ".{0,80}") {
        prop_assert_eq!(classify(&service, &message), classify(&service, &message));
    }

    #[test]
    fn prop_search_results_contain_query(query in "[a-z]{1,4}") {
        let corpus = fatigue_corpus::shared();
        for record in search(corpus.records(), &query) {
            prop_assert!(record.matches(&query));
        }
    }

    #[test]
    fn prop_search_never_invents_records(message in "[a-zA-Z ]{0,40}", query in "[a-zA-Z]{1,3}") {
        let records = vec![LogRecord {
            id: 0,
            timestamp: "2024-12-20 03:00:00.000Z".to_string(),
            level: Level::Info,
            service: "cart-service".to_string(),
            message: message.clone(),
            raw: message,
            category: Category::App,
        }];
        prop_assert!(search(&records, &query).len() <= 1);
    }
}
